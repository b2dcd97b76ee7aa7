//! Error types for blocksort operations.
//!
//! Every failure in the transforms is a caller-contract violation: an index
//! outside the block, an origin row that does not exist, or a block too large
//! to frame. There is no I/O and nothing to retry.

use thiserror::Error;

/// The main error type for blocksort operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockSortError {
    /// Rank query past the end of a suffix array.
    #[error("Index out of range: {index} is not below length {len}")]
    IndexOutOfRange {
        /// The requested rank.
        index: usize,
        /// Number of suffixes.
        len: usize,
    },

    /// BWT origin row outside the transformed block.
    #[error("Invalid BWT origin: row {first} does not exist in a block of {len} bytes")]
    InvalidOrigin {
        /// The origin row supplied by the caller.
        first: usize,
        /// Length of the last column.
        len: usize,
    },

    /// Move-to-front index outside the byte alphabet.
    #[error("Invalid move-to-front index: {index} (must be 0-255)")]
    InvalidSymbolIndex {
        /// The offending index.
        index: usize,
    },

    /// Block too large for a 32-bit origin.
    #[error("Input too large: {len} bytes exceeds the block limit of {max}")]
    InputTooLarge {
        /// Length of the rejected input.
        len: usize,
        /// Maximum supported length.
        max: usize,
    },
}

/// Result type alias for blocksort operations.
pub type Result<T> = std::result::Result<T, BlockSortError>;

impl BlockSortError {
    /// Create an index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid origin error.
    pub fn invalid_origin(first: usize, len: usize) -> Self {
        Self::InvalidOrigin { first, len }
    }

    /// Create an invalid symbol index error.
    pub fn invalid_symbol_index(index: usize) -> Self {
        Self::InvalidSymbolIndex { index }
    }

    /// Create an input too large error.
    pub fn input_too_large(len: usize, max: usize) -> Self {
        Self::InputTooLarge { len, max }
    }
}
