//! Block-sorting transforms for blocksort.
//!
//! This crate provides the reversible preprocessing stages of a bzip2-style
//! compressor:
//!
//! 1. Circular suffix sort - orders every rotation of a block
//! 2. Burrows-Wheeler Transform (BWT) - keeps the last column of that order
//! 3. Move-to-Front Transform (MTF) - turns clustered bytes into small indices
//!
//! Entropy coding and stream framing belong to the caller.
//!
//! ## Example
//!
//! ```rust
//! use blocksort_bwt::{bwt, mtf, pipeline};
//!
//! let block = bwt::forward(b"ABRACADABRA!").unwrap();
//! assert_eq!(block.first, 3);
//! assert_eq!(block.last, b"ARD!RCAAAABB");
//! assert_eq!(bwt::inverse(block.first, &block.last).unwrap(), b"ABRACADABRA!");
//!
//! assert_eq!(mtf::encode(b"AAA"), vec![65, 0, 0]);
//!
//! let encoded = pipeline::encode(b"banana").unwrap();
//! assert_eq!(pipeline::decode(&encoded).unwrap(), b"banana");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
mod config;
/// Move-to-Front Transform implementation.
pub mod mtf;
pub mod pipeline;
/// Circular suffix sorting.
pub mod suffix;

pub use blocksort_core::{BlockSortError, RADIX, Result, Transform};
pub use bwt::{BurrowsWheeler, BwtBlock};
pub use config::{SortConfig, SortDepth, SortStrategy};
pub use mtf::{MoveToFront, MtfDecoder, MtfEncoder};
pub use pipeline::{BlockSorter, EncodedBlock};
pub use suffix::{CircularSuffixArray, suffix_sort};
