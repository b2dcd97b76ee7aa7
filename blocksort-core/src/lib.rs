//! # blocksort Core
//!
//! Core components shared by the blocksort transforms.
//!
//! - [`error`]: Error types
//! - [`traits`]: The [`Transform`] trait implemented by every codec
//!
//! ## Architecture
//!
//! blocksort is the preprocessing half of a block-sorting compressor:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Framing / entropy coding (not part of blocksort)        │
//! ├─────────────────────────────────────────────────────────┤
//! │ Pipeline: BWT forward -> MTF encode                     │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codecs: circular suffix sort, BWT, MTF                  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate): errors, Transform trait              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use blocksort_core::{BlockSortError, Result};
//!
//! fn check_origin(first: usize, len: usize) -> Result<()> {
//!     if len > 0 && first >= len {
//!         return Err(BlockSortError::invalid_origin(first, len));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_origin(3, 4).is_ok());
//! assert!(check_origin(4, 4).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::{BlockSortError, Result};
pub use traits::Transform;

/// Number of symbols in the byte alphabet.
pub const RADIX: usize = 256;

/// Largest block the transforms accept.
///
/// The BWT origin is framed as a 32-bit integer, so a block may not hold
/// more rows than `u32` can address.
pub const MAX_BLOCK_LEN: usize = u32::MAX as usize;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BlockSortError, Result};
    pub use crate::traits::Transform;
    pub use crate::{MAX_BLOCK_LEN, RADIX};
}
