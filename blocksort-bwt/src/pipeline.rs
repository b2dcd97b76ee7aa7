//! BWT followed by MTF, the preprocessing half of a block-sorting compressor.
//!
//! ```text
//! encode: raw bytes -> BWT forward -> (first, last) -> MTF encode -> (first, indices)
//! decode: (first, indices) -> MTF decode -> (first, last) -> BWT inverse -> raw bytes
//! ```

use blocksort_core::{Result, Transform};
use tracing::debug;

use crate::bwt;
use crate::config::SortConfig;
use crate::mtf;

/// A block after both forward transforms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedBlock {
    /// BWT origin row.
    pub first: u32,
    /// MTF indices of the BWT last column, one per input byte.
    pub indices: Vec<u8>,
}

impl EncodedBlock {
    /// Number of zero indices, a rough measure of how well the block clustered.
    pub fn zero_count(&self) -> usize {
        self.indices.iter().filter(|&&idx| idx == 0).count()
    }
}

/// Run BWT then MTF over `data` with the default sort.
pub fn encode(data: &[u8]) -> Result<EncodedBlock> {
    BlockSorter::default().encode(data)
}

/// Invert [`encode`].
pub fn decode(block: &EncodedBlock) -> Result<Vec<u8>> {
    BlockSorter::default().decode(block)
}

/// The combined BWT + MTF transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockSorter {
    config: SortConfig,
}

impl BlockSorter {
    /// Create a pipeline using the given sort configuration.
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// The sort configuration used by the forward transform.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Run the forward transforms, sorting on the rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn encode_parallel(&self, input: &[u8]) -> Result<EncodedBlock> {
        let block = bwt::forward_parallel(input, &self.config)?;
        Ok(EncodedBlock {
            first: block.first,
            indices: mtf::encode(&block.last),
        })
    }
}

impl Transform for BlockSorter {
    type Encoded = EncodedBlock;

    fn encode(&self, input: &[u8]) -> Result<EncodedBlock> {
        let block = bwt::forward_with_config(input, &self.config)?;
        let encoded = EncodedBlock {
            first: block.first,
            indices: mtf::encode(&block.last),
        };
        debug!(
            len = input.len(),
            first = encoded.first,
            zeros = encoded.zero_count(),
            "pipeline encode"
        );
        Ok(encoded)
    }

    fn decode(&self, encoded: &EncodedBlock) -> Result<Vec<u8>> {
        let last = mtf::decode(&encoded.indices);
        bwt::inverse(encoded.first, &last)
    }
}
