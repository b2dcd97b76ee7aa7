//! Burrows-Wheeler Transform.
//!
//! The forward transform sorts the rotations of a block and keeps the last
//! column of the sorted rotation matrix together with the row of the
//! unrotated block. The inverse needs only that column: key-indexed
//! counting recovers, for each row, the row of its rotation one step to the
//! right, and walking those links from the origin row spells the block
//! backwards.

use blocksort_core::{BlockSortError, MAX_BLOCK_LEN, RADIX, Result, Transform};
use tracing::debug;

use crate::config::SortConfig;
use crate::suffix::CircularSuffixArray;

/// Output of the forward transform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BwtBlock {
    /// Rank of the unrotated block among the sorted rotations.
    pub first: u32,
    /// Last column: the byte circularly preceding each sorted rotation.
    pub last: Vec<u8>,
}

impl BwtBlock {
    /// Number of bytes in the block.
    pub fn len(&self) -> usize {
        self.last.len()
    }

    /// Whether the block is empty.
    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

/// Perform the Burrows-Wheeler Transform with the default sort.
pub fn forward(data: &[u8]) -> Result<BwtBlock> {
    forward_with_config(data, &SortConfig::default())
}

/// Perform the Burrows-Wheeler Transform with an explicit sort configuration.
pub fn forward_with_config(data: &[u8], config: &SortConfig) -> Result<BwtBlock> {
    check_block_len(data.len())?;
    let csa = CircularSuffixArray::with_config(data, config);
    Ok(last_column(data, &csa))
}

/// Perform the Burrows-Wheeler Transform, sorting on the rayon thread pool.
///
/// Produces the same block as [`forward_with_config`].
#[cfg(feature = "parallel")]
pub fn forward_parallel(data: &[u8], config: &SortConfig) -> Result<BwtBlock> {
    check_block_len(data.len())?;
    let csa = CircularSuffixArray::new_parallel(data, config);
    Ok(last_column(data, &csa))
}

fn check_block_len(len: usize) -> Result<()> {
    if len > MAX_BLOCK_LEN {
        return Err(BlockSortError::input_too_large(len, MAX_BLOCK_LEN));
    }
    Ok(())
}

fn last_column(data: &[u8], csa: &CircularSuffixArray) -> BwtBlock {
    let n = data.len();
    if n == 0 {
        return BwtBlock::default();
    }

    let last: Vec<u8> = csa
        .as_slice()
        .iter()
        .map(|&offset| data[(offset + n - 1) % n])
        .collect();

    // Length was checked against MAX_BLOCK_LEN, so every rank fits.
    let first = csa.origin_rank() as u32;
    debug!(len = n, first, "BWT forward");

    BwtBlock { first, last }
}

/// Perform the inverse Burrows-Wheeler Transform.
///
/// `first` must name a row of `last` unless `last` is empty.
pub fn inverse(first: u32, last: &[u8]) -> Result<Vec<u8>> {
    let n = last.len();
    let first = first as usize;
    if n == 0 {
        return Ok(Vec::new());
    }
    if first >= n {
        return Err(BlockSortError::invalid_origin(first, n));
    }

    let mut count = [0usize; RADIX];
    for &byte in last {
        count[byte as usize] += 1;
    }

    // count[c] = number of bytes in `last` smaller than c
    let mut total = 0;
    for slot in count.iter_mut() {
        let occurrences = *slot;
        *slot = total;
        total += occurrences;
    }

    let mut next = vec![0usize; n];
    for (i, &byte) in last.iter().enumerate() {
        let slot = &mut count[byte as usize];
        next[i] = *slot;
        *slot += 1;
    }

    // The walk yields the block back to front.
    let mut output = vec![0u8; n];
    let mut current = first;
    for out in output.iter_mut().rev() {
        *out = last[current];
        current = next[current];
    }

    debug!(len = n, first, "BWT inverse");
    Ok(output)
}

/// The Burrows-Wheeler Transform as a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BurrowsWheeler {
    config: SortConfig,
}

impl BurrowsWheeler {
    /// Create a transform using the given sort configuration.
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// The sort configuration used by the forward transform.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }
}

impl Transform for BurrowsWheeler {
    type Encoded = BwtBlock;

    fn encode(&self, input: &[u8]) -> Result<BwtBlock> {
        forward_with_config(input, &self.config)
    }

    fn decode(&self, encoded: &BwtBlock) -> Result<Vec<u8>> {
        inverse(encoded.first, &encoded.last)
    }
}
