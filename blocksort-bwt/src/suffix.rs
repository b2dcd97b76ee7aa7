//! Circular suffix sorting.
//!
//! Sorts the `n` rotations of a block without materialising them. Every
//! rotation is addressed by its start offset into one doubled copy of the
//! block (`data ++ data`), so the rotation starting at `i` is
//! `text[i..i + n]`.
//!
//! The default strategy is a 3-way radix quicksort (multikey quicksort) that
//! partitions the offset array on the byte at the current depth. Long common
//! prefixes, typical of the runs BWT input contains, are consumed one byte
//! per level without re-comparing the bytes already known to be equal.

use std::cmp::Ordering;

use blocksort_core::{BlockSortError, Result};
use tracing::trace;

use crate::config::{SortConfig, SortDepth, SortStrategy};

/// Minimum partition size handed to a separate rayon task.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 16 * 1024;

/// Maximum nesting of rayon forks before falling back to the sequential sort.
#[cfg(feature = "parallel")]
const MAX_FORK_DEPTH: usize = 16;

/// Sorted order of the circular suffixes of a block.
///
/// `index(r)` is the start offset of the rotation ranked `r`. The order is
/// fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixArray {
    index: Vec<usize>,
}

impl CircularSuffixArray {
    /// Sort the circular suffixes of `data` with the default configuration.
    pub fn new(data: &[u8]) -> Self {
        Self::with_config(data, &SortConfig::default())
    }

    /// Sort the circular suffixes of `data` with an explicit configuration.
    pub fn with_config(data: &[u8], config: &SortConfig) -> Self {
        let index = match config.strategy {
            SortStrategy::Radix => radix_sort(data, config.depth),
            SortStrategy::Reference => reference_sort(data),
        };
        Self { index }
    }

    /// Sort the circular suffixes of `data`, splitting large partitions
    /// across the rayon thread pool.
    ///
    /// The result is identical to [`CircularSuffixArray::with_config`].
    #[cfg(feature = "parallel")]
    pub fn new_parallel(data: &[u8], config: &SortConfig) -> Self {
        let index = match config.strategy {
            SortStrategy::Radix => par_radix_sort(data, config.depth),
            SortStrategy::Reference => reference_sort(data),
        };
        Self { index }
    }

    /// Number of suffixes (the block length).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the block was empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Start offset of the suffix ranked `rank`.
    pub fn index(&self, rank: usize) -> Result<usize> {
        self.index
            .get(rank)
            .copied()
            .ok_or_else(|| BlockSortError::index_out_of_range(rank, self.index.len()))
    }

    /// Rank of the unrotated block, i.e. the row holding offset 0.
    ///
    /// Returns 0 for an empty block.
    pub fn origin_rank(&self) -> usize {
        self.index.iter().position(|&offset| offset == 0).unwrap_or(0)
    }

    /// The full rank-to-offset permutation.
    pub fn as_slice(&self) -> &[usize] {
        &self.index
    }

    /// Consume the array, returning the permutation.
    pub fn into_vec(self) -> Vec<usize> {
        self.index
    }
}

/// Sort the circular suffixes of `data`, returning the rank-to-offset
/// permutation.
pub fn suffix_sort(data: &[u8]) -> Vec<usize> {
    CircularSuffixArray::new(data).into_vec()
}

/// Concatenate `data` with itself so every rotation is a contiguous slice.
fn doubled(data: &[u8]) -> Vec<u8> {
    let mut text = Vec::with_capacity(data.len() * 2);
    text.extend_from_slice(data);
    text.extend_from_slice(data);
    text
}

fn radix_sort(data: &[u8], depth: SortDepth) -> Vec<usize> {
    let n = data.len();
    let mut index: Vec<usize> = (0..n).collect();
    if n < 2 {
        return index;
    }

    let text = doubled(data);
    sort_range(&mut index, &text, 0, depth.limit(n));
    index
}

#[cfg(feature = "parallel")]
fn par_radix_sort(data: &[u8], depth: SortDepth) -> Vec<usize> {
    let n = data.len();
    let mut index: Vec<usize> = (0..n).collect();
    if n < 2 {
        return index;
    }

    let text = doubled(data);
    par_sort_range(&mut index, &text, 0, depth.limit(n), 0);
    index
}

/// 3-way partition of `index` on the byte at depth `d`.
///
/// Uses the first entry's byte as pivot. Returns `(lt, gt)` such that
/// `index[..lt]` holds smaller bytes, `index[lt..gt]` equal bytes and
/// `index[gt..]` larger bytes.
fn partition(index: &mut [usize], text: &[u8], d: usize) -> (usize, usize) {
    let pivot = text[index[0] + d];
    let mut lt = 0;
    let mut gt = index.len();
    let mut i = 1;

    while i < gt {
        match text[index[i] + d].cmp(&pivot) {
            Ordering::Less => {
                index.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                index.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt, gt)
}

/// Sort `index` on suffixes starting at depth `depth`, stopping at `limit`.
///
/// Pending ranges live on an explicit stack: the equal partition of a block
/// made of one repeated byte descends `n` levels, which would overflow the
/// call stack on large blocks.
fn sort_range(index: &mut [usize], text: &[u8], depth: usize, limit: usize) {
    let mut stack = vec![(0, index.len(), depth)];
    let mut partitions = 0usize;

    while let Some((lo, hi, d)) = stack.pop() {
        if hi - lo < 2 || d >= limit {
            continue;
        }

        let (lt, gt) = partition(&mut index[lo..hi], text, d);
        partitions += 1;

        stack.push((lo + gt, hi, d));
        stack.push((lo + lt, lo + gt, d + 1));
        stack.push((lo, lo + lt, d));
    }

    trace!(len = index.len(), partitions, "radix suffix sort finished");
}

#[cfg(feature = "parallel")]
fn par_sort_range(index: &mut [usize], text: &[u8], d: usize, limit: usize, forks: usize) {
    if index.len() < PARALLEL_THRESHOLD || forks >= MAX_FORK_DEPTH {
        sort_range(index, text, d, limit);
        return;
    }
    if d >= limit {
        return;
    }

    let (lt, gt) = partition(index, text, d);
    let (less, rest) = index.split_at_mut(lt);
    let (equal, greater) = rest.split_at_mut(gt - lt);

    rayon::join(
        || par_sort_range(less, text, d, limit, forks + 1),
        || {
            rayon::join(
                || par_sort_range(equal, text, d + 1, limit, forks + 1),
                || par_sort_range(greater, text, d, limit, forks + 1),
            )
        },
    );
}

/// View of one rotation inside the shared doubled buffer.
struct CircularSuffix<'a> {
    text: &'a [u8],
    offset: usize,
}

impl CircularSuffix<'_> {
    fn bytes(&self) -> &[u8] {
        let n = self.text.len() / 2;
        &self.text[self.offset..self.offset + n]
    }
}

impl PartialEq for CircularSuffix<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes() == other.bytes()
    }
}

impl Eq for CircularSuffix<'_> {}

impl PartialOrd for CircularSuffix<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CircularSuffix<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes().cmp(other.bytes())
    }
}

fn reference_sort(data: &[u8]) -> Vec<usize> {
    let text = doubled(data);
    let mut suffixes: Vec<CircularSuffix<'_>> = (0..data.len())
        .map(|offset| CircularSuffix {
            text: &text,
            offset,
        })
        .collect();

    suffixes.sort();
    suffixes.into_iter().map(|suffix| suffix.offset).collect()
}
