//! Property-based tests for the block-sorting transforms.

use std::cmp::Ordering;

use blocksort_bwt::{CircularSuffixArray, SortConfig, bwt, mtf, pipeline, suffix_sort};
use proptest::prelude::*;

/// Compare two rotations of `data` byte by byte, independent of the sorter.
fn rotation_cmp(data: &[u8], a: usize, b: usize) -> Ordering {
    let n = data.len();
    (0..n)
        .map(|k| data[(a + k) % n].cmp(&data[(b + k) % n]))
        .find(|&ord| ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Bytes drawn from a small alphabet so rotations share long prefixes.
fn clustered_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..=max_len)
}

proptest! {
    #[test]
    fn prop_bwt_roundtrip(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let block = bwt::forward(&data).unwrap();
        prop_assert_eq!(block.last.len(), data.len());
        prop_assert_eq!(bwt::inverse(block.first, &block.last).unwrap(), data);
    }

    #[test]
    fn prop_bwt_roundtrip_clustered(data in clustered_bytes(256)) {
        let block = bwt::forward(&data).unwrap();
        prop_assert_eq!(bwt::inverse(block.first, &block.last).unwrap(), data);
    }

    #[test]
    fn prop_mtf_roundtrip(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(mtf::decode(&mtf::encode(&data)), data);
    }

    #[test]
    fn prop_mtf_runs_encode_to_zero(byte in any::<u8>(), run in 1usize..64) {
        let encoded = mtf::encode(&vec![byte; run]);
        prop_assert_eq!(encoded[0], byte);
        prop_assert!(encoded[1..].iter().all(|&idx| idx == 0));
    }

    #[test]
    fn prop_suffix_sort_is_permutation(data in clustered_bytes(300)) {
        let mut index = suffix_sort(&data);
        index.sort_unstable();
        prop_assert_eq!(index, (0..data.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_suffix_sort_is_ordered(data in clustered_bytes(200)) {
        let index = suffix_sort(&data);
        for pair in index.windows(2) {
            prop_assert_ne!(rotation_cmp(&data, pair[0], pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn prop_reference_agrees_with_radix(data in clustered_bytes(200)) {
        let radix = bwt::forward_with_config(&data, &SortConfig::STRICT).unwrap();
        let reference = bwt::forward_with_config(&data, &SortConfig::REFERENCE).unwrap();
        prop_assert_eq!(radix.last, reference.last);
    }

    #[test]
    fn prop_half_period_sort_is_permutation(data in clustered_bytes(200)) {
        let csa = CircularSuffixArray::with_config(&data, &SortConfig::HALF_PERIOD);
        let mut index = csa.into_vec();
        index.sort_unstable();
        prop_assert_eq!(index, (0..data.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_pipeline_roundtrip(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = pipeline::encode(&data).unwrap();
        prop_assert_eq!(pipeline::decode(&encoded).unwrap(), data);
    }
}
