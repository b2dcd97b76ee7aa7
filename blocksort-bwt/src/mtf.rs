//! Move-to-Front Transform.
//!
//! MTF replaces each byte with its position in a recency list, then moves
//! that byte to the front. After BWT, runs of equal bytes turn into runs of
//! zeros.
//!
//! The encoder keeps the list twice, as position-to-symbol and
//! symbol-to-position tables, so finding a byte is a single lookup and only
//! the `idx` entries ahead of it are shifted.

use blocksort_core::{BlockSortError, RADIX, Result, Transform};

const fn identity() -> [u8; RADIX] {
    let mut table = [0u8; RADIX];
    let mut i = 0;
    while i < RADIX {
        table[i] = i as u8;
        i += 1;
    }
    table
}

/// Stateful move-to-front encoder.
///
/// A fresh encoder starts from the identity list; use a new one per block.
#[derive(Debug, Clone)]
pub struct MtfEncoder {
    position_to_symbol: [u8; RADIX],
    symbol_to_position: [u8; RADIX],
}

impl MtfEncoder {
    /// Create an encoder with the list in natural byte order.
    pub fn new() -> Self {
        Self {
            position_to_symbol: identity(),
            symbol_to_position: identity(),
        }
    }

    /// Encode one byte, returning its current position in the list.
    pub fn encode_symbol(&mut self, symbol: u8) -> u8 {
        let idx = self.symbol_to_position[symbol as usize];
        let pos = idx as usize;

        if pos > 0 {
            self.position_to_symbol.copy_within(0..pos, 1);
            self.position_to_symbol[0] = symbol;
            for (p, &s) in self.position_to_symbol[..=pos].iter().enumerate() {
                self.symbol_to_position[s as usize] = p as u8;
            }
        }

        idx
    }

    /// Current position of `symbol` in the list.
    pub fn position_of(&self, symbol: u8) -> u8 {
        self.symbol_to_position[symbol as usize]
    }
}

impl Default for MtfEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful move-to-front decoder.
#[derive(Debug, Clone)]
pub struct MtfDecoder {
    position_to_symbol: [u8; RADIX],
}

impl MtfDecoder {
    /// Create a decoder with the list in natural byte order.
    pub fn new() -> Self {
        Self {
            position_to_symbol: identity(),
        }
    }

    /// Decode one list position back to its byte.
    pub fn decode_symbol(&mut self, idx: u8) -> u8 {
        let pos = idx as usize;
        let symbol = self.position_to_symbol[pos];

        if pos > 0 {
            self.position_to_symbol.copy_within(0..pos, 1);
            self.position_to_symbol[0] = symbol;
        }

        symbol
    }

    /// Decode a list position supplied as a wide integer.
    ///
    /// Fails if `idx` lies outside the byte alphabet; the list is left
    /// untouched in that case.
    pub fn decode_index(&mut self, idx: usize) -> Result<u8> {
        let idx = u8::try_from(idx).map_err(|_| BlockSortError::invalid_symbol_index(idx))?;
        Ok(self.decode_symbol(idx))
    }
}

impl Default for MtfDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform Move-to-Front transform.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut encoder = MtfEncoder::new();
    data.iter().map(|&byte| encoder.encode_symbol(byte)).collect()
}

/// Perform inverse Move-to-Front transform.
pub fn decode(indices: &[u8]) -> Vec<u8> {
    let mut decoder = MtfDecoder::new();
    indices.iter().map(|&idx| decoder.decode_symbol(idx)).collect()
}

/// Inverse Move-to-Front over wide indices.
///
/// Every index is validated before any byte is produced.
pub fn decode_indices(indices: &[usize]) -> Result<Vec<u8>> {
    if let Some(&bad) = indices.iter().find(|&&idx| idx >= RADIX) {
        return Err(BlockSortError::invalid_symbol_index(bad));
    }

    let mut decoder = MtfDecoder::new();
    indices.iter().map(|&idx| decoder.decode_index(idx)).collect()
}

/// Move-to-Front as a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveToFront;

impl Transform for MoveToFront {
    type Encoded = Vec<u8>;

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(encode(input))
    }

    fn decode(&self, encoded: &Vec<u8>) -> Result<Vec<u8>> {
        Ok(decode(encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mtf_empty() {
        assert!(encode(b"").is_empty());
        assert!(decode(b"").is_empty());
    }

    #[test]
    fn test_mtf_single() {
        assert_eq!(encode(b"a"), vec![b'a']);
    }

    #[test]
    fn test_mtf_repeated() {
        let result = encode(b"AAAAAAAAAA");
        assert_eq!(result, vec![65, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(decode(&result), b"AAAAAAAAAA");
    }

    #[test]
    fn test_mtf_abracadabra_bwt() {
        // Last column of the BWT of "ABRACADABRA!"
        let result = encode(b"ARD!RCAAAABB");
        assert_eq!(result, vec![65, 82, 69, 36, 2, 69, 4, 0, 0, 0, 69, 0]);
    }

    #[test]
    fn test_mtf_roundtrip() {
        let test_cases = [
            b"hello".as_slice(),
            b"banana",
            b"abracadabra",
            b"the quick brown fox",
            &[255, 0, 255, 128, 0, 1],
        ];

        for data in test_cases {
            let transformed = encode(data);
            let recovered = decode(&transformed);
            assert_eq!(recovered, data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_mtf_tables_stay_inverse() {
        let mut encoder = MtfEncoder::new();
        for &byte in b"zebra crossing 0123456789".iter() {
            encoder.encode_symbol(byte);
            for symbol in 0..=255u8 {
                let pos = encoder.position_of(symbol) as usize;
                assert_eq!(encoder.position_to_symbol[pos], symbol);
            }
        }
        assert_eq!(encoder.position_of(b'9'), 0);
    }

    #[test]
    fn test_mtf_produces_low_values() {
        let data = b"bbbbbaaaacccc";
        let transformed = encode(data);

        let zeros = transformed.iter().filter(|&&b| b == 0).count();
        assert!(
            zeros > data.len() / 2,
            "MTF should produce many zeros for runs"
        );
    }

    #[test]
    fn test_decode_index_out_of_range() {
        let mut decoder = MtfDecoder::new();
        assert_eq!(
            decoder.decode_index(256),
            Err(BlockSortError::InvalidSymbolIndex { index: 256 })
        );
        assert_eq!(decoder.decode_index(255).unwrap(), 255);
    }

    #[test]
    fn test_decode_indices_validates_first() {
        assert_eq!(
            decode_indices(&[65, 0, 300, 0]),
            Err(BlockSortError::InvalidSymbolIndex { index: 300 })
        );
        assert_eq!(decode_indices(&[65, 0, 0]).unwrap(), b"AAA");
    }

    #[test]
    fn test_fresh_state_per_run() {
        assert_eq!(encode(b"B"), vec![66]);
        assert_eq!(encode(b"B"), vec![66]);
        assert_eq!(MoveToFront.encode(b"B").unwrap(), vec![66]);
    }
}
