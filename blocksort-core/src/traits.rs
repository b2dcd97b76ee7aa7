//! Core trait for reversible block transforms.
//!
//! Each codec in blocksort maps a byte block to an encoded form and back.
//! The encoded form differs per codec (BWT carries an origin row, MTF is a
//! plain index stream), so it is an associated type.

use crate::error::Result;

/// A reversible, stateless transform over a whole block.
///
/// Implementations must build any working state fresh on every call, so a
/// single value can be shared freely between threads and runs.
pub trait Transform {
    /// Encoded representation of a block.
    type Encoded;

    /// Apply the forward transform to `input`.
    fn encode(&self, input: &[u8]) -> Result<Self::Encoded>;

    /// Invert a previously encoded block.
    fn decode(&self, encoded: &Self::Encoded) -> Result<Vec<u8>>;

    /// Encode then decode `input`, returning whether the block survived intact.
    fn roundtrips(&self, input: &[u8]) -> Result<bool> {
        let encoded = self.encode(input)?;
        Ok(self.decode(&encoded)? == input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reverse;

    impl Transform for Reverse {
        type Encoded = Vec<u8>;

        fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.iter().rev().copied().collect())
        }

        fn decode(&self, encoded: &Vec<u8>) -> Result<Vec<u8>> {
            Ok(encoded.iter().rev().copied().collect())
        }
    }

    struct Lossy;

    impl Transform for Lossy {
        type Encoded = Vec<u8>;

        fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.iter().take(1).copied().collect())
        }

        fn decode(&self, encoded: &Vec<u8>) -> Result<Vec<u8>> {
            Ok(encoded.clone())
        }
    }

    #[test]
    fn test_roundtrips_default_method() {
        assert!(Reverse.roundtrips(b"hello").unwrap());
        assert!(Reverse.roundtrips(b"").unwrap());
        assert!(!Lossy.roundtrips(b"hello").unwrap());
    }
}
