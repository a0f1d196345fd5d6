//! Error taxonomy for the block-decomposition LCS engine.
//!
//! Every failure is a permanent, input-dependent condition: the computation is
//! pure and deterministic, so nothing here is retried.

use crate::utils::MAX_BLOCK_SIZE;

/// Which input sequence a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    U,
    V,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::U => f.write_str("u"),
            Side::V => f.write_str("v"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A byte outside `{A, T, C, G}` was found in an input sequence.
    #[error("invalid symbol {:?} at position {position} of sequence {side}", as_char(.byte))]
    InvalidAlphabet { side: Side, position: usize, byte: u8 },

    /// The padded length is not an exact multiple of the block size.
    #[error("padded length {len} is not a multiple of block size {block_size}")]
    BlockSizeMismatch { len: usize, block_size: usize },

    /// The block table for this size would not fit in memory.
    #[error("block size {block_size} exceeds the supported maximum of {}", MAX_BLOCK_SIZE)]
    BlockSizeTooLarge { block_size: usize },
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let e = Error::InvalidAlphabet {
            side: Side::V,
            position: 3,
            byte: b'N',
        };
        assert_eq!(e.to_string(), "invalid symbol 'N' at position 3 of sequence v");

        let e = Error::BlockSizeMismatch {
            len: 64,
            block_size: 3,
        };
        assert_eq!(
            e.to_string(),
            "padded length 64 is not a multiple of block size 3"
        );
    }
}
