//! DNA alphabet, the padding sentinel, and sequence preparation.
//!
//! Input sequences are raw bytes over `{A, T, C, G}`. Before blocking, both
//! sequences are right-padded with [`Symbol::Pad`] to the same power-of-two
//! length. The pad symbol never matches anything, itself included, so the
//! padded suffix adds no matches and the LCS of the padded pair equals the LCS
//! of the originals.

use crate::error::{Error, Result, Side};
use crate::utils::next_power_of_two;

/// Number of distinct symbols a block may contain (four bases plus the pad).
pub const SYMBOL_COUNT: usize = 5;

/// One encoded position of a working sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Symbol {
    A = 0,
    T = 1,
    C = 2,
    G = 3,
    Pad = 4,
}

impl Symbol {
    /// All symbols in code order.
    pub const ALL: [Symbol; SYMBOL_COUNT] = [
        Symbol::A,
        Symbol::T,
        Symbol::C,
        Symbol::G,
        Symbol::Pad,
    ];

    /// Parse a single input byte. Only uppercase bases are accepted.
    #[inline]
    pub fn from_base(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Symbol::A),
            b'T' => Some(Symbol::T),
            b'C' => Some(Symbol::C),
            b'G' => Some(Symbol::G),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: u8) -> Self {
        Self::ALL[code as usize]
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the recurrence may take the diagonal step for this pair.
    #[inline]
    pub fn matches(self, other: Symbol) -> bool {
        self == other && self != Symbol::Pad
    }
}

/// Encode a raw sequence, failing on the first byte outside the alphabet.
pub fn encode(seq: &[u8], side: Side) -> Result<Vec<Symbol>> {
    seq.iter()
        .enumerate()
        .map(|(position, &byte)| {
            Symbol::from_base(byte).ok_or(Error::InvalidAlphabet {
                side,
                position,
                byte,
            })
        })
        .collect()
}

/// Two sequences padded to a common power-of-two length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedPair {
    pub u: Vec<Symbol>,
    pub v: Vec<Symbol>,
    /// Unpadded length of `u`.
    pub len_u: usize,
    /// Unpadded length of `v`.
    pub len_v: usize,
}

impl PaddedPair {
    /// Validate both inputs and pad them to `next_power_of_two(max(|u|, |v|))`.
    pub fn prepare(u: &[u8], v: &[u8]) -> Result<Self> {
        let mut eu = encode(u, Side::U)?;
        let mut ev = encode(v, Side::V)?;
        let n = next_power_of_two(u.len().max(v.len()));
        eu.resize(n, Symbol::Pad);
        ev.resize(n, Symbol::Pad);
        Ok(Self {
            u: eu,
            v: ev,
            len_u: u.len(),
            len_v: v.len(),
        })
    }

    /// Padded length n shared by both sequences.
    #[inline]
    pub fn len(&self) -> usize {
        self.u.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_never_matches() {
        assert!(!Symbol::Pad.matches(Symbol::Pad));
        for s in [Symbol::A, Symbol::T, Symbol::C, Symbol::G] {
            assert!(s.matches(s));
            assert!(!s.matches(Symbol::Pad));
            assert!(!Symbol::Pad.matches(s));
        }
        assert!(!Symbol::A.matches(Symbol::T));
    }

    #[test]
    fn codes_round_trip() {
        for s in Symbol::ALL {
            assert_eq!(Symbol::from_code(s.code()), s);
        }
    }

    #[test]
    fn rejects_foreign_bytes() {
        let err = encode(b"ACGN", Side::U).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAlphabet {
                side: Side::U,
                position: 3,
                byte: b'N'
            }
        );
        // Lowercase and the sentinel itself are not valid input.
        assert!(encode(b"acgt", Side::V).is_err());
        assert!(encode(b"A$", Side::V).is_err());
    }

    #[test]
    fn pads_to_common_power_of_two() {
        let p = PaddedPair::prepare(b"GATTACA", b"CAT").unwrap();
        assert_eq!(p.len(), 8);
        assert_eq!(p.v.len(), 8);
        assert_eq!((p.len_u, p.len_v), (7, 3));
        assert_eq!(p.u[7], Symbol::Pad);
        assert!(p.v[3..].iter().all(|&s| s == Symbol::Pad));
        assert_eq!(p.u[0], Symbol::G);
    }

    #[test]
    fn exact_power_of_two_is_not_padded() {
        let p = PaddedPair::prepare(b"ATCG", b"ATCG").unwrap();
        assert_eq!(p.len(), 4);
        assert!(p.u.iter().all(|&s| s != Symbol::Pad));
    }

    #[test]
    fn error_reports_v_side() {
        let err = PaddedPair::prepare(b"ACGT", b"AXGT").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidAlphabet {
                side: Side::V,
                position: 1,
                ..
            }
        ));
    }
}
