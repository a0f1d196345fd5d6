//! Quadratic reference LCS.
//!
//! Fills the classic `(|u|+1) × (|v|+1)` table with no padding and no blocks.
//! Used to cross-check the block engine.

use crate::alphabet::encode;
use crate::error::{Result, Side};
use crate::grid::fill_grid;
use crate::traits::LcsSolver;

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveLcs;

impl LcsSolver for NaiveLcs {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn lcs_length(&self, u: &[u8], v: &[u8]) -> Result<u32> {
        let a = encode(u, Side::U)?;
        let b = encode(v, Side::V)?;
        let first_row = vec![0; b.len() + 1];
        let first_col = vec![0; a.len() + 1];
        Ok(fill_grid(&a, &b, &first_row, &first_col).last())
    }
}

/// Two-row LCS length over raw bytes, without alphabet validation.
///
/// Keeps only two rows, so memory is `O(|v|)`. Used by the scale probe for
/// inputs too long for a full table.
pub fn naive_lcs_length(u: &[u8], v: &[u8]) -> u32 {
    let m = v.len();
    let mut prev = vec![0u32; m + 1];
    let mut curr = vec![0u32; m + 1];

    for &cu in u {
        for j in 1..=m {
            curr[j] = if cu == v[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_values() {
        let solver = NaiveLcs;
        assert_eq!(solver.lcs_length(b"ATCG", b"ATCG").unwrap(), 4);
        assert_eq!(solver.lcs_length(b"AAAA", b"TTTT").unwrap(), 0);
        assert_eq!(solver.lcs_length(b"", b"ACG").unwrap(), 0);
        assert_eq!(
            solver
                .lcs_length(b"GACGTAGCATAAGCGC", b"TGCAACGTATAACGGG")
                .unwrap(),
            11
        );
    }

    #[test]
    fn two_row_variant_agrees() {
        let cases: [(&[u8], &[u8]); 4] = [
            (b"", b""),
            (b"A", b""),
            (b"GATTACA", b"TACGATA"),
            (b"TCAGTACTAGTTATCAGTCTAGTCAGCTACTA", b"GTCAGTACTAGTTATCAGTCTAGTCAGCTACT"),
        ];
        for (u, v) in cases {
            assert_eq!(naive_lcs_length(u, v), NaiveLcs.lcs_length(u, v).unwrap());
        }
    }

    #[test]
    fn validates_alphabet() {
        assert!(NaiveLcs.lcs_length(b"ACGT", b"ACGX").is_err());
    }
}
