//! Block keys and their packed integer encoding.
//!
//! A block of size t is fully described by its two content strings and the
//! shape of its top and left edges. Because neighbouring LCS cells differ by
//! exactly 0 or 1, an edge of t steps is a t-bit [`OffsetVector`]. All four
//! components have a small fixed width for a given t, so a [`BlockKey`] packs
//! into a dense index in `0..key_space(t)`.

use crate::alphabet::{Symbol, SYMBOL_COUNT};

/// Increments along one block edge; bit k is the step from cell k to cell k+1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetVector {
    bits: u32,
    len: u8,
}

impl OffsetVector {
    /// Build from raw bits. Bits at or above `len` must be clear.
    #[inline]
    pub fn new(bits: u32, len: usize) -> Self {
        debug_assert!(len < 32);
        debug_assert_eq!(bits >> len, 0, "offset bits exceed vector length");
        Self {
            bits,
            len: len as u8,
        }
    }

    /// Consecutive differences of `t + 1` absolute edge values.
    ///
    /// # Panics
    /// Panics if any step is not 0 or 1, which would mean the edge did not
    /// come from an LCS grid.
    pub fn from_edge(edge: &[u32]) -> Self {
        let mut bits = 0u32;
        for (k, w) in edge.windows(2).enumerate() {
            match w[1].checked_sub(w[0]) {
                Some(0) => {}
                Some(1) => bits |= 1 << k,
                _ => panic!("edge step {} -> {} at {k} is not 0 or 1", w[0], w[1]),
            }
        }
        Self::new(bits, edge.len().saturating_sub(1))
    }

    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn step(&self, k: usize) -> u32 {
        (self.bits >> k) & 1
    }

    /// Cumulative sum starting at 0: absolute edge values relative to the
    /// block's top-left corner.
    pub fn to_edge(&self) -> Vec<u32> {
        let mut edge = Vec::with_capacity(self.len() + 1);
        let mut acc = 0;
        edge.push(acc);
        for k in 0..self.len() {
            acc += self.step(k);
            edge.push(acc);
        }
        edge
    }
}

/// Read a content string as a base-5 number, first symbol most significant.
#[inline]
pub fn content_index(content: &[Symbol]) -> usize {
    content
        .iter()
        .fold(0, |acc, s| acc * SYMBOL_COUNT + s.code() as usize)
}

/// Inverse of [`content_index`] for strings of length `t`.
pub fn content_from_index(mut index: usize, t: usize) -> Vec<Symbol> {
    let mut content = vec![Symbol::A; t];
    for slot in content.iter_mut().rev() {
        *slot = Symbol::from_code((index % SYMBOL_COUNT) as u8);
        index /= SYMBOL_COUNT;
    }
    content
}

/// Number of distinct content strings of length `t`.
#[inline]
pub fn content_space(t: usize) -> usize {
    SYMBOL_COUNT.pow(t as u32)
}

/// Number of distinct block keys for block size `t`: `5^(2t) · 4^t`.
#[inline]
pub fn key_space(t: usize) -> usize {
    content_space(t) * content_space(t) * (1 << (2 * t))
}

/// Everything a block's internal scores depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockKey {
    /// [`content_index`] of the slice of `u` along the block's rows.
    pub u: usize,
    /// [`content_index`] of the slice of `v` along the block's columns.
    pub v: usize,
    /// Top edge, left to right.
    pub row_offsets: OffsetVector,
    /// Left edge, top to bottom.
    pub col_offsets: OffsetVector,
}

impl BlockKey {
    /// Mixed-radix packing: `((u · 5^t + v) · 2^t + row) · 2^t + col`.
    #[inline]
    pub fn pack(&self, t: usize) -> usize {
        debug_assert_eq!(self.row_offsets.len(), t);
        debug_assert_eq!(self.col_offsets.len(), t);
        let content = self.u * content_space(t) + self.v;
        (((content << t) | self.row_offsets.bits() as usize) << t) | self.col_offsets.bits() as usize
    }

    #[inline]
    pub fn unpack(index: usize, t: usize) -> Self {
        let mask = (1usize << t) - 1;
        let col = (index & mask) as u32;
        let row = ((index >> t) & mask) as u32;
        let content = index >> (2 * t);
        let space = content_space(t);
        Self {
            u: content / space,
            v: content % space,
            row_offsets: OffsetVector::new(row, t),
            col_offsets: OffsetVector::new(col, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_to_offsets_and_back() {
        let edge = [3, 4, 4, 5];
        let ov = OffsetVector::from_edge(&edge);
        assert_eq!(ov.len(), 3);
        assert_eq!(ov.bits(), 0b101);
        assert_eq!(ov.to_edge(), vec![0, 1, 1, 2]);
    }

    #[test]
    fn empty_edge() {
        let ov = OffsetVector::from_edge(&[7]);
        assert!(ov.is_empty());
        assert_eq!(ov.to_edge(), vec![0]);
    }

    #[test]
    #[should_panic(expected = "not 0 or 1")]
    fn rejects_jumps() {
        let _ = OffsetVector::from_edge(&[0, 2]);
    }

    #[test]
    #[should_panic(expected = "not 0 or 1")]
    fn rejects_decrease() {
        let _ = OffsetVector::from_edge(&[1, 0]);
    }

    #[test]
    fn content_index_is_base_five() {
        use Symbol::*;
        assert_eq!(content_index(&[A, A]), 0);
        assert_eq!(content_index(&[A, T]), 1);
        assert_eq!(content_index(&[T, A]), 5);
        assert_eq!(content_index(&[Pad, Pad]), 24);
        assert_eq!(content_from_index(7, 2), vec![T, C]);
        assert_eq!(content_index(&[]), 0);
    }

    #[test]
    fn key_space_sizes() {
        assert_eq!(key_space(0), 1);
        assert_eq!(key_space(1), 5 * 5 * 4);
        assert_eq!(key_space(2), 25 * 25 * 16);
    }

    #[test]
    fn packing_covers_key_space_exactly() {
        let t = 2;
        let mut seen = vec![false; key_space(t)];
        for u in 0..content_space(t) {
            for v in 0..content_space(t) {
                for row in 0..(1u32 << t) {
                    for col in 0..(1u32 << t) {
                        let key = BlockKey {
                            u,
                            v,
                            row_offsets: OffsetVector::new(row, t),
                            col_offsets: OffsetVector::new(col, t),
                        };
                        let idx = key.pack(t);
                        assert!(!seen[idx], "collision at {idx}");
                        seen[idx] = true;
                        assert_eq!(BlockKey::unpack(idx, t), key);
                    }
                }
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }
}
