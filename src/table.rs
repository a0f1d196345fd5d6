//! Precomputed block tables.
//!
//! For block size t the table holds the full `(t+1) × (t+1)` local score grid
//! of every [`BlockKey`], stored flat in packed-key order. Local grids are
//! relative to the block's top-left corner, so the same entry serves every
//! position of the global grid with matching content and edge shape.
//!
//! Entries are independent of each other; with the `parallel` feature they
//! are filled concurrently.

use crate::blocks::{content_from_index, content_space, key_space, BlockKey, OffsetVector};
use crate::error::{Error, Result};
use crate::grid::{fill_grid, ScoreGrid};
use crate::utils::MAX_BLOCK_SIZE;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Local score grids for every block of one size.
#[derive(Clone, PartialEq, Eq)]
pub struct BlockTable {
    block_size: usize,
    stride: usize,
    cells: Vec<u8>,
}

impl std::fmt::Debug for BlockTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockTable")
            .field("block_size", &self.block_size)
            .field("entries", &self.len())
            .finish()
    }
}

impl BlockTable {
    /// Enumerate every block of size `t` and fill its local grid.
    ///
    /// Cost is `O(5^(2t) · 4^t · t²)` time and `5^(2t) · 4^t · (t+1)²` bytes.
    pub fn precompute(t: usize) -> Result<Self> {
        if t > MAX_BLOCK_SIZE {
            return Err(Error::BlockSizeTooLarge { block_size: t });
        }
        Ok(Self::build(t))
    }

    /// Unchecked variant of [`precompute`](Self::precompute); callers have
    /// already bounded `t`.
    pub(crate) fn build(t: usize) -> Self {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "precompute_blocks",
            block_size = t,
            entries = key_space(t)
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let stride = (t + 1) * (t + 1);
        let contents: Vec<_> = (0..content_space(t))
            .map(|idx| content_from_index(idx, t))
            .collect();
        let edges: Vec<_> = (0..1u32 << t)
            .map(|bits| OffsetVector::new(bits, t).to_edge())
            .collect();

        let fill_entry = |index: usize, out: &mut [u8]| {
            let key = BlockKey::unpack(index, t);
            let local = fill_grid(
                &contents[key.u],
                &contents[key.v],
                &edges[key.row_offsets.bits() as usize],
                &edges[key.col_offsets.bits() as usize],
            );
            for i in 0..=t {
                for (j, &value) in local.row(i).iter().enumerate() {
                    out[i * (t + 1) + j] = value as u8;
                }
            }
        };

        let mut cells = vec![0u8; key_space(t) * stride];

        #[cfg(feature = "parallel")]
        cells
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(index, out)| fill_entry(index, out));

        #[cfg(not(feature = "parallel"))]
        cells
            .chunks_mut(stride)
            .enumerate()
            .for_each(|(index, out)| fill_entry(index, out));

        Self {
            block_size: t,
            stride,
            cells,
        }
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of stored blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len() / self.stride
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Local grid of the block described by `key`.
    #[inline]
    pub fn get(&self, key: &BlockKey) -> BlockView<'_> {
        self.entry(key.pack(self.block_size))
    }

    /// Local grid at packed index `index`.
    #[inline]
    pub fn entry(&self, index: usize) -> BlockView<'_> {
        let start = index * self.stride;
        BlockView {
            t: self.block_size,
            cells: &self.cells[start..start + self.stride],
        }
    }
}

/// Borrowed local grid of one block.
#[derive(Debug, Clone, Copy)]
pub struct BlockView<'a> {
    t: usize,
    cells: &'a [u8],
}

impl<'a> BlockView<'a> {
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * (self.t + 1) + j] as u32
    }

    /// Bottom row, left to right (`t + 1` values).
    pub fn bottom_row(&self) -> impl Iterator<Item = u32> + 'a {
        let cells: &'a [u8] = self.cells;
        cells[self.t * (self.t + 1)..].iter().map(|&c| c as u32)
    }

    /// Right column, top to bottom (`t + 1` values).
    pub fn right_col(&self) -> impl Iterator<Item = u32> + 'a {
        let cells: &'a [u8] = self.cells;
        cells.iter().skip(self.t).step_by(self.t + 1).map(|&c| c as u32)
    }

    pub fn to_grid(&self) -> ScoreGrid {
        let mut grid = ScoreGrid::zeros(self.t, self.t);
        for i in 0..=self.t {
            for j in 0..=self.t {
                grid.set(i, j, self.get(i, j));
            }
        }
        grid
    }
}
