//! Block-decomposition LCS engine.
//!
//! The engine runs in three steps:
//! 1. Pad both inputs to a shared power-of-two length n and pick a block
//!    size t dividing n.
//! 2. Fetch (or build once) the [`BlockTable`] for t.
//! 3. Walk the `n/t × n/t` grid of blocks. Each block reads its top and left
//!    edges from the already-finished neighbours, turns them into offset
//!    vectors, looks up its local grid and writes its bottom and right edges
//!    back, shifted by the score at its top-left corner.
//!
//! Only block-boundary cells of the global grid are ever materialized.
//!
//! ```
//! use four_russians_lcs::FourRussians;
//!
//! let engine = FourRussians::new();
//! let len = engine.lcs_length(b"GACGTAGCATAAGCGC", b"TGCAACGTATAACGGG").unwrap();
//! assert_eq!(len, 11);
//! ```

use std::sync::OnceLock;

use crate::alphabet::{PaddedPair, Symbol};
use crate::blocks::{content_index, BlockKey, OffsetVector};
use crate::builder::FourRussiansBuilder;
use crate::error::{Error, Result};
use crate::grid::fill_grid;
use crate::table::BlockTable;
use crate::traits::LcsSolver;
use crate::utils::{default_block_size, MAX_BLOCK_SIZE};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Marker for boundary cells no block has written yet.
const UNSET: u32 = u32::MAX;

/// Order in which blocks of the global grid are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// Block rows top to bottom, each row left to right.
    #[default]
    RowMajor,
    /// Anti-diagonal waves. Blocks within one wave depend only on earlier
    /// waves; with the `parallel` feature they are computed concurrently.
    Wavefront,
}

/// Materialized block boundaries of the global score grid.
///
/// `row_lines[r][j]` holds `F(r·t, j)` and `col_lines[c][i]` holds `F(i, c·t)`.
/// Block corners live on both a row line and a column line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryGrid {
    n: usize,
    block_size: usize,
    row_lines: Vec<Vec<u32>>,
    col_lines: Vec<Vec<u32>>,
    violations: usize,
}

/// Bottom and right edges produced by one block, in global coordinates.
struct BlockOutput {
    i: usize,
    j: usize,
    bottom: Vec<u32>,
    right: Vec<u32>,
}

impl BoundaryGrid {
    /// Fresh grid with row 0 and column 0 set to zero and nothing else written.
    ///
    /// # Panics
    /// Panics if `block_size` is zero or does not divide `n`.
    pub fn new(n: usize, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        assert_eq!(n % block_size, 0, "block_size must divide n");
        let lines = n / block_size + 1;
        let mut row_lines = vec![vec![UNSET; n + 1]; lines];
        let mut col_lines = vec![vec![UNSET; n + 1]; lines];
        row_lines[0].fill(0);
        col_lines[0].fill(0);
        // F(i, 0) = F(0, j) = 0, so every line starts at zero.
        for line in row_lines.iter_mut().chain(col_lines.iter_mut()) {
            line[0] = 0;
        }
        Self {
            n,
            block_size,
            row_lines,
            col_lines,
            violations: 0,
        }
    }

    /// Padded side length n.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Blocks per side.
    #[inline]
    pub fn blocks(&self) -> usize {
        self.n / self.block_size
    }

    /// Score at `(n, n)`.
    #[inline]
    pub fn score(&self) -> u32 {
        self.row_lines[self.blocks()][self.n]
    }

    /// Value of a materialized cell, or `None` for block interiors and cells
    /// not yet written.
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        let t = self.block_size;
        let value = if i % t == 0 {
            self.row_lines[i / t][j]
        } else if j % t == 0 {
            self.col_lines[j / t][i]
        } else {
            UNSET
        };
        (value != UNSET).then_some(value)
    }

    /// Number of writes that disagreed with a value already in place.
    #[inline]
    pub fn violations(&self) -> usize {
        self.violations
    }

    /// Every block corner holds the same value on its row line and column line.
    pub fn corners_agree(&self) -> bool {
        let t = self.block_size;
        let b = self.blocks();
        (0..=b).all(|r| (0..=b).all(|c| self.row_lines[r][c * t] == self.col_lines[c][r * t]))
    }

    fn top_edge(&self, i: usize, j: usize) -> &[u32] {
        let t = self.block_size;
        &self.row_lines[i][j * t..=(j + 1) * t]
    }

    fn left_edge(&self, i: usize, j: usize) -> &[u32] {
        let t = self.block_size;
        &self.col_lines[j][i * t..=(i + 1) * t]
    }

    /// Look up block `(i, j)` from its finished top and left edges.
    fn compute_block(
        &self,
        table: &BlockTable,
        u_keys: &[usize],
        v_keys: &[usize],
        i: usize,
        j: usize,
    ) -> BlockOutput {
        let top = self.top_edge(i, j);
        let left = self.left_edge(i, j);
        debug_assert!(
            top.iter().chain(left).all(|&c| c != UNSET),
            "block ({i}, {j}) read before its neighbours"
        );
        debug_assert_eq!(top[0], left[0]);

        let offset = top[0];
        let key = BlockKey {
            u: u_keys[i],
            v: v_keys[j],
            row_offsets: OffsetVector::from_edge(top),
            col_offsets: OffsetVector::from_edge(left),
        };
        let local = table.get(&key);
        BlockOutput {
            i,
            j,
            bottom: local.bottom_row().map(|s| offset + s).collect(),
            right: local.right_col().map(|s| offset + s).collect(),
        }
    }

    fn apply(&mut self, out: BlockOutput) {
        let t = self.block_size;
        let BlockOutput { i, j, bottom, right } = out;
        for (k, value) in bottom.into_iter().enumerate() {
            let cell = &mut self.row_lines[i + 1][j * t + k];
            if *cell != UNSET && *cell != value {
                self.violations += 1;
            }
            *cell = value;
        }
        for (k, value) in right.into_iter().enumerate() {
            let cell = &mut self.col_lines[j + 1][i * t + k];
            if *cell != UNSET && *cell != value {
                self.violations += 1;
            }
            *cell = value;
        }
    }

    fn fill_row_major(&mut self, table: &BlockTable, u_keys: &[usize], v_keys: &[usize]) {
        let b = self.blocks();
        for i in 0..b {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("block_row", row = i);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            for j in 0..b {
                let out = self.compute_block(table, u_keys, v_keys, i, j);
                self.apply(out);
            }
        }
    }

    fn fill_wavefront(&mut self, table: &BlockTable, u_keys: &[usize], v_keys: &[usize]) {
        let b = self.blocks();
        for wave in 0..(2 * b).saturating_sub(1) {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("wave", wave);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let first = wave.saturating_sub(b - 1);
            let last = wave.min(b - 1);

            #[cfg(feature = "parallel")]
            let outputs: Vec<BlockOutput> = {
                let grid = &*self;
                (first..=last)
                    .into_par_iter()
                    .map(|i| grid.compute_block(table, u_keys, v_keys, i, wave - i))
                    .collect()
            };
            #[cfg(not(feature = "parallel"))]
            let outputs: Vec<BlockOutput> = (first..=last)
                .map(|i| self.compute_block(table, u_keys, v_keys, i, wave - i))
                .collect();

            for out in outputs {
                self.apply(out);
            }
        }
    }
}

impl std::fmt::Display for BoundaryGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.n + 1;
        let text = crate::render::render_cells(width, width, |i, j| self.get(i, j), ".", 2);
        f.write_str(&text)
    }
}

/// LCS length via precomputed block tables.
///
/// Tables are cached per block size for the lifetime of the engine, so each
/// size is precomputed at most once no matter how many pairs are scored.
pub struct FourRussians {
    block_size: Option<usize>,
    max_block_size: usize,
    schedule: Schedule,
    tables: [OnceLock<BlockTable>; MAX_BLOCK_SIZE + 1],
}

impl Default for FourRussians {
    fn default() -> Self {
        FourRussiansBuilder::new().build()
    }
}

impl std::fmt::Debug for FourRussians {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached: Vec<usize> = (0..=MAX_BLOCK_SIZE)
            .filter(|&t| self.tables[t].get().is_some())
            .collect();
        f.debug_struct("FourRussians")
            .field("block_size", &self.block_size)
            .field("max_block_size", &self.max_block_size)
            .field("schedule", &self.schedule)
            .field("cached_tables", &cached)
            .finish()
    }
}

impl FourRussians {
    /// Engine with automatic block size and row-major schedule.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> FourRussiansBuilder {
        FourRussiansBuilder::new()
    }

    pub(crate) fn from_parts(
        block_size: Option<usize>,
        max_block_size: usize,
        schedule: Schedule,
    ) -> Self {
        Self {
            block_size,
            max_block_size,
            schedule,
            tables: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    #[inline]
    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Block size used for a padded length `n`.
    ///
    /// An explicit size from the builder is used as-is and must divide `n`;
    /// otherwise the size comes from [`default_block_size`]. Inputs shorter
    /// than an explicit size fall back to the unblocked fill (size 0).
    pub fn block_size_for(&self, n: usize) -> Result<usize> {
        match self.block_size {
            Some(t) if t > MAX_BLOCK_SIZE => Err(Error::BlockSizeTooLarge { block_size: t }),
            Some(t) if t > n => Ok(0),
            Some(t) if t != 0 && n % t != 0 => Err(Error::BlockSizeMismatch {
                len: n,
                block_size: t,
            }),
            Some(t) => Ok(t),
            None => Ok(default_block_size(n, self.max_block_size.min(MAX_BLOCK_SIZE))),
        }
    }

    /// Block table for size `t`, built on first use.
    pub fn table(&self, t: usize) -> Result<&BlockTable> {
        if t > MAX_BLOCK_SIZE {
            return Err(Error::BlockSizeTooLarge { block_size: t });
        }
        Ok(self.tables[t].get_or_init(|| BlockTable::build(t)))
    }

    /// Build the boundary grid for `u` against `v`.
    ///
    /// When the padded length is too small for blocking, the whole grid is
    /// filled directly and returned as a single block.
    pub fn assemble(&self, u: &[u8], v: &[u8]) -> Result<BoundaryGrid> {
        let pair = PaddedPair::prepare(u, v)?;
        let n = pair.len();
        let t = self.block_size_for(n)?;

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("assemble", n, block_size = t, schedule = ?self.schedule);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if t == 0 {
            return Ok(whole_grid(&pair));
        }

        let table = self.table(t)?;
        let u_keys = chunk_keys(&pair.u, t);
        let v_keys = chunk_keys(&pair.v, t);

        let mut grid = BoundaryGrid::new(n, t);
        match self.schedule {
            Schedule::RowMajor => grid.fill_row_major(table, &u_keys, &v_keys),
            Schedule::Wavefront => grid.fill_wavefront(table, &u_keys, &v_keys),
        }
        debug_assert_eq!(grid.violations(), 0, "adjacent blocks disagree on a shared edge");
        Ok(grid)
    }

    /// Exact LCS length of `u` and `v`.
    pub fn lcs_length(&self, u: &[u8], v: &[u8]) -> Result<u32> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("four_russians", len_u = u.len(), len_v = v.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let score = self.assemble(u, v)?.score();

        #[cfg(feature = "tracing")]
        tracing::debug!(score, "lcs computed");

        Ok(score)
    }
}

impl LcsSolver for FourRussians {
    fn name(&self) -> &'static str {
        "four_russians"
    }

    fn lcs_length(&self, u: &[u8], v: &[u8]) -> Result<u32> {
        FourRussians::lcs_length(self, u, v)
    }
}

/// Exact LCS length of two DNA sequences over `{A, T, C, G}`.
///
/// Builds a fresh engine; reuse a [`FourRussians`] to share block tables
/// across calls.
pub fn lcs_length(u: &[u8], v: &[u8]) -> Result<u32> {
    FourRussians::new().lcs_length(u, v)
}

/// Packed content index of each consecutive `t`-symbol chunk.
fn chunk_keys(seq: &[Symbol], t: usize) -> Vec<usize> {
    seq.chunks_exact(t).map(content_index).collect()
}

/// Unblocked fallback: one block spanning the whole padded grid.
fn whole_grid(pair: &PaddedPair) -> BoundaryGrid {
    let n = pair.len();
    let zeros = vec![0; n + 1];
    let full = fill_grid(&pair.u, &pair.v, &zeros, &zeros);
    let mut grid = BoundaryGrid::new(n, n);
    grid.row_lines[1] = full.row(n).to_vec();
    grid.col_lines[1] = full.col(n);
    grid
}
