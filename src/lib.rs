//! Longest Common Subsequence length by block decomposition ("Four Russians").
//!
//! The classic LCS table takes O(n·m) time. This crate instead cuts the table
//! into t×t blocks and looks each block up in a table precomputed once per
//! block size, touching only the block boundaries of the global grid.
//!
//! ## Core idea
//! 1. Adjacent LCS cells differ by exactly 0 or 1, so a block edge of t steps
//!    is a t-bit offset vector.
//! 2. A block's internal scores depend only on its two content strings and its
//!    top and left offset vectors, never on its position.
//! 3. Enumerate every such combination once ([`table::BlockTable`]), then walk
//!    the blocks of the real grid and read their bottom and right edges from
//!    the table ([`engine::FourRussians`]).
//!
//! Inputs are DNA over `{A, T, C, G}`. Both sequences are padded with a
//! never-matching sentinel to a common power-of-two length, so any lengths are
//! accepted.
//!
//! ## Quick start
//! ```
//! use four_russians_lcs::lcs_length;
//!
//! assert_eq!(lcs_length(b"GACGTAGCATAAGCGC", b"TGCAACGTATAACGGG").unwrap(), 11);
//! assert_eq!(lcs_length(b"AAAA", b"TTTT").unwrap(), 0);
//! assert!(lcs_length(b"ACGT", b"ACGN").is_err());
//! ```
//!
//! ## Block size
//! The textbook choice is t = ⌊log₄ n⌋, which makes the method sub-quadratic.
//! The table for block size t holds `5^(2t) · 4^t` local grids, though, and
//! t = 4 needs roughly 2.5 GB. The default engine therefore caps t at 2
//! ([`utils::DEFAULT_MAX_BLOCK_SIZE`]). That is a constant-factor speedup over
//! the quadratic DP, not an asymptotic one. Raise the cap to get ⌊log₄ n⌋ up
//! to 4:
//!
//! ```
//! use four_russians_lcs::FourRussians;
//!
//! assert_eq!(FourRussians::new().block_size_for(256).unwrap(), 2);
//! let engine = FourRussians::builder().with_max_block_size(4).build();
//! assert_eq!(engine.block_size_for(256).unwrap(), 4);
//! ```
//!
//! ## Features
//! - `parallel`: fill block tables and wavefront schedules with `rayon`.
//! - `tracing`: emit spans for precomputation and assembly.

pub mod alphabet;
pub mod baseline;
pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod grid;
pub mod render;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::FourRussiansBuilder;
pub use crate::engine::{lcs_length, BoundaryGrid, FourRussians, Schedule};
pub use crate::error::{Error, Result};
pub use crate::traits::LcsSolver;
