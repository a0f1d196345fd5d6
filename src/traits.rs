//! Common interface for LCS solvers.
//!
//! The block engine and the quadratic baseline both implement [`LcsSolver`],
//! which lets tests, benches and the scale probe treat them interchangeably.

use crate::error::Result;

pub trait LcsSolver {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Exact LCS length of two sequences over `{A, T, C, G}`.
    ///
    /// Fails with [`Error::InvalidAlphabet`](crate::error::Error::InvalidAlphabet)
    /// on any other byte.
    fn lcs_length(&self, u: &[u8], v: &[u8]) -> Result<u32>;
}
