//! Block-size selection helpers.

/// Largest block size the table precomputer accepts.
///
/// The table holds `5^(2t) · 4^t` entries, so t = 4 already needs about
/// 100 million entries.
pub const MAX_BLOCK_SIZE: usize = 4;

/// Default upper bound for the automatically chosen block size.
pub const DEFAULT_MAX_BLOCK_SIZE: usize = 2;

/// Smallest power of two `>= len` (1 for `len == 0`).
#[inline]
pub fn next_power_of_two(len: usize) -> usize {
    len.max(1).next_power_of_two()
}

/// ⌊log₄ n⌋, with `log4_floor(0) == 0`.
#[inline]
pub fn log4_floor(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        (n.ilog2() / 2) as usize
    }
}

/// Pick the block size for a padded length `n`.
///
/// Starts from ⌊log₄ n⌋, caps it at `max_block_size`, then rounds down to a
/// power of two so that it divides the power-of-two `n`. Returns 0 when the
/// grid is too small for blocking.
#[inline]
pub fn default_block_size(n: usize, max_block_size: usize) -> usize {
    let t = log4_floor(n).min(max_block_size);
    if t == 0 {
        0
    } else {
        1 << t.ilog2()
    }
}
