use crate::engine::{FourRussians, Schedule};
use crate::utils::DEFAULT_MAX_BLOCK_SIZE;

/// Configuration for [`FourRussians`].
///
/// ```
/// use four_russians_lcs::{FourRussiansBuilder, Schedule};
///
/// let engine = FourRussiansBuilder::new()
///     .with_block_size(2)
///     .with_schedule(Schedule::Wavefront)
///     .build();
/// assert_eq!(engine.lcs_length(b"ATCG", b"ATCG").unwrap(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct FourRussiansBuilder {
    block_size: Option<usize>,
    max_block_size: usize,
    schedule: Schedule,
}

impl Default for FourRussiansBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FourRussiansBuilder {
    pub fn new() -> Self {
        Self {
            block_size: None,
            max_block_size: DEFAULT_MAX_BLOCK_SIZE,
            schedule: Schedule::RowMajor,
        }
    }

    /// Fix the block size instead of deriving it from the input length.
    /// Zero forces the unblocked fallback.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Upper bound for the derived block size.
    pub fn with_max_block_size(mut self, max_block_size: usize) -> Self {
        self.max_block_size = max_block_size;
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn build(self) -> FourRussians {
        FourRussians::from_parts(self.block_size, self.max_block_size, self.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let engine = FourRussiansBuilder::new().build();
        assert_eq!(engine.schedule(), Schedule::RowMajor);
        assert_eq!(engine.block_size_for(1 << 12).unwrap(), DEFAULT_MAX_BLOCK_SIZE);
    }

    #[test]
    fn max_block_size_caps_derived_size() {
        let engine = FourRussiansBuilder::new().with_max_block_size(1).build();
        assert_eq!(engine.block_size_for(1 << 12).unwrap(), 1);
        let engine = FourRussiansBuilder::new().with_max_block_size(0).build();
        assert_eq!(engine.block_size_for(1 << 12).unwrap(), 0);
    }

    #[test]
    fn raised_cap_reaches_log4() {
        let engine = FourRussiansBuilder::new().build();
        assert_eq!(engine.block_size_for(256).unwrap(), 2);
        assert_eq!(engine.block_size_for(4096).unwrap(), 2);
        let engine = FourRussiansBuilder::new().with_max_block_size(4).build();
        assert_eq!(engine.block_size_for(256).unwrap(), 4);
        assert_eq!(engine.block_size_for(4096).unwrap(), 4);
        // ⌊log₄ 64⌋ = 3 rounds down to 2 so it divides 64.
        assert_eq!(engine.block_size_for(64).unwrap(), 2);
    }

    #[test]
    fn zero_block_size_forces_fallback() {
        let engine = FourRussiansBuilder::new().with_block_size(0).build();
        assert_eq!(engine.block_size_for(64).unwrap(), 0);
        assert_eq!(engine.lcs_length(b"GATTACA", b"TACGATA").unwrap(), 4);
    }
}
