//! Training parameters.

use crate::error::{Error, Result};
use crate::symbol::{Symbol, FIRST_SYNTHETIC};

/// Default hard cap on merge steps.
pub const DEFAULT_MAX_MERGES: usize = 65_000;

/// Default number of merge steps between checkpoints.
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 1_000;

/// Default number of merge steps between progress lines.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Default live fraction below which the stream is compacted.
///
/// With √½ the array length halves every two compactions, which keeps total
/// traversal work at O(n log n).
pub const DEFAULT_COMPACTION_THRESHOLD: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Largest merge cap whose ids still fit in a [`Symbol`].
pub const MAX_MERGES_LIMIT: usize = Symbol::MAX as usize + 1 - FIRST_SYNTHETIC as usize;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    /// Stop after this many merges even if pairs still repeat.
    pub max_merges: usize,
    /// Emit a checkpoint every this many merges (and once at the end).
    pub checkpoint_interval: usize,
    /// Log a progress line every this many merges.
    pub progress_interval: usize,
    /// Compact when live symbols / array length drops below this.
    pub compaction_threshold: f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            max_merges: DEFAULT_MAX_MERGES,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            compaction_threshold: DEFAULT_COMPACTION_THRESHOLD,
        }
    }
}

impl TrainerConfig {
    pub fn with_max_merges(mut self, max_merges: usize) -> Self {
        self.max_merges = max_merges;
        self
    }

    pub fn with_checkpoint_interval(mut self, interval: usize) -> Self {
        self.checkpoint_interval = interval;
        self
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn with_compaction_threshold(mut self, threshold: f64) -> Self {
        self.compaction_threshold = threshold;
        self
    }

    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.max_merges > MAX_MERGES_LIMIT {
            return Err(Error::InvalidConfig(format!(
                "max_merges {} exceeds the 16-bit id space ({} merges)",
                self.max_merges, MAX_MERGES_LIMIT
            )));
        }
        if self.checkpoint_interval == 0 {
            return Err(Error::InvalidConfig(
                "checkpoint_interval must be positive".into(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(Error::InvalidConfig(
                "progress_interval must be positive".into(),
            ));
        }
        if !(self.compaction_threshold > 0.0 && self.compaction_threshold <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "compaction_threshold {} must be in (0, 1]",
                self.compaction_threshold
            )));
        }
        Ok(())
    }
}
