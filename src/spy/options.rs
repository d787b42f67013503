//! Tracker tuning.

use serde::{Deserialize, Serialize};

/// Default distance added to the scroll offset before testing sections.
pub const DEFAULT_OFFSET: f64 = 100.0;

/// Default fraction of the viewport height subtracted from both section bounds.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Tuning knobs of the "in view" predicate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpyOptions {
    pub offset: f64,
    pub threshold: f64,
}

impl Default for SpyOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SpyOptions {
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}
