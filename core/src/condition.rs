//! Threshold rule mapping a single height reading to a pole condition.

use std::fmt;

/// Readings strictly below this height mean the pole must be replaced.
pub const REPLACE_BELOW: i64 = 50;

/// Readings at or above [`REPLACE_BELOW`] and strictly below this height mean
/// the pole must be repaired. Anything higher is sound.
pub const REPAIR_BELOW: i64 = 85;

/// Outcome of classifying one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Below [`REPLACE_BELOW`], negative readings included.
    Replace,
    /// In `[REPLACE_BELOW, REPAIR_BELOW)`.
    Repair,
    /// At or above [`REPAIR_BELOW`]. Not reported.
    Sound,
}

impl Condition {
    pub fn classify(height: i64) -> Self {
        match height {
            h if h < REPLACE_BELOW => Self::Replace,
            h if h < REPAIR_BELOW => Self::Repair,
            _ => Self::Sound,
        }
    }

    /// Machine-readable name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Repair => "repair",
            Self::Sound => "sound",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
