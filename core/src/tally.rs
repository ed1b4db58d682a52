use std::fmt;

use crate::condition::Condition;

/// Running counts of poles to replace and to repair.
///
/// Sound poles are not counted. `Display` renders the report line body,
/// `replaced` first: `"<replaced> <repaired>"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub replaced: u64,
    pub repaired: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and record every height of an in-memory sequence.
    pub fn from_heights<I>(heights: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut tally = Self::new();
        for height in heights {
            tally.record(Condition::classify(height));
        }
        tally
    }

    /// Increments at most one counter.
    pub fn record(&mut self, condition: Condition) {
        match condition {
            Condition::Replace => self.replaced += 1,
            Condition::Repair => self.repaired += 1,
            Condition::Sound => {}
        }
    }

    /// Poles that need work of any kind.
    pub fn flagged(&self) -> u64 {
        self.replaced + self.repaired
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.replaced, self.repaired)
    }
}
