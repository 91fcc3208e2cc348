//! Sorted-set store abstraction.
//!
//! The pipeline talks to the destination through [`SortedSetStore`], so the
//! same stages run against Redis in production and against [`MemoryStore`]
//! in tests.

mod remote;

// In-memory store for testing (always available for unit and integration tests)
#[doc(hidden)]
pub mod memory;

use serde::Serialize;

use crate::error::Result;
use crate::transform::ScoreMap;

pub use remote::RedisStore;

#[doc(hidden)]
pub use memory::MemoryStore;

/// One member of a sorted set with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub member: String,
    pub score: f64,
}

impl LeaderboardEntry {
    pub fn new(member: impl Into<String>, score: f64) -> Self {
        Self {
            member: member.into(),
            score,
        }
    }
}

impl From<(String, f64)> for LeaderboardEntry {
    fn from((member, score): (String, f64)) -> Self {
        Self { member, score }
    }
}

/// Operations the migration needs from a sorted-set store.
pub trait SortedSetStore {
    /// Check that the store is reachable.
    fn ping(&mut self) -> Result<()>;

    /// Add or overwrite all scores under `key` in one call.
    ///
    /// Returns the number of members that did not exist before.
    fn add_scores(&mut self, key: &str, scores: &ScoreMap) -> Result<usize>;

    /// Number of members under `key`.
    fn cardinality(&mut self, key: &str) -> Result<usize>;

    /// All members under `key`, highest score first.
    fn range_desc(&mut self, key: &str) -> Result<Vec<LeaderboardEntry>>;
}
