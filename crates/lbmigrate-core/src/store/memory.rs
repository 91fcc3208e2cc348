//! In-memory sorted-set store for testing
//!
//! Mirrors the Redis semantics the migration relies on: ZADD overwrites
//! existing members, ZREVRANGE orders by score descending and breaks ties
//! by member in reverse lexicographic order.

use std::collections::HashMap;

use super::{LeaderboardEntry, SortedSetStore};
use crate::error::{Error, Result};
use crate::transform::ScoreMap;

#[derive(Debug, Clone)]
pub struct MemoryStore {
    sets: HashMap<String, HashMap<String, f64>>,
    calls: usize,
    reachable: bool,
    fail_writes: bool,
    drop_writes: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            sets: HashMap::new(),
            calls: 0,
            reachable: true,
            fail_writes: false,
            drop_writes: false,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose PING fails
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::default()
        }
    }

    /// Reject every write with an error
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Acknowledge writes without keeping the data
    pub fn dropping_writes(mut self) -> Self {
        self.drop_writes = true;
        self
    }

    /// Total number of store operations issued so far
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Score of `member` under `key`, bypassing the call counter
    pub fn score(&self, key: &str, member: &str) -> Option<f64> {
        self.sets.get(key).and_then(|set| set.get(member)).copied()
    }
}

impl SortedSetStore for MemoryStore {
    fn ping(&mut self) -> Result<()> {
        self.calls += 1;
        if self.reachable {
            Ok(())
        } else {
            Err(Error::Connection("mock store unreachable".to_string()))
        }
    }

    fn add_scores(&mut self, key: &str, scores: &ScoreMap) -> Result<usize> {
        self.calls += 1;
        if self.fail_writes {
            return Err(Error::Write("mock store rejected write".to_string()));
        }
        if self.drop_writes {
            return Ok(scores.len());
        }

        let set = self.sets.entry(key.to_string()).or_default();
        let mut added = 0;
        for (member, score) in scores {
            if set.insert(member.clone(), *score).is_none() {
                added += 1;
            }
        }
        Ok(added)
    }

    fn cardinality(&mut self, key: &str) -> Result<usize> {
        self.calls += 1;
        Ok(self.sets.get(key).map_or(0, HashMap::len))
    }

    fn range_desc(&mut self, key: &str) -> Result<Vec<LeaderboardEntry>> {
        self.calls += 1;
        let mut entries: Vec<LeaderboardEntry> = self
            .sets
            .get(key)
            .into_iter()
            .flatten()
            .map(|(member, score)| LeaderboardEntry::new(member.clone(), *score))
            .collect();
        entries.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.member.cmp(&a.member))
        });
        Ok(entries)
    }
}
