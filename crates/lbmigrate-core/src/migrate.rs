//! The migration pipeline.
//!
//! Stages run strictly in order and the first error ends the run:
//! load the export, extract scores, bulk write, read back. Connecting to the
//! store happens before any of this and is done by the caller, which hands
//! the connected store to [`Migrator::run`].

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::MigrationConfig;
use crate::error::{Error, Result};
use crate::source::load_document;
use crate::store::{LeaderboardEntry, SortedSetStore};
use crate::transform::{ScoreMap, extract_scores, find_collection};

/// Scores extracted from the export, before anything is written
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MigrationPlan {
    /// The collection path is missing or empty
    NoCollection { collection: String },
    /// The collection exists but no record has both name and score
    NoValidScores { collection: String },
    /// Scores ready to be written
    Ready { scores: ScoreMap },
}

impl MigrationPlan {
    pub fn scores(&self) -> Option<&ScoreMap> {
        match self {
            Self::Ready { scores } => Some(scores),
            _ => None,
        }
    }
}

/// Read-back of the destination after a write
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verification {
    pub cardinality: usize,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MigrationOutcome {
    NoCollection {
        collection: String,
    },
    NoValidScores {
        collection: String,
    },
    Migrated {
        key: String,
        written: usize,
        added: usize,
        #[serde(flatten)]
        verification: Verification,
    },
}

pub struct Migrator {
    config: MigrationConfig,
}

impl Migrator {
    pub fn new(config: MigrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Load the export and extract the scores to migrate.
    pub fn plan(&self) -> Result<MigrationPlan> {
        info!("Reading scores from {}", self.config.input.display());
        let document = load_document(&self.config.input)?;
        Ok(self.plan_document(&document))
    }

    /// Extract the scores to migrate from an already parsed export.
    pub fn plan_document(&self, document: &Value) -> MigrationPlan {
        let collection = self.config.collection_name().to_string();

        let Some(records) = find_collection(document, &collection) else {
            info!("No data found for collection '{}'", collection);
            return MigrationPlan::NoCollection { collection };
        };

        let scores = extract_scores(records);
        info!(
            "Extracted {} score(s) from {} record(s)",
            scores.len(),
            records.len()
        );

        if scores.is_empty() {
            MigrationPlan::NoValidScores { collection }
        } else {
            MigrationPlan::Ready { scores }
        }
    }

    /// Bulk write `scores` to the destination key.
    ///
    /// Returns the number of members that were not present before.
    pub fn write<S: SortedSetStore>(&self, store: &mut S, scores: &ScoreMap) -> Result<usize> {
        info!(
            "Writing {} score(s) to '{}'",
            scores.len(),
            self.config.key
        );
        store.add_scores(&self.config.key, scores)
    }

    /// Read the destination back.
    ///
    /// An empty set after a write is reported as [`Error::VerificationFailed`].
    pub fn verify<S: SortedSetStore>(&self, store: &mut S) -> Result<Verification> {
        let key = &self.config.key;
        let cardinality = store.cardinality(key)?;
        info!("'{}' holds {} member(s)", key, cardinality);

        if cardinality == 0 {
            return Err(Error::VerificationFailed { key: key.clone() });
        }

        let leaderboard = store.range_desc(key)?;
        Ok(Verification {
            cardinality,
            leaderboard,
        })
    }

    /// Run load, extract, write and verify against `store`.
    pub fn run<S: SortedSetStore>(&self, store: &mut S) -> Result<MigrationOutcome> {
        let scores = match self.plan()? {
            MigrationPlan::NoCollection { collection } => {
                return Ok(MigrationOutcome::NoCollection { collection });
            }
            MigrationPlan::NoValidScores { collection } => {
                return Ok(MigrationOutcome::NoValidScores { collection });
            }
            MigrationPlan::Ready { scores } => scores,
        };

        let added = self.write(store, &scores)?;
        let verification = self.verify(store)?;

        Ok(MigrationOutcome::Migrated {
            key: self.config.key.clone(),
            written: scores.len(),
            added,
            verification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn migrator(key: &str) -> Migrator {
        Migrator::new(MigrationConfig {
            key: key.to_string(),
            ..MigrationConfig::default()
        })
    }

    #[test]
    fn test_plan_document_ready() {
        let doc = json!({
            "__collections__": {
                "board": { "d1": { "name": "AAA", "score": 100 } }
            }
        });

        let plan = migrator("board").plan_document(&doc);
        let scores = plan.scores().unwrap();
        assert_eq!(scores.get("AAA"), Some(100.0));
    }

    #[test]
    fn test_plan_document_no_collection() {
        let plan = migrator("board").plan_document(&json!({ "__collections__": {} }));
        assert_eq!(
            plan,
            MigrationPlan::NoCollection {
                collection: "board".to_string()
            }
        );
    }

    #[test]
    fn test_plan_document_no_valid_scores() {
        let doc = json!({
            "__collections__": { "board": { "d1": { "name": "AAA" } } }
        });
        let plan = migrator("board").plan_document(&doc);
        assert!(matches!(plan, MigrationPlan::NoValidScores { .. }));
    }

    #[test]
    fn test_plan_uses_collection_override() {
        let doc = json!({
            "__collections__": { "scores": { "d1": { "name": "AAA", "score": 1 } } }
        });
        let migrator = Migrator::new(MigrationConfig {
            key: "board".to_string(),
            collection: Some("scores".to_string()),
            ..MigrationConfig::default()
        });
        assert!(migrator.plan_document(&doc).scores().is_some());
    }

    #[test]
    fn test_verify_empty_set_fails() {
        let mut store = MemoryStore::new();
        let result = migrator("board").verify(&mut store);
        assert!(matches!(result, Err(Error::VerificationFailed { key }) if key == "board"));
    }

    #[test]
    fn test_write_then_verify() {
        let mut store = MemoryStore::new();
        let mut scores = ScoreMap::new();
        scores.insert("AAA", 100.0);
        scores.insert("BBB", 250.0);

        let migrator = migrator("board");
        assert_eq!(migrator.write(&mut store, &scores).unwrap(), 2);

        let verification = migrator.verify(&mut store).unwrap();
        assert_eq!(verification.cardinality, 2);
        assert_eq!(
            verification.leaderboard,
            vec![
                LeaderboardEntry::new("BBB", 250.0),
                LeaderboardEntry::new("AAA", 100.0),
            ]
        );
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = MigrationOutcome::NoCollection {
            collection: "board".to_string(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            json!({ "status": "no_collection", "collection": "board" })
        );
    }
}
