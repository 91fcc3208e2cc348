//! Extraction of player scores from the export tree.
//!
//! The export nests records two levels deep:
//! `{"__collections__": {"<collection>": {"<doc-id>": {"name": .., "score": ..}}}}`.
//! Every lookup yields `None` instead of failing so that a missing level ends
//! the migration cleanly.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Top-level key holding all collections in the export.
pub const COLLECTIONS_KEY: &str = "__collections__";

/// Key under a collection holding nested sub-collection metadata.
pub const METADATA_KEY: &str = "__collections__";

/// Scores keyed by player initials.
///
/// Inserting initials that already exist replaces the previous score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreMap {
    scores: BTreeMap<String, f64>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a score, returning the score it replaced
    pub fn insert(&mut self, initials: impl Into<String>, score: f64) -> Option<f64> {
        self.scores.insert(initials.into(), score)
    }

    pub fn get(&self, initials: &str) -> Option<f64> {
        self.scores.get(initials).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.scores.iter()
    }
}

impl<'a> IntoIterator for &'a ScoreMap {
    type Item = (&'a String, &'a f64);
    type IntoIter = btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

/// Locate the records of `collection` in the export.
///
/// Returns `None` when either level is missing, is not an object, or the
/// collection has no entries.
pub fn find_collection<'a>(
    document: &'a Value,
    collection: &str,
) -> Option<&'a Map<String, Value>> {
    document
        .get(COLLECTIONS_KEY)
        .and_then(|collections| collections.get(collection))
        .and_then(Value::as_object)
        .filter(|records| !records.is_empty())
}

/// Build a score map from the records of one collection.
///
/// Records are visited in document order, so for repeated initials the
/// later record wins.
pub fn extract_scores(records: &Map<String, Value>) -> ScoreMap {
    let mut scores = ScoreMap::new();

    for (doc_id, record) in records {
        if doc_id == METADATA_KEY {
            continue;
        }

        let Some(record) = record.as_object() else {
            warn!("Skipping record {}: not an object", doc_id);
            continue;
        };

        match (record_initials(record), record_score(record)) {
            (Some(initials), Some(score)) => {
                if let Some(previous) = scores.insert(initials, score) {
                    debug!(
                        "Record {} replaces score {} for {}",
                        doc_id, previous, initials
                    );
                }
            }
            _ => debug!("Skipping record {}: missing name or score", doc_id),
        }
    }

    scores
}

/// Find the collection and extract its scores in one step.
///
/// An absent collection yields an empty map.
pub fn extract_from_document(document: &Value, collection: &str) -> ScoreMap {
    find_collection(document, collection)
        .map(extract_scores)
        .unwrap_or_default()
}

fn record_initials(record: &Map<String, Value>) -> Option<&str> {
    record
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

/// Numeric score of a record.
///
/// Only JSON numbers count. A numeric string such as `"10"` is treated as
/// absent rather than coerced, even though Redis would parse it. `null` is
/// absent; `0` is a real score.
fn record_score(record: &Map<String, Value>) -> Option<f64> {
    record.get("score").and_then(Value::as_f64)
}
