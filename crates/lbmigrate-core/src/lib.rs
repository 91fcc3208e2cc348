pub mod config;
pub mod error;
pub mod migrate;
pub mod source;
pub mod store;
pub mod transform;

pub use config::MigrationConfig;
pub use error::{Error, Result};
pub use migrate::{MigrationOutcome, MigrationPlan, Migrator, Verification};
pub use source::{load_document, parse_document};
pub use store::{LeaderboardEntry, MemoryStore, RedisStore, SortedSetStore};
pub use transform::{ScoreMap, extract_from_document, extract_scores, find_collection};
