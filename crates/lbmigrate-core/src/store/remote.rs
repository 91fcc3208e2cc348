use redis::{Commands, Connection};
use tracing::{debug, info};

use super::{LeaderboardEntry, SortedSetStore};
use crate::error::{Error, Result, describe_redis_error};
use crate::transform::ScoreMap;

/// Blocking Redis connection used as the migration target
pub struct RedisStore {
    connection: Connection,
}

impl RedisStore {
    /// Open a connection to `url` and confirm it answers PING.
    pub fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| Error::Connection(describe_redis_error(&e)))?;
        info!("Connecting to {}", client.get_connection_info().addr);

        let connection = client
            .get_connection()
            .map_err(|e| Error::Connection(describe_redis_error(&e)))?;

        let mut store = Self { connection };
        store.ping()?;
        Ok(store)
    }
}

impl SortedSetStore for RedisStore {
    fn ping(&mut self) -> Result<()> {
        let reply: String = redis::cmd("PING")
            .query(&mut self.connection)
            .map_err(|e| Error::Connection(describe_redis_error(&e)))?;
        debug!("PING -> {}", reply);

        if reply == "PONG" {
            Ok(())
        } else {
            Err(Error::Connection(format!("unexpected PING reply: {}", reply)))
        }
    }

    fn add_scores(&mut self, key: &str, scores: &ScoreMap) -> Result<usize> {
        // ZADD rejects an empty member list
        if scores.is_empty() {
            return Ok(0);
        }

        let items: Vec<(f64, &str)> = scores
            .iter()
            .map(|(member, score)| (*score, member.as_str()))
            .collect();

        let added: usize = self
            .connection
            .zadd_multiple(key, &items)
            .map_err(|e| Error::Write(describe_redis_error(&e)))?;
        debug!("ZADD {} -> {} new member(s)", key, added);
        Ok(added)
    }

    fn cardinality(&mut self, key: &str) -> Result<usize> {
        self.connection
            .zcard(key)
            .map_err(|e| Error::Verify(describe_redis_error(&e)))
    }

    fn range_desc(&mut self, key: &str) -> Result<Vec<LeaderboardEntry>> {
        let entries: Vec<(String, f64)> = self
            .connection
            .zrevrange_withscores(key, 0, -1)
            .map_err(|e| Error::Verify(describe_redis_error(&e)))?;
        Ok(entries.into_iter().map(LeaderboardEntry::from).collect())
    }
}
