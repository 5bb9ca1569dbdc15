use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, trace, warn};
use viewcount_core::error::Result;
use viewcount_core::{CounterStore, StorageError};

/// A Redis-based implementation of [`CounterStore`].
///
/// Counters are kept as plain string values under their storage keys using
/// `GET` and `SET`. No `INCR` is issued, so the store offers the same
/// read-then-write contract as any other [`CounterStore`].
#[derive(Debug, Clone)]
pub struct RedisCounterStore {
    conn: redis::aio::MultiplexedConnection,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");
    let lowered = message.to_ascii_lowercase();
    if lowered.contains("timed out") {
        StorageError::Timeout(message)
    } else if lowered.contains("connection refused") || lowered.contains("broken pipe") {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

impl RedisCounterStore {
    /// Creates a store over an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a multiplexed connection to `redis_url`.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| StorageError::Unavailable(format!("invalid Redis url: {e}")))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StorageError::Unavailable(format!("failed to connect to Redis: {e}")))?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        trace!(key, "fetching counter from Redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => {
                debug!(key, hit = value.is_some(), "fetched counter from Redis");
                Ok(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        trace!(key, value, "writing counter to Redis");

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(key, value).await {
            Ok(()) => {
                debug!(key, "stored counter in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(key, error = %e, "Redis error on set");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }
}
