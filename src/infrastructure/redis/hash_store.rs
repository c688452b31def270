use crate::domain::error::DomainError;
use crate::domain::ports::hash_store::HashStore;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::collections::HashMap;
use std::time::Duration;

/// COUNT hint for SCAN batches.
const SCAN_COUNT: usize = 100;

/// Redis adapter for the hash-store port. Holds a multiplexed connection;
/// clones of it share one TCP stream, so per-call cloning is cheap.
pub struct RedisHashStore {
    conn: MultiplexedConnection,
}

impl RedisHashStore {
    /// Connect and verify the server with PING. `response_timeout` caps every
    /// command round-trip, `connect_timeout` caps connection establishment;
    /// callers wanting a per-call deadline can additionally wrap any store
    /// operation in `tokio::time::timeout`.
    pub async fn connect(
        url: &str,
        response_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = redis::Client::open(url)
            .map_err(|e| DomainError::StoreUnavailable(format!("invalid url {url:?}: {e}")))?;
        let mut conn = client
            .get_multiplexed_async_connection_with_timeouts(response_timeout, connect_timeout)
            .await
            .map_err(store_unavailable)?;
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(store_unavailable)?;
        Ok(Self { conn })
    }
}

fn store_unavailable(err: redis::RedisError) -> DomainError {
    DomainError::StoreUnavailable(err.to_string())
}

#[async_trait]
impl HashStore for RedisHashStore {
    async fn set_fields(&self, key: &str, fields: &[(String, String)]) -> Result<(), DomainError> {
        if fields.is_empty() {
            // HSET rejects an empty field list; nothing to write anyway.
            return Ok(());
        }
        let mut conn = self.conn.clone();
        let _: () = conn
            .hset_multiple(key, fields)
            .await
            .map_err(store_unavailable)?;
        Ok(())
    }

    async fn fields(&self, key: &str) -> Result<HashMap<String, String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.hgetall(key).await.map_err(store_unavailable)
    }

    async fn field(&self, key: &str, field: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.hget(key, field).await.map_err(store_unavailable)
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(key).await.map_err(store_unavailable)?;
        Ok(())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        let mut conn = self.conn.clone();
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_COUNT)
                .query_async(&mut conn)
                .await
                .map_err(store_unavailable)?;
            keys.extend(batch);
            cursor = next;
            if cursor == 0 {
                break;
            }
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let result = RedisHashStore::connect(
            "not-a-valid-url",
            Duration::from_secs(1),
            Duration::from_secs(1),
        )
        .await;
        assert!(matches!(result, Err(DomainError::StoreUnavailable(_))));
    }
}
