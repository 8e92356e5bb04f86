//! Redis-backed session store for multi-instance deployments.

use async_trait::async_trait;
use chrono::Utc;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use tower_sessions::SessionStore;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, Error as SessionStoreError};

/// Stores each session record as JSON under `{prefix}:{id}`, expiring with
/// the session.
#[derive(Debug, Clone)]
pub struct RedisSessionStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisSessionStore {
    #[must_use]
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    fn key_for(&self, session_id: &Id) -> String {
        format!("{}:{session_id}", self.key_prefix)
    }

    async fn connection(&self) -> session_store::Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(backend_error)
    }
}

fn backend_error(error: impl std::fmt::Display) -> SessionStoreError {
    SessionStoreError::Backend(error.to_string())
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn save(&self, session_record: &Record) -> session_store::Result<()> {
        let key = self.key_for(&session_record.id);
        let remaining_seconds =
            session_record.expiry_date.unix_timestamp() - Utc::now().timestamp();
        let mut connection = self.connection().await?;

        // An already expired record is removed rather than written.
        let Ok(ttl_seconds @ 1..) = u64::try_from(remaining_seconds) else {
            connection
                .del::<_, i64>(key)
                .await
                .map_err(backend_error)?;
            return Ok(());
        };

        let encoded_record = serde_json::to_string(session_record)
            .map_err(|error| SessionStoreError::Encode(error.to_string()))?;

        connection
            .set_ex::<_, _, ()>(key, encoded_record, ttl_seconds)
            .await
            .map_err(backend_error)
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let mut connection = self.connection().await?;
        let encoded_record: Option<String> = connection
            .get(self.key_for(session_id))
            .await
            .map_err(backend_error)?;

        encoded_record
            .map(|value| {
                serde_json::from_str::<Record>(&value)
                    .map_err(|error| SessionStoreError::Decode(error.to_string()))
            })
            .transpose()
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        let mut connection = self.connection().await?;
        connection
            .del::<_, i64>(self.key_for(session_id))
            .await
            .map_err(backend_error)?;

        Ok(())
    }
}
