//! Redis-backed preference store.

use async_trait::async_trait;
use hearth_application::PreferenceStore;
use hearth_core::{AppError, AppResult};
use hearth_domain::PreferenceKey;
use redis::AsyncCommands;

/// Redis implementation of the preference store port.
///
/// Values live under `{prefix}:{subject}:{key}` with no expiry.
#[derive(Clone)]
pub struct RedisPreferenceStore {
    client: redis::Client,
    key_prefix: String,
}

impl RedisPreferenceStore {
    /// Creates a store with a configured Redis client and key prefix.
    #[must_use]
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    fn key_for(&self, subject: &str, key: PreferenceKey) -> String {
        format!("{}:{subject}:{}", self.key_prefix, key.as_str())
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|error| AppError::Internal(format!("failed to connect to redis: {error}")))
    }
}

#[async_trait]
impl PreferenceStore for RedisPreferenceStore {
    async fn get(&self, subject: &str, key: PreferenceKey) -> AppResult<Option<String>> {
        let mut connection = self.connection().await?;
        connection
            .get(self.key_for(subject, key))
            .await
            .map_err(|error| AppError::Internal(format!("failed to read preference: {error}")))
    }

    async fn set(&self, subject: &str, key: PreferenceKey, value: &str) -> AppResult<()> {
        let mut connection = self.connection().await?;
        connection
            .set::<_, _, ()>(self.key_for(subject, key), value)
            .await
            .map_err(|error| AppError::Internal(format!("failed to store preference: {error}")))?;

        tracing::debug!(subject, key = key.as_str(), "preference stored");
        Ok(())
    }
}
