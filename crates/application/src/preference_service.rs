use std::sync::Arc;

use async_trait::async_trait;
use hearth_core::AppResult;
use hearth_domain::PreferenceKey;

/// Key-value store port for per-user interface preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value, if any.
    async fn get(&self, subject: &str, key: PreferenceKey) -> AppResult<Option<String>>;

    /// Stores a value, replacing any previous one.
    async fn set(&self, subject: &str, key: PreferenceKey, value: &str) -> AppResult<()>;
}

/// Application service for interface preferences.
#[derive(Clone)]
pub struct PreferenceService {
    store: Arc<dyn PreferenceStore>,
}

impl PreferenceService {
    /// Creates a preference service.
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Returns the effective value, falling back to the key default.
    ///
    /// Stored values that no longer validate are ignored.
    pub async fn preference(&self, subject: &str, key: PreferenceKey) -> AppResult<String> {
        let stored = self.store.get(subject, key).await?;

        Ok(stored
            .and_then(|value| key.validate_value(value.as_str()).ok())
            .unwrap_or_else(|| key.default_value().to_owned()))
    }

    /// Validates and stores a value, returning the normalized form.
    pub async fn update_preference(
        &self,
        subject: &str,
        key: PreferenceKey,
        value: &str,
    ) -> AppResult<String> {
        let normalized = key.validate_value(value)?;
        self.store.set(subject, key, normalized.as_str()).await?;
        Ok(normalized)
    }
}
