use std::collections::HashMap;

use async_trait::async_trait;
use hearth_application::PreferenceStore;
use hearth_core::AppResult;
use hearth_domain::PreferenceKey;
use tokio::sync::RwLock;

/// Process-local preference store. Values are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<HashMap<(String, PreferenceKey), String>>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, subject: &str, key: PreferenceKey) -> AppResult<Option<String>> {
        let values = self.values.read().await;
        Ok(values.get(&(subject.to_owned(), key)).cloned())
    }

    async fn set(&self, subject: &str, key: PreferenceKey, value: &str) -> AppResult<()> {
        self.values
            .write()
            .await
            .insert((subject.to_owned(), key), value.to_owned());
        Ok(())
    }
}
