use std::sync::Arc;

use hearth_application::{AccessPolicy, AccountService, PreferenceService, PreferenceStore};
use hearth_infrastructure::{
    Argon2PasswordHasher, InMemoryAccountRepository, InMemoryPreferenceStore,
    RedisPreferenceStore,
};

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub fn build_app_state(
    config: &ApiConfig,
    access_policy: AccessPolicy,
    redis_client: Option<redis::Client>,
) -> AppState {
    let preference_store: Arc<dyn PreferenceStore> = match redis_client {
        Some(client) => Arc::new(RedisPreferenceStore::new(client, "hearth:preferences")),
        None => Arc::new(InMemoryPreferenceStore::new()),
    };

    let account_service = AccountService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(Argon2PasswordHasher::new()),
    );

    AppState::new(
        access_policy,
        account_service,
        PreferenceService::new(preference_store),
        config.frontend_url.clone(),
    )
}
