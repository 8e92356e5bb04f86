//! Hearth API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod auth;
mod dto;
mod error;
mod handlers;
mod middleware;
mod redis_session_store;
mod state;

use hearth_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;
    let access_policy = api_services::load_access_policy(config.access_policy_path.as_deref())?;
    let redis_client = config
        .redis_url
        .as_deref()
        .map(api_services::build_redis_client)
        .transpose()?;

    let app_state = api_services::build_app_state(&config, access_policy, redis_client.clone());

    if let Some(password) = config.demo_account_password.as_deref() {
        api_services::seed_demo_accounts(&app_state.account_service, password).await?;
    }

    let app = match redis_client {
        Some(client) => api_router::build_router(
            app_state,
            &config.frontend_url,
            api_services::build_redis_session_layer(
                client,
                config.cookie_secure,
                config.session_idle_minutes,
            ),
        )?,
        None => api_router::build_router(
            app_state,
            &config.frontend_url,
            api_services::build_memory_session_layer(
                config.cookie_secure,
                config.session_idle_minutes,
            ),
        )?,
    };

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "hearth-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
