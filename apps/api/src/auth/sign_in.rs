use axum::Json;
use axum::extract::State;
use hearth_application::SignInOutcome;
use hearth_core::{AppError, SessionUser};
use tower_sessions::Session;
use tracing::info;

use crate::dto::{SessionResponse, SignInRequest};
use crate::error::ApiResult;
use crate::state::AppState;

use super::session::session_response;
use super::{SESSION_CREATED_AT_KEY, SESSION_USER_KEY};

/// POST /auth/sign-in - Authenticate with email and password.
pub async fn sign_in_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignInRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let outcome = state
        .account_service
        .sign_in(&payload.email, &payload.password)
        .await?;

    let SignInOutcome::Authenticated(account) = outcome else {
        info!("sign-in rejected");
        // Same message for unknown emails and wrong passwords.
        return Err(AppError::Unauthorized("invalid email or password".to_owned()).into());
    };

    let user = SessionUser::new(
        account.id.to_string(),
        account.display_name,
        Some(account.email),
        account.role.as_str(),
    );

    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to cycle session id: {error}")))?;
    session
        .insert(SESSION_USER_KEY, &user)
        .await
        .map_err(|error| AppError::Internal(format!("failed to persist session user: {error}")))?;
    session
        .insert(SESSION_CREATED_AT_KEY, chrono::Utc::now().timestamp())
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to persist session creation time: {error}"))
        })?;

    info!(subject = user.subject(), role = user.role(), "signed in");
    Ok(Json(session_response(&state, &user)))
}
