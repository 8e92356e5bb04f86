use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use hearth_core::{AppError, SessionUser};
use hearth_domain::RoleClaim;
use tower_sessions::Session;
use tracing::info;

use crate::dto::{NavigationEntryResponse, SessionResponse};
use crate::error::ApiResult;
use crate::state::AppState;

use super::{current_user, session_state};

/// POST /auth/logout - Destroy the current session.
pub async fn logout_handler(session: Session) -> ApiResult<StatusCode> {
    let subject = current_user(&session)
        .await?
        .map(|user| user.subject().to_owned());

    session
        .delete()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    if let Some(subject) = subject {
        info!(%subject, "signed out");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/session - Describe the signed-in user and what they may open.
pub async fn session_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<SessionResponse>> {
    let user = current_user(&session)
        .await?
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    Ok(Json(session_response(&state, &user)))
}

pub(super) fn session_response(state: &AppState, user: &SessionUser) -> SessionResponse {
    let role = RoleClaim::new(user.role()).role();
    let navigation = state
        .navigation_filter
        .visible_entries(&session_state(Some(user)));

    SessionResponse {
        subject: user.subject().to_owned(),
        display_name: user.display_name().to_owned(),
        email: user.email().map(ToOwned::to_owned),
        role: user.role().to_owned(),
        allowed_modules: state
            .access_policy
            .allowed_modules(role)
            .iter()
            .map(|module| module.as_str().to_owned())
            .collect(),
        landing_route: state.access_policy.fallback_route(role).to_owned(),
        navigation: navigation.iter().map(NavigationEntryResponse::from).collect(),
    }
}
