use axum::Json;
use axum::extract::State;
use tower_sessions::Session;

use crate::auth::{current_user, session_state};
use crate::dto::NavigationResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/navigation - Menu entries visible to the current session.
///
/// Anonymous visitors get the public entries only.
pub async fn navigation_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<NavigationResponse>> {
    let user = current_user(&session).await?;
    let entries = state
        .navigation_filter
        .visible_entries(&session_state(user.as_ref()));

    Ok(Json(NavigationResponse::from_entries(&entries)))
}
