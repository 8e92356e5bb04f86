use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use hearth_application::GateDecision;
use hearth_core::AppError;
use tower_sessions::Session;
use tracing::info;

use crate::auth::{current_user, session_state};
use crate::error::ApiResult;
use crate::state::AppState;

/// Redirects page requests the current session may not open.
pub async fn edge_gate(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let path = request.uri().path().to_owned();
    if state.edge_gate.is_exempt(&path) {
        return Ok(next.run(request).await);
    }

    let user = current_user(&session).await?;
    let decision = state
        .edge_gate
        .decide(&path, &session_state(user.as_ref()));

    match decision {
        GateDecision::Pass => Ok(next.run(request).await),
        GateDecision::Redirect { location, reason } => {
            info!(
                %path,
                role = user.as_ref().map(|user| user.role()),
                %location,
                reason = reason.as_str(),
                "edge gate redirect"
            );
            Ok(Redirect::to(&location).into_response())
        }
    }
}

pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let user = current_user(&session)
        .await?
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

pub async fn require_same_origin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if is_state_changing_method(request.method()) {
        let headers = request.headers();

        if headers
            .get("sec-fetch-site")
            .is_some_and(|fetch_site| fetch_site == HeaderValue::from_static("cross-site"))
        {
            return Err(AppError::Unauthorized("cross-site request blocked".to_owned()).into());
        }

        let origin = headers
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let referer = headers
            .get(header::REFERER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let allowed_origin = state.frontend_url.as_str();
        if origin != allowed_origin && !referer.starts_with(allowed_origin) {
            return Err(AppError::Unauthorized("origin validation failed".to_owned()).into());
        }
    }

    Ok(next.run(request).await)
}

fn is_state_changing_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}
