use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use hearth_core::AppError;
use tower_http::trace::TraceLayer;
use tower_sessions::{SessionManagerLayer, SessionStore};

use crate::state::AppState;
use crate::{auth, handlers, middleware};

mod cors;

#[cfg(test)]
mod tests;

pub fn build_router<Store: SessionStore + Clone>(
    app_state: AppState,
    frontend_url: &str,
    session_layer: SessionManagerLayer<Store>,
) -> Result<Router, AppError> {
    // Pages are gated as a whole, including paths no page answers.
    let page_routes = handlers::pages::page_routes()
        .fallback(handlers::pages::unmapped_page_handler)
        .layer(from_fn_with_state(app_state.clone(), middleware::edge_gate));

    let protected_routes = Router::new()
        .route(
            "/api/preferences/{key}",
            get(handlers::preferences::get_preference_handler)
                .put(handlers::preferences::update_preference_handler),
        )
        .route_layer(from_fn(middleware::require_auth));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/auth/sign-in", post(auth::sign_in_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route("/auth/session", get(auth::session_handler))
        .route(
            "/api/navigation",
            get(handlers::navigation::navigation_handler),
        )
        .merge(protected_routes)
        .merge(page_routes)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(session_layer)
        .with_state(app_state))
}
