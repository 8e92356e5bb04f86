//! Page endpoints.
//!
//! Every page is rendered through an [`AccessGuard`], independently of the
//! edge gate that already ran in front of it. Both consult the same policy,
//! so they agree unless a page gates on a module other than its route's.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use hearth_application::{AccessGuard, DenialMode, Guarded};
use hearth_core::AppError;
use hearth_domain::Module;
use tower_sessions::Session;

use crate::auth::{current_user, session_state};
use crate::dto::{AccessDeniedResponse, PageResponse, PendingResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Access requirement of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    /// Rendered for everyone.
    Public,
    /// Rendered through the access guard.
    Guarded {
        /// Module override; `None` gates on the module owning the path.
        required_module: Option<Module>,
        denial_mode: DenialMode,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct PageDefinition {
    pub path: &'static str,
    pub title: &'static str,
    pub access: PageAccess,
}

const fn guarded(path: &'static str, title: &'static str) -> PageDefinition {
    PageDefinition {
        path,
        title,
        access: PageAccess::Guarded {
            required_module: None,
            denial_mode: DenialMode::Inline,
        },
    }
}

const fn public(path: &'static str, title: &'static str) -> PageDefinition {
    PageDefinition {
        path,
        title,
        access: PageAccess::Public,
    }
}

pub const PAGES: &[PageDefinition] = &[
    guarded("/dashboard", "Dashboard"),
    PageDefinition {
        path: "/dashboard/financials",
        title: "Financial Overview",
        access: PageAccess::Guarded {
            required_module: Some(Module::Reports),
            denial_mode: DenialMode::Inline,
        },
    },
    guarded("/listings", "Listings"),
    guarded("/tenants", "Tenants"),
    guarded("/maintenance", "Maintenance"),
    guarded("/reports", "Reports"),
    guarded("/settings", "Settings"),
    PageDefinition {
        path: "/settings/staff",
        title: "Staff",
        access: PageAccess::Guarded {
            required_module: Some(Module::Settings),
            denial_mode: DenialMode::Redirect,
        },
    },
    public("/forbidden", "Access Denied"),
    public("/sign-in", "Sign In"),
    public("/help", "Help"),
];

/// Routes for every page, sharing one guarded handler.
pub fn page_routes() -> Router<AppState> {
    PAGES.iter().fold(Router::new(), |router, page| {
        router.route(page.path, get(page_handler))
    })
}

pub fn find_page(path: &str) -> Option<&'static PageDefinition> {
    PAGES.iter().find(|page| page.path == path)
}

pub async fn page_handler(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> ApiResult<Response> {
    let page = find_page(uri.path())
        .ok_or_else(|| AppError::NotFound(format!("page '{}' does not exist", uri.path())))?;

    let (required_module, denial_mode) = match page.access {
        PageAccess::Public => {
            let module = state.access_policy.module_for_route(page.path);
            return Ok(Json(PageResponse::new(page.path, page.title, module)).into_response());
        }
        PageAccess::Guarded {
            required_module,
            denial_mode,
        } => (required_module, denial_mode),
    };

    let mut guard = AccessGuard::new(state.access_policy.clone()).with_denial_mode(denial_mode);
    if let Some(module) = required_module {
        guard = guard.requiring(module);
    }

    let user = current_user(&session).await?;
    let rendered = guard.render(page.path, &session_state(user.as_ref()), || {
        let module = required_module.or_else(|| state.access_policy.module_for_route(page.path));
        PageResponse::new(page.path, page.title, module)
    });

    Ok(match rendered {
        Guarded::Rendered(body) => Json(body).into_response(),
        Guarded::Loading => {
            (StatusCode::ACCEPTED, Json(PendingResponse { status: "pending" })).into_response()
        }
        Guarded::Denied { destination } => (
            StatusCode::FORBIDDEN,
            Json(AccessDeniedResponse {
                message: format!("you do not have access to {}", page.title),
                destination,
            }),
        )
            .into_response(),
        Guarded::Redirect { destination } => Redirect::to(&destination).into_response(),
    })
}

/// Answers page paths with no page behind them once the gate let them pass.
pub async fn unmapped_page_handler(uri: Uri) -> ApiResult<Response> {
    Err(AppError::NotFound(format!("page '{}' does not exist", uri.path())).into())
}
