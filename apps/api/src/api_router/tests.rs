use std::error::Error;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, ORIGIN, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use hearth_application::{AccessPolicy, AccountService, PreferenceService, ProvisionAccountInput};
use hearth_domain::Role;
use hearth_infrastructure::{
    Argon2PasswordHasher, InMemoryAccountRepository, InMemoryPreferenceStore,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::build_router;
use crate::api_services::build_memory_session_layer;
use crate::state::AppState;

type TestResult<T = ()> = Result<T, Box<dyn Error>>;

const FRONTEND_URL: &str = "http://localhost:3000";
const PASSWORD: &str = "correct-horse-battery";

async fn test_app() -> TestResult<Router> {
    let account_service = AccountService::new(
        Arc::new(InMemoryAccountRepository::new()),
        Arc::new(Argon2PasswordHasher::new()),
    );
    for (email, role) in [
        ("admin@hearth.test", Role::Administrator),
        ("tenant@hearth.test", Role::Tenant),
        ("desk@hearth.test", Role::FrontDesk),
    ] {
        account_service
            .provision_account(ProvisionAccountInput {
                email: email.to_owned(),
                display_name: role.display_name().to_owned(),
                role,
                password: PASSWORD.to_owned(),
            })
            .await?;
    }

    let state = AppState::new(
        AccessPolicy::standard(),
        account_service,
        PreferenceService::new(Arc::new(InMemoryPreferenceStore::new())),
        FRONTEND_URL.to_owned(),
    );

    Ok(build_router(
        state,
        FRONTEND_URL,
        build_memory_session_layer(false, 30),
    )?)
}

async fn send(
    app: &Router,
    method: Method,
    path: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> TestResult<Response> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(ORIGIN, FRONTEND_URL);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    Ok(app.clone().oneshot(request).await?)
}

async fn get(app: &Router, path: &str, cookie: Option<&str>) -> TestResult<Response> {
    send(app, Method::GET, path, cookie, None).await
}

async fn sign_in(app: &Router, email: &str) -> TestResult<String> {
    let response = send(
        app,
        Method::POST,
        "/auth/sign-in",
        None,
        Some(json!({ "email": email, "password": PASSWORD })),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(ToOwned::to_owned)
        .ok_or("sign-in did not set a session cookie")?;
    Ok(cookie)
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

async fn read_json(response: Response) -> TestResult<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn navigation_keys(payload: &Value) -> Vec<String> {
    payload["entries"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry["key"].as_str().map(ToOwned::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn health_is_public() -> TestResult {
    let app = test_app().await?;
    let response = get(&app, "/health", None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn anonymous_page_requests_redirect_to_sign_in() -> TestResult {
    let app = test_app().await?;

    for path in ["/", "/dashboard", "/settings/staff", "/unmapped"] {
        let response = get(&app, path, None).await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), Some("/sign-in"), "{path}");
    }
    Ok(())
}

#[tokio::test]
async fn public_pages_render_without_session() -> TestResult {
    let app = test_app().await?;
    let response = get(&app, "/help", None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await?["title"], "Help");
    Ok(())
}

#[tokio::test]
async fn tenant_is_sent_to_maintenance() -> TestResult {
    let app = test_app().await?;
    let cookie = sign_in(&app, "tenant@hearth.test").await?;

    for path in ["/", "/settings", "/settings/staff", "/settingsx", "/dashboard?tab=1"] {
        let response = get(&app, path, Some(&cookie)).await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), Some("/maintenance"), "{path}");
    }

    let response = get(&app, "/maintenance", Some(&cookie)).await?;
    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn administrator_opens_staff_page() -> TestResult {
    let app = test_app().await?;
    let cookie = sign_in(&app, "admin@hearth.test").await?;

    let response = get(&app, "/settings/staff", Some(&cookie)).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json(response).await?;
    assert_eq!(payload["title"], "Staff");
    assert_eq!(payload["module"], "settings");
    Ok(())
}

#[tokio::test]
async fn module_override_denies_inline_with_destination() -> TestResult {
    let app = test_app().await?;
    let cookie = sign_in(&app, "desk@hearth.test").await?;

    // The gate lets dashboard paths through; the page itself requires reports.
    let response = get(&app, "/dashboard/financials", Some(&cookie)).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(read_json(response).await?["destination"], "/dashboard");
    Ok(())
}

#[tokio::test]
async fn failed_sign_in_is_generic() -> TestResult {
    let app = test_app().await?;

    for (email, password) in [
        ("tenant@hearth.test", "wrong-password-here"),
        ("nobody@hearth.test", PASSWORD),
    ] {
        let response = send(
            &app,
            Method::POST,
            "/auth/sign-in",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await?;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            read_json(response).await?["message"],
            "unauthorized: invalid email or password"
        );
    }
    Ok(())
}

#[tokio::test]
async fn mutations_without_origin_are_rejected() -> TestResult {
    let app = test_app().await?;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/sign-in")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "email": "admin@hearth.test", "password": PASSWORD }).to_string(),
        ))?;

    let response = app.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn navigation_follows_the_session() -> TestResult {
    let app = test_app().await?;

    let anonymous = read_json(get(&app, "/api/navigation", None).await?).await?;
    assert_eq!(navigation_keys(&anonymous), vec!["help"]);

    let cookie = sign_in(&app, "tenant@hearth.test").await?;
    let tenant = read_json(get(&app, "/api/navigation", Some(&cookie)).await?).await?;
    assert_eq!(navigation_keys(&tenant), vec!["maintenance", "help"]);
    Ok(())
}

#[tokio::test]
async fn preferences_require_a_session_and_validate_values() -> TestResult {
    let app = test_app().await?;
    let path = "/api/preferences/listings_view_mode";

    let response = get(&app, path, None).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookie = sign_in(&app, "admin@hearth.test").await?;
    let response = get(&app, path, Some(&cookie)).await?;
    assert_eq!(read_json(response).await?["value"], "grid");

    let response = send(
        &app,
        Method::PUT,
        path,
        Some(&cookie),
        Some(json!({ "value": "Table" })),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, path, Some(&cookie)).await?;
    assert_eq!(read_json(response).await?["value"], "table");

    let response = send(
        &app,
        Method::PUT,
        path,
        Some(&cookie),
        Some(json!({ "value": "carousel" })),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(&app, "/api/preferences/theme", Some(&cookie)).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn session_describes_access_until_logout() -> TestResult {
    let app = test_app().await?;
    let cookie = sign_in(&app, "tenant@hearth.test").await?;

    let payload = read_json(get(&app, "/auth/session", Some(&cookie)).await?).await?;
    assert_eq!(payload["role"], "Tenant");
    assert_eq!(payload["landing_route"], "/maintenance");
    assert_eq!(payload["allowed_modules"], json!(["maintenance"]));

    let response = send(&app, Method::POST, "/auth/logout", Some(&cookie), None).await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, "/auth/session", Some(&cookie)).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
