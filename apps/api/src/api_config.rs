use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use hearth_core::AppError;
use hearth_domain::validate_password;
use tracing_subscriber::EnvFilter;

const DEFAULT_SESSION_IDLE_MINUTES: i64 = 30;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub cookie_secure: bool,
    pub session_idle_minutes: i64,
    pub redis_url: Option<String>,
    pub access_policy_path: Option<PathBuf>,
    /// Set only when demo seeding is enabled.
    pub demo_account_password: Option<String>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = match optional_env("API_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            None => 3001,
        };

        let cookie_secure = parse_flag(optional_env("SESSION_COOKIE_SECURE").as_deref());
        let session_idle_minutes =
            parse_idle_minutes(optional_env("SESSION_IDLE_MINUTES").as_deref())?;

        let demo_account_password =
            if parse_flag(optional_env("SEED_DEMO_ACCOUNTS").as_deref()) {
                let password = required_non_empty_env("DEMO_ACCOUNT_PASSWORD")?;
                validate_password(password.as_str()).map_err(|error| {
                    AppError::Validation(format!("invalid DEMO_ACCOUNT_PASSWORD: {error}"))
                })?;
                Some(password)
            } else {
                None
            };

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            cookie_secure,
            session_idle_minutes,
            redis_url: optional_env("REDIS_URL"),
            access_policy_path: optional_env("ACCESS_POLICY_PATH").map(PathBuf::from),
            demo_account_password,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    optional_env(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))
}

fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|value| value.eq_ignore_ascii_case("true") || value == "1")
}

fn parse_idle_minutes(value: Option<&str>) -> Result<i64, AppError> {
    let Some(value) = value else {
        return Ok(DEFAULT_SESSION_IDLE_MINUTES);
    };

    let minutes = value.parse::<i64>().map_err(|error| {
        AppError::Validation(format!("invalid SESSION_IDLE_MINUTES: {error}"))
    })?;
    if minutes <= 0 {
        return Err(AppError::Validation(
            "SESSION_IDLE_MINUTES must be greater than zero".to_owned(),
        ));
    }

    Ok(minutes)
}
