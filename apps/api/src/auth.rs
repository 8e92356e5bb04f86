use hearth_application::SessionState;
use hearth_core::{AppError, SessionUser};
use hearth_domain::RoleClaim;
use tower_sessions::Session;

mod session;
mod sign_in;

pub use session::{logout_handler, session_handler};
pub use sign_in::sign_in_handler;

pub const SESSION_USER_KEY: &str = "session_user";
/// Absolute session creation timestamp.
pub const SESSION_CREATED_AT_KEY: &str = "session_created_at";

/// Reads the signed-in user from the session, if any.
pub async fn current_user(session: &Session) -> Result<Option<SessionUser>, AppError> {
    session
        .get::<SessionUser>(SESSION_USER_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session user: {error}")))
}

/// Converts a resolved session lookup into the input of access decisions.
pub fn session_state(user: Option<&SessionUser>) -> SessionState {
    SessionState::from_claim(user.map(|user| RoleClaim::new(user.role())))
}
