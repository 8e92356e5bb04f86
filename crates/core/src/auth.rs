use serde::{Deserialize, Serialize};

/// User information persisted in the authenticated session.
///
/// The role is kept as the raw value written at sign-in. It is resolved
/// against the closed role enumeration on every authorization decision, so
/// a session that outlives a role rename degrades to zero permissions
/// instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    subject: String,
    display_name: String,
    email: Option<String>,
    role: String,
}

impl SessionUser {
    /// Creates a session user from authentication data.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        display_name: impl Into<String>,
        email: Option<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            display_name: display_name.into(),
            email,
            role: role.into(),
        }
    }

    /// Returns the stable account subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the email, if known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the raw role value stored at sign-in.
    #[must_use]
    pub fn role(&self) -> &str {
        self.role.as_str()
    }
}
