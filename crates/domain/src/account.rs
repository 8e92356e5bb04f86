//! Account identity types used by sign-in and invitation flows.

use std::fmt::{Display, Formatter};

use hearth_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum password length for invited accounts.
pub const PASSWORD_MIN_LENGTH: usize = 12;

/// Maximum password length; bounds hashing cost.
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Unique identifier for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new random account identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an account identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for AccountId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Lower-cased, structurally valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let normalized = value.into().trim().to_lowercase();

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain '@'".to_owned(),
            ));
        };

        if local.is_empty() || domain.contains('@') {
            return Err(AppError::Validation(
                "email address must have one non-empty local part".to_owned(),
            ));
        }

        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(AppError::Validation(
                "email domain must contain an inner '.'".to_owned(),
            ));
        }

        if normalized.len() > 254 {
            return Err(AppError::Validation(
                "email address must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(normalized))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Checks password length bounds for newly provisioned accounts.
pub fn validate_password(password: &str) -> AppResult<()> {
    let char_count = password.chars().count();

    if char_count < PASSWORD_MIN_LENGTH {
        return Err(AppError::Validation(format!(
            "password must be at least {PASSWORD_MIN_LENGTH} characters"
        )));
    }

    if char_count > PASSWORD_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "password must not exceed {PASSWORD_MAX_LENGTH} characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{EmailAddress, PASSWORD_MAX_LENGTH, validate_password};

    #[test]
    fn email_is_lowercased() {
        let email = EmailAddress::new(" Front.Desk@Hearth.Example ");
        assert_eq!(
            email.ok().as_ref().map(EmailAddress::as_str),
            Some("front.desk@hearth.example")
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        assert!(EmailAddress::new("noatsign").is_err());
        assert!(EmailAddress::new("@hearth.example").is_err());
        assert!(EmailAddress::new("a@b@hearth.example").is_err());
        assert!(EmailAddress::new("user@localhost").is_err());
    }

    #[test]
    fn password_bounds_are_enforced() {
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"p".repeat(PASSWORD_MAX_LENGTH + 1)).is_err());
        assert!(validate_password("a-reasonable-passphrase").is_ok());
    }
}
