use std::str::FromStr;

use hearth_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Per-user interface preferences kept outside the authorization core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKey {
    /// Whether the side menu is collapsed.
    SidebarCollapsed,
    /// Grid or table layout on the listings screen.
    ListingsViewMode,
    /// Grid or table layout on the tenants screen.
    TenantsViewMode,
}

impl PreferenceKey {
    /// Returns a stable storage value for this key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SidebarCollapsed => "sidebar_collapsed",
            Self::ListingsViewMode => "listings_view_mode",
            Self::TenantsViewMode => "tenants_view_mode",
        }
    }

    /// Returns the value used when nothing is stored.
    #[must_use]
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::SidebarCollapsed => "false",
            Self::ListingsViewMode | Self::TenantsViewMode => "grid",
        }
    }

    /// Returns the values accepted for this key.
    #[must_use]
    pub fn allowed_values(&self) -> &'static [&'static str] {
        match self {
            Self::SidebarCollapsed => &["true", "false"],
            Self::ListingsViewMode | Self::TenantsViewMode => &["grid", "table"],
        }
    }

    /// Normalizes and validates a candidate value.
    pub fn validate_value(&self, value: &str) -> AppResult<String> {
        let normalized = value.trim().to_ascii_lowercase();
        if self.allowed_values().contains(&normalized.as_str()) {
            return Ok(normalized);
        }

        Err(AppError::Validation(format!(
            "preference '{}' accepts one of [{}], got '{value}'",
            self.as_str(),
            self.allowed_values().join(", ")
        )))
    }
}

impl FromStr for PreferenceKey {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sidebar_collapsed" => Ok(Self::SidebarCollapsed),
            "listings_view_mode" => Ok(Self::ListingsViewMode),
            "tenants_view_mode" => Ok(Self::TenantsViewMode),
            _ => Err(AppError::NotFound(format!(
                "unknown preference key '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::PreferenceKey;

    #[test]
    fn view_mode_accepts_case_insensitive_values() {
        let value = PreferenceKey::ListingsViewMode.validate_value(" Table ");
        assert_eq!(value.ok().as_deref(), Some("table"));
    }

    #[test]
    fn sidebar_rejects_non_boolean() {
        assert!(PreferenceKey::SidebarCollapsed.validate_value("maybe").is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(PreferenceKey::from_str("theme").is_err());
    }
}
