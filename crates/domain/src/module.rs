use std::fmt::{Display, Formatter};
use std::str::FromStr;

use hearth_core::AppError;
use serde::{Deserialize, Serialize};

/// Top-level application area; the unit of authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    /// Portfolio overview and charts.
    Dashboard,
    /// Properties and unit listings.
    Listings,
    /// Tenants and leases.
    Tenants,
    /// Maintenance tickets.
    Maintenance,
    /// Financial and occupancy reports.
    Reports,
    /// Staff and account settings.
    Settings,
}

impl Module {
    /// Returns a stable storage value for this module.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Listings => "listings",
            Self::Tenants => "tenants",
            Self::Maintenance => "maintenance",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }

    /// Returns the menu label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Listings => "Listings",
            Self::Tenants => "Tenants",
            Self::Maintenance => "Maintenance",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    /// Returns all known modules.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Module] = &[
            Module::Dashboard,
            Module::Listings,
            Module::Tenants,
            Module::Maintenance,
            Module::Reports,
            Module::Settings,
        ];

        ALL
    }
}

impl Display for Module {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dashboard" => Ok(Self::Dashboard),
            "listings" => Ok(Self::Listings),
            "tenants" => Ok(Self::Tenants),
            "maintenance" => Ok(Self::Maintenance),
            "reports" => Ok(Self::Reports),
            "settings" => Ok(Self::Settings),
            _ => Err(AppError::Validation(format!(
                "unknown module value '{value}'"
            ))),
        }
    }
}
