use std::fmt::{Display, Formatter};
use std::str::FromStr;

use hearth_core::AppError;
use serde::{Deserialize, Serialize};

/// Closed set of user functions, fixed when an account is invited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Full access including staff and portfolio settings.
    Administrator,
    /// Manages properties, leases and reporting.
    PropertyManager,
    /// Assists property managers with day-to-day operations.
    AssociateManager,
    /// Building and maintenance staff.
    BuildingMaintenance,
    /// Front desk and concierge staff.
    FrontDesk,
    /// Resident of a managed unit.
    Tenant,
    /// External contractor working maintenance tickets.
    Vendor,
    /// Any other invited collaborator.
    Others,
    /// Property owner with read access to performance.
    Owner,
}

impl Role {
    /// Returns the stable wire value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::PropertyManager => "PropertyManager",
            Self::AssociateManager => "AssociateManager",
            Self::BuildingMaintenance => "BuildingMaintenance",
            Self::FrontDesk => "FrontDesk",
            Self::Tenant => "Tenant",
            Self::Vendor => "Vendor",
            Self::Others => "Others",
            Self::Owner => "Owner",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::PropertyManager => "Property Manager",
            Self::AssociateManager => "Associate Manager",
            Self::BuildingMaintenance => "Building & Maintenance",
            Self::FrontDesk => "Front Desk",
            Self::Tenant => "Tenant",
            Self::Vendor => "Vendor",
            Self::Others => "Others",
            Self::Owner => "Owner",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Administrator,
            Role::PropertyManager,
            Role::AssociateManager,
            Role::BuildingMaintenance,
            Role::FrontDesk,
            Role::Tenant,
            Role::Vendor,
            Role::Others,
            Role::Owner,
        ];

        ALL
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown role value '{value}'")))
    }
}

/// Raw role value carried by a session.
///
/// Sessions may hold values outside the closed enumeration (stale sessions,
/// tampered stores). Those resolve to `None` and carry zero permissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleClaim(String);

impl RoleClaim {
    /// Wraps a raw role value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolves the claim against the role enumeration.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        Role::from_str(self.0.as_str()).ok()
    }
}

impl From<Role> for RoleClaim {
    fn from(value: Role) -> Self {
        Self(value.as_str().to_owned())
    }
}

impl Display for RoleClaim {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Role, RoleClaim};

    #[test]
    fn every_role_parses_from_its_wire_value() {
        for role in Role::all() {
            assert_eq!(Role::from_str(role.as_str()).ok(), Some(*role));
        }
    }

    #[test]
    fn legacy_admin_literal_is_not_an_alias() {
        assert!(Role::from_str("Admin").is_err());
        assert!(Role::from_str("administrator").is_err());
    }

    #[test]
    fn unknown_claim_resolves_to_none() {
        assert_eq!(RoleClaim::new("Hacker").role(), None);
        assert_eq!(RoleClaim::from(Role::Tenant).role(), Some(Role::Tenant));
    }
}
