use std::collections::HashMap;

use crate::{Module, Role};

/// Immutable mapping from role to an ordered set of allowed modules.
///
/// The first module of each entry is where the role lands when no explicit
/// destination is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTable {
    entries: HashMap<Role, Vec<Module>>,
}

impl PermissionTable {
    /// Builds a table from role entries.
    ///
    /// Duplicate modules within one entry keep their first position. When a
    /// role appears more than once the last entry wins.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (Role, Vec<Module>)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(role, modules)| (role, dedupe_preserving_order(modules)))
            .collect();

        Self { entries }
    }

    /// Returns the built-in property management permission table.
    #[must_use]
    pub fn standard() -> Self {
        use Module::{Dashboard, Listings, Maintenance, Reports, Settings, Tenants};

        Self::new([
            (
                Role::Administrator,
                vec![Dashboard, Listings, Tenants, Maintenance, Reports, Settings],
            ),
            (
                Role::PropertyManager,
                vec![Dashboard, Listings, Tenants, Maintenance, Reports],
            ),
            (
                Role::AssociateManager,
                vec![Dashboard, Listings, Tenants, Maintenance],
            ),
            (Role::BuildingMaintenance, vec![Maintenance]),
            (Role::FrontDesk, vec![Dashboard, Tenants, Maintenance]),
            (Role::Tenant, vec![Maintenance]),
            (Role::Vendor, vec![Maintenance]),
            (Role::Others, vec![Listings]),
            (Role::Owner, vec![Dashboard, Listings, Reports]),
        ])
    }

    /// Returns the ordered modules for a role.
    ///
    /// Unknown roles (`None`) and roles without an entry yield an empty slice.
    #[must_use]
    pub fn modules_for_role(&self, role: Option<Role>) -> &[Module] {
        role.and_then(|role| self.entries.get(&role))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lists roles of the enumeration that would be stranded with no module.
    #[must_use]
    pub fn roles_without_modules(&self) -> Vec<Role> {
        Role::all()
            .iter()
            .copied()
            .filter(|role| self.modules_for_role(Some(*role)).is_empty())
            .collect()
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn dedupe_preserving_order(modules: Vec<Module>) -> Vec<Module> {
    let mut unique = Vec::with_capacity(modules.len());
    for module in modules {
        if !unique.contains(&module) {
            unique.push(module);
        }
    }

    unique
}
