use serde::{Deserialize, Serialize};

use crate::Module;

/// Visibility requirement attached to a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "module")]
pub enum NavigationAccess {
    /// Always shown, signed in or not.
    Public,
    /// Shown only to roles allowed into the module.
    Module(Module),
}

/// One entry of the application menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    key: String,
    label: String,
    href: String,
    access: NavigationAccess,
}

impl NavigationEntry {
    /// Creates an entry gated on a module.
    #[must_use]
    pub fn for_module(
        key: impl Into<String>,
        label: impl Into<String>,
        href: impl Into<String>,
        module: Module,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            href: href.into(),
            access: NavigationAccess::Module(module),
        }
    }

    /// Creates an entry that requires no authentication.
    #[must_use]
    pub fn public(
        key: impl Into<String>,
        label: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            href: href.into(),
            access: NavigationAccess::Public,
        }
    }

    /// Returns the stable entry key.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Returns the menu label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Returns the link target.
    #[must_use]
    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    /// Returns the visibility requirement.
    #[must_use]
    pub fn access(&self) -> NavigationAccess {
        self.access
    }

    /// Returns the gating module, if any.
    #[must_use]
    pub fn module(&self) -> Option<Module> {
        match self.access {
            NavigationAccess::Public => None,
            NavigationAccess::Module(module) => Some(module),
        }
    }

    /// Returns whether the entry is hidden from anonymous visitors.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(self.access, NavigationAccess::Module(_))
    }
}

/// Returns the full application menu in display order.
#[must_use]
pub fn standard_navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::for_module("dashboard", "Dashboard", "/dashboard", Module::Dashboard),
        NavigationEntry::for_module("listings", "Listings", "/listings", Module::Listings),
        NavigationEntry::for_module("tenants", "Tenants", "/tenants", Module::Tenants),
        NavigationEntry::for_module(
            "maintenance",
            "Maintenance",
            "/maintenance",
            Module::Maintenance,
        ),
        NavigationEntry::for_module("reports", "Reports", "/reports", Module::Reports),
        NavigationEntry::for_module("staff", "Staff", "/settings/staff", Module::Settings),
        NavigationEntry::for_module("settings", "Settings", "/settings", Module::Settings),
        NavigationEntry::public("help", "Help", "/help"),
    ]
}
