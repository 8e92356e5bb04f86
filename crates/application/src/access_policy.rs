//! Role-based access decisions shared by every enforcement point.
//!
//! The edge gate, the page access guard and the navigation filter all hold a
//! clone of the same [`AccessPolicy`] and call the same decision functions,
//! so a given `(role, path)` pair yields one answer everywhere. Every method
//! is synchronous, side-effect free and safe to call concurrently.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use hearth_core::{AppError, AppResult};
use hearth_domain::{LandingRoutes, Module, PermissionTable, PublicPaths, Role, RouteTable};

mod config;

pub use config::{AccessPolicyConfig, LandingRouteConfig, RouteRuleConfig};

/// Configuration problem that leaves some users without a usable destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDefect {
    /// A role of the enumeration has no allowed module and lands on the forbidden page.
    RoleWithoutModules(Role),
    /// A module's canonical route does not resolve back to that module.
    UnreachableLanding {
        /// Module whose landing route is broken.
        module: Module,
        /// Configured canonical route.
        route: String,
    },
    /// The forbidden page itself would be gated.
    ForbiddenRouteNotPublic(String),
}

impl Display for PolicyDefect {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoleWithoutModules(role) => {
                write!(formatter, "role '{role}' has no allowed modules")
            }
            Self::UnreachableLanding { module, route } => write!(
                formatter,
                "canonical route '{route}' does not resolve to module '{module}'"
            ),
            Self::ForbiddenRouteNotPublic(route) => {
                write!(formatter, "forbidden route '{route}' is not a public path")
            }
        }
    }
}

#[derive(Debug)]
struct PolicyTables {
    permissions: PermissionTable,
    routes: RouteTable,
    landing: LandingRoutes,
    public_paths: PublicPaths,
}

/// Authorization core over immutable permission, route and landing tables.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    tables: Arc<PolicyTables>,
}

impl AccessPolicy {
    /// Creates a policy from explicit tables.
    #[must_use]
    pub fn new(
        permissions: PermissionTable,
        routes: RouteTable,
        landing: LandingRoutes,
        public_paths: PublicPaths,
    ) -> Self {
        Self {
            tables: Arc::new(PolicyTables {
                permissions,
                routes,
                landing,
                public_paths,
            }),
        }
    }

    /// Creates the built-in property management policy.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            PermissionTable::standard(),
            RouteTable::standard(),
            LandingRoutes::standard(),
            PublicPaths::standard(),
        )
    }

    /// Parses a JSON policy document; omitted sections use the built-in tables.
    pub fn from_json(document: &str) -> AppResult<Self> {
        let config = serde_json::from_str::<AccessPolicyConfig>(document).map_err(|error| {
            AppError::Validation(format!("invalid access policy document: {error}"))
        })?;

        Self::from_config(config)
    }

    /// Builds a policy from a parsed configuration document.
    pub fn from_config(config: AccessPolicyConfig) -> AppResult<Self> {
        let (permissions, routes, landing, public_paths) = config.into_tables()?;
        Ok(Self::new(permissions, routes, landing, public_paths))
    }

    /// Returns the ordered modules a role may enter; empty for unknown roles.
    #[must_use]
    pub fn allowed_modules(&self, role: Option<Role>) -> &[Module] {
        self.tables.permissions.modules_for_role(role)
    }

    /// Returns whether a role may enter a module.
    #[must_use]
    pub fn has_module_access(&self, role: Option<Role>, module: Module) -> bool {
        self.allowed_modules(role).contains(&module)
    }

    /// Returns whether a role may open a path.
    ///
    /// Paths that match no route rule are denied for every role.
    #[must_use]
    pub fn has_route_access(&self, role: Option<Role>, path: &str) -> bool {
        self.module_for_route(path)
            .is_some_and(|module| self.has_module_access(role, module))
    }

    /// Returns the module a role lands on by default.
    #[must_use]
    pub fn first_allowed_module(&self, role: Option<Role>) -> Option<Module> {
        self.allowed_modules(role).first().copied()
    }

    /// Returns where a denied or undirected user is sent.
    ///
    /// This is the only place that maps a role to a destination route.
    #[must_use]
    pub fn fallback_route(&self, role: Option<Role>) -> &str {
        match self.first_allowed_module(role) {
            Some(module) => self.canonical_route(module),
            None => self.tables.landing.forbidden_route(),
        }
    }

    /// Resolves the module owning a path.
    #[must_use]
    pub fn module_for_route(&self, path: &str) -> Option<Module> {
        self.tables.routes.module_for_route(path)
    }

    /// Returns the canonical route of a module.
    #[must_use]
    pub fn canonical_route(&self, module: Module) -> &str {
        self.tables.landing.canonical_route(module)
    }

    /// Returns the forbidden page route.
    #[must_use]
    pub fn forbidden_route(&self) -> &str {
        self.tables.landing.forbidden_route()
    }

    /// Returns whether a path is an auth-flow path exempt from authorization.
    #[must_use]
    pub fn is_public_path(&self, path: &str) -> bool {
        self.tables.public_paths.contains(path)
    }

    /// Lists configuration problems worth surfacing at start-up.
    #[must_use]
    pub fn configuration_defects(&self) -> Vec<PolicyDefect> {
        let mut defects: Vec<PolicyDefect> = self
            .tables
            .permissions
            .roles_without_modules()
            .into_iter()
            .map(PolicyDefect::RoleWithoutModules)
            .collect();

        for module in Module::all() {
            let route = self.canonical_route(*module);
            if self.module_for_route(route) != Some(*module) {
                defects.push(PolicyDefect::UnreachableLanding {
                    module: *module,
                    route: route.to_owned(),
                });
            }
        }

        let forbidden_route = self.forbidden_route();
        if !self.is_public_path(forbidden_route) {
            defects.push(PolicyDefect::ForbiddenRouteNotPublic(
                forbidden_route.to_owned(),
            ));
        }

        defects
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
