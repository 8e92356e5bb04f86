use std::collections::HashMap;

use hearth_core::{AppError, AppResult};

use crate::Module;

/// Sign-in page for unauthenticated visitors.
pub const SIGN_IN_ROUTE: &str = "/sign-in";

/// Sign-in page flagged for sessions holding an unrecognized role.
pub const UNAUTHORIZED_SIGN_IN_ROUTE: &str = "/sign-in?error=unauthorized";

/// Forbidden page used when a role has no module to land on.
pub const FORBIDDEN_ROUTE: &str = "/forbidden";

/// Canonical route per module plus the forbidden destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingRoutes {
    routes: HashMap<Module, String>,
    forbidden_route: String,
}

impl LandingRoutes {
    /// Creates a validated landing table.
    ///
    /// Every module must have an absolute canonical route.
    pub fn new(
        routes: impl IntoIterator<Item = (Module, String)>,
        forbidden_route: impl Into<String>,
    ) -> AppResult<Self> {
        let routes: HashMap<Module, String> = routes.into_iter().collect();
        let forbidden_route = forbidden_route.into();

        if let Some(missing) = Module::all()
            .iter()
            .find(|module| !routes.contains_key(module))
        {
            return Err(AppError::Validation(format!(
                "module '{missing}' has no canonical route"
            )));
        }

        if let Some((module, route)) = routes.iter().find(|(_, route)| !route.starts_with('/')) {
            return Err(AppError::Validation(format!(
                "canonical route '{route}' for module '{module}' must start with '/'"
            )));
        }

        if !forbidden_route.starts_with('/') {
            return Err(AppError::Validation(format!(
                "forbidden route '{forbidden_route}' must start with '/'"
            )));
        }

        Ok(Self {
            routes,
            forbidden_route,
        })
    }

    /// Returns the built-in landing table.
    #[must_use]
    pub fn standard() -> Self {
        let routes = Module::all()
            .iter()
            .map(|module| (*module, format!("/{}", module.as_str())))
            .collect();

        Self {
            routes,
            forbidden_route: FORBIDDEN_ROUTE.to_owned(),
        }
    }

    /// Returns the canonical route of a module.
    #[must_use]
    pub fn canonical_route(&self, module: Module) -> &str {
        self.routes
            .get(&module)
            .map(String::as_str)
            .unwrap_or(self.forbidden_route.as_str())
    }

    /// Returns the forbidden page route.
    #[must_use]
    pub fn forbidden_route(&self) -> &str {
        self.forbidden_route.as_str()
    }
}

impl Default for LandingRoutes {
    fn default() -> Self {
        Self::standard()
    }
}
