use hearth_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::Module;

/// Path-prefix rule assigning a route family to one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    path_prefix: String,
    module: Module,
}

impl RouteRule {
    /// Creates a validated route rule.
    ///
    /// Prefixes must be absolute and cannot be the bare root; a trailing
    /// slash is dropped.
    pub fn new(path_prefix: impl Into<String>, module: Module) -> AppResult<Self> {
        Ok(Self {
            path_prefix: normalize_prefix(path_prefix.into())?,
            module,
        })
    }

    /// Returns the normalized path prefix.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        self.path_prefix.as_str()
    }

    /// Returns the module this rule resolves to.
    #[must_use]
    pub fn module(&self) -> Module {
        self.module
    }
}

/// Ordered route rules resolved by longest matching prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    /// Creates a route table from rules.
    #[must_use]
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Returns the built-in route table: one prefix per module.
    #[must_use]
    pub fn standard() -> Self {
        let rules = Module::all()
            .iter()
            .map(|module| RouteRule {
                path_prefix: format!("/{}", module.as_str()),
                module: *module,
            })
            .collect();

        Self { rules }
    }

    /// Returns the configured rules.
    #[must_use]
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Resolves the module owning a path, or `None` when no rule matches.
    ///
    /// The longest matching prefix wins; equal prefixes resolve to the rule
    /// declared first.
    #[must_use]
    pub fn module_for_route(&self, path: &str) -> Option<Module> {
        let path = request_path(path);
        let mut best: Option<&RouteRule> = None;

        for rule in &self.rules {
            if !path_has_prefix(path, rule.path_prefix()) {
                continue;
            }

            let longer = best.is_none_or(|current| rule.path_prefix.len() > current.path_prefix.len());
            if longer {
                best = Some(rule);
            }
        }

        best.map(RouteRule::module)
    }
}

/// Auth-flow paths that bypass authorization entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PublicPaths {
    prefixes: Vec<String>,
}

impl PublicPaths {
    /// Creates a validated public path list.
    pub fn new<I, S>(prefixes: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(|prefix| normalize_prefix(prefix.into()))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { prefixes })
    }

    /// Returns the built-in sign-in, recovery and error paths.
    #[must_use]
    pub fn standard() -> Self {
        let prefixes = [
            "/sign-in",
            "/sign-up",
            "/forgot-password",
            "/reset-password",
            "/verify-email",
            "/logout",
            "/error",
            "/forbidden",
            "/help",
            "/health",
            "/auth",
        ]
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();

        Self { prefixes }
    }

    /// Returns whether the path is exempt from authorization.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        let path = request_path(path);
        self.prefixes
            .iter()
            .any(|prefix| path_has_prefix(path, prefix.as_str()))
    }

    /// Returns the configured prefixes.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

/// Strips query string and fragment from a request target.
#[must_use]
pub fn request_path(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    &target[..end]
}

/// Returns whether `path` equals `prefix` or continues it with a new segment.
#[must_use]
pub fn path_has_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn normalize_prefix(prefix: String) -> AppResult<String> {
    let trimmed = prefix.trim();
    if !trimmed.starts_with('/') {
        return Err(AppError::Validation(format!(
            "route prefix '{trimmed}' must start with '/'"
        )));
    }

    let normalized = trimmed.trim_end_matches('/');
    if normalized.is_empty() {
        return Err(AppError::Validation(
            "route prefix must not be the application root".to_owned(),
        ));
    }

    if normalized.contains(['?', '#']) {
        return Err(AppError::Validation(format!(
            "route prefix '{normalized}' must not contain a query or fragment"
        )));
    }

    Ok(normalized.to_owned())
}
