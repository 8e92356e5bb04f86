use std::collections::BTreeMap;
use std::str::FromStr;

use hearth_core::AppResult;
use hearth_domain::{
    FORBIDDEN_ROUTE, LandingRoutes, Module, PermissionTable, PublicPaths, Role, RouteRule,
    RouteTable,
};
use serde::Deserialize;

/// Route rule entry of a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteRuleConfig {
    /// Absolute path prefix.
    pub path_prefix: String,
    /// Module owning the prefix.
    pub module: Module,
}

/// Canonical route entry of a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LandingRouteConfig {
    /// Module being described.
    pub module: Module,
    /// Route users land on for this module.
    pub route: String,
}

/// JSON policy document. Each omitted section keeps its built-in table.
///
/// A present `permissions` section replaces the whole permission table, so
/// roles left out of it end up without modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessPolicyConfig {
    /// Role wire value to ordered module list.
    pub permissions: Option<BTreeMap<String, Vec<Module>>>,
    /// Route prefix rules.
    pub routes: Option<Vec<RouteRuleConfig>>,
    /// Canonical route per module.
    pub landing_routes: Option<Vec<LandingRouteConfig>>,
    /// Destination for roles without modules.
    pub forbidden_route: Option<String>,
    /// Auth-flow prefixes exempt from authorization.
    pub public_paths: Option<Vec<String>>,
}

impl AccessPolicyConfig {
    pub(super) fn into_tables(
        self,
    ) -> AppResult<(PermissionTable, RouteTable, LandingRoutes, PublicPaths)> {
        let permissions = match self.permissions {
            Some(entries) => PermissionTable::new(
                entries
                    .into_iter()
                    .map(|(role, modules)| Role::from_str(role.as_str()).map(|role| (role, modules)))
                    .collect::<AppResult<Vec<_>>>()?,
            ),
            None => PermissionTable::standard(),
        };

        let routes = match self.routes {
            Some(rules) => RouteTable::new(
                rules
                    .into_iter()
                    .map(|rule| RouteRule::new(rule.path_prefix, rule.module))
                    .collect::<AppResult<Vec<_>>>()?,
            ),
            None => RouteTable::standard(),
        };

        let landing = match (self.landing_routes, self.forbidden_route) {
            (None, None) => LandingRoutes::standard(),
            (landing_routes, forbidden_route) => {
                let entries: Vec<(Module, String)> = match landing_routes {
                    Some(entries) => entries
                        .into_iter()
                        .map(|entry| (entry.module, entry.route))
                        .collect(),
                    None => Module::all()
                        .iter()
                        .map(|module| (*module, format!("/{}", module.as_str())))
                        .collect(),
                };

                LandingRoutes::new(
                    entries,
                    forbidden_route.unwrap_or_else(|| FORBIDDEN_ROUTE.to_owned()),
                )?
            }
        };

        let public_paths = match self.public_paths {
            Some(prefixes) => PublicPaths::new(prefixes)?,
            None => PublicPaths::standard(),
        };

        Ok((permissions, routes, landing, public_paths))
    }
}
