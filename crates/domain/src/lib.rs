//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod account;
mod landing;
mod module;
mod navigation;
mod permission_table;
mod preference;
mod role;
mod route_table;

pub use account::{
    AccountId, EmailAddress, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, validate_password,
};
pub use landing::{FORBIDDEN_ROUTE, LandingRoutes, SIGN_IN_ROUTE, UNAUTHORIZED_SIGN_IN_ROUTE};
pub use module::Module;
pub use navigation::{NavigationAccess, NavigationEntry, standard_navigation};
pub use permission_table::PermissionTable;
pub use preference::PreferenceKey;
pub use role::{Role, RoleClaim};
pub use route_table::{PublicPaths, RouteRule, RouteTable, path_has_prefix, request_path};
