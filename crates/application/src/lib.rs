//! Application services and ports.

#![forbid(unsafe_code)]

mod access_guard;
mod access_policy;
mod account_service;
mod edge_gate;
mod navigation_filter;
mod preference_service;
mod session_state;

pub use access_guard::{AccessGuard, AccessOutcome, DenialMode, Guarded};
pub use access_policy::{
    AccessPolicy, AccessPolicyConfig, LandingRouteConfig, PolicyDefect, RouteRuleConfig,
};
pub use account_service::{
    AccountRecord, AccountRepository, AccountService, PasswordHasher, ProvisionAccountInput,
    SignInOutcome,
};
pub use edge_gate::{EdgeGate, GateDecision, GateRedirectReason};
pub use navigation_filter::NavigationFilter;
pub use preference_service::{PreferenceService, PreferenceStore};
pub use session_state::SessionState;
