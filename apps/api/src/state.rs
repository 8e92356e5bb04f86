use hearth_application::{
    AccessPolicy, AccountService, EdgeGate, NavigationFilter, PreferenceService,
};
use hearth_domain::standard_navigation;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access_policy: AccessPolicy,
    pub edge_gate: EdgeGate,
    pub navigation_filter: NavigationFilter,
    pub account_service: AccountService,
    pub preference_service: PreferenceService,
    pub frontend_url: String,
}

impl AppState {
    /// Wires every policy consumer to the same policy instance.
    pub fn new(
        access_policy: AccessPolicy,
        account_service: AccountService,
        preference_service: PreferenceService,
        frontend_url: String,
    ) -> Self {
        Self {
            edge_gate: EdgeGate::new(access_policy.clone()),
            navigation_filter: NavigationFilter::new(access_policy.clone(), standard_navigation()),
            access_policy,
            account_service,
            preference_service,
            frontend_url,
        }
    }
}
