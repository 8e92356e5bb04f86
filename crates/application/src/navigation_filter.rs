use std::sync::Arc;

use hearth_domain::{NavigationAccess, NavigationEntry};

use crate::{AccessPolicy, SessionState};

/// Produces the menu entries visible to a session.
#[derive(Debug, Clone)]
pub struct NavigationFilter {
    policy: AccessPolicy,
    entries: Arc<[NavigationEntry]>,
}

impl NavigationFilter {
    /// Creates a filter over the full static menu.
    #[must_use]
    pub fn new(policy: AccessPolicy, entries: Vec<NavigationEntry>) -> Self {
        Self {
            policy,
            entries: entries.into(),
        }
    }

    /// Returns the full, unfiltered menu.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Returns visible entries in their original order.
    ///
    /// A pending session yields no entries so callers show a skeleton rather
    /// than a flash of links.
    #[must_use]
    pub fn visible_entries(&self, session: &SessionState) -> Vec<NavigationEntry> {
        if matches!(session, SessionState::Pending) {
            return Vec::new();
        }

        let role = session.role();
        self.entries
            .iter()
            .filter(|entry| match entry.access() {
                NavigationAccess::Public => true,
                NavigationAccess::Module(module) => self.policy.has_module_access(role, module),
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use hearth_domain::{Role, RoleClaim, standard_navigation};

    use super::NavigationFilter;
    use crate::{AccessPolicy, SessionState};

    fn keys(filter: &NavigationFilter, session: &SessionState) -> Vec<String> {
        filter
            .visible_entries(session)
            .iter()
            .map(|entry| entry.key().to_owned())
            .collect()
    }

    #[test]
    fn pending_session_shows_nothing() {
        let filter = NavigationFilter::new(AccessPolicy::standard(), standard_navigation());
        assert!(filter.visible_entries(&SessionState::Pending).is_empty());
    }

    #[test]
    fn anonymous_session_sees_only_public_entries() {
        let filter = NavigationFilter::new(AccessPolicy::standard(), standard_navigation());
        assert_eq!(keys(&filter, &SessionState::Anonymous), vec!["help"]);
    }

    #[test]
    fn tenant_sees_maintenance_and_help() {
        let filter = NavigationFilter::new(AccessPolicy::standard(), standard_navigation());
        let session = SessionState::Authenticated(Role::Tenant.into());
        assert_eq!(keys(&filter, &session), vec!["maintenance", "help"]);
    }

    #[test]
    fn administrator_sees_full_menu_in_order() {
        let filter = NavigationFilter::new(AccessPolicy::standard(), standard_navigation());
        let session = SessionState::Authenticated(Role::Administrator.into());

        let all: Vec<String> = filter
            .entries()
            .iter()
            .map(|entry| entry.key().to_owned())
            .collect();
        assert_eq!(keys(&filter, &session), all);
    }

    #[test]
    fn unknown_role_sees_only_public_entries() {
        let filter = NavigationFilter::new(AccessPolicy::standard(), standard_navigation());
        let session = SessionState::Authenticated(RoleClaim::new("Admin"));
        assert_eq!(keys(&filter, &session), vec!["help"]);
    }
}
