//! Page-level access guard.
//!
//! Wraps a render function with a capability check so that denied content
//! is never produced, not even transiently. It re-derives the decision from
//! the session independently of the edge gate, through the same policy.

use hearth_domain::{Module, SIGN_IN_ROUTE};

use crate::{AccessPolicy, SessionState};

/// How a denial is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DenialMode {
    /// Render an access-denied view linking to the destination.
    #[default]
    Inline,
    /// Send the user to the destination directly.
    Redirect,
}

/// Decision of the guard for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Session resolution is still pending; show a neutral placeholder.
    Loading,
    /// Render the wrapped content.
    Granted,
    /// Show the access-denied view.
    Denied {
        /// Where the user is invited to go instead.
        destination: String,
    },
    /// Redirect the user.
    Redirect {
        /// Redirect target.
        destination: String,
    },
}

/// Result of rendering through the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    /// Placeholder while the session resolves.
    Loading,
    /// Content produced by the wrapped render function.
    Rendered(T),
    /// Access-denied view data.
    Denied {
        /// Where the user is invited to go instead.
        destination: String,
    },
    /// Redirect instruction.
    Redirect {
        /// Redirect target.
        destination: String,
    },
}

/// Capability check wrapped around a renderable unit.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    policy: AccessPolicy,
    required_module: Option<Module>,
    denial_mode: DenialMode,
}

impl AccessGuard {
    /// Creates a guard that gates on the module owning the current path.
    #[must_use]
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            policy,
            required_module: None,
            denial_mode: DenialMode::default(),
        }
    }

    /// Gates on an explicit module instead of the current path.
    #[must_use]
    pub fn requiring(mut self, module: Module) -> Self {
        self.required_module = Some(module);
        self
    }

    /// Selects how denials are surfaced.
    #[must_use]
    pub fn with_denial_mode(mut self, denial_mode: DenialMode) -> Self {
        self.denial_mode = denial_mode;
        self
    }

    /// Returns the explicit module requirement, if any.
    #[must_use]
    pub fn required_module(&self) -> Option<Module> {
        self.required_module
    }

    /// Evaluates access to `path` for the given session.
    #[must_use]
    pub fn evaluate(&self, path: &str, session: &SessionState) -> AccessOutcome {
        let claim = match session {
            SessionState::Pending => return AccessOutcome::Loading,
            SessionState::Anonymous => return self.deny(SIGN_IN_ROUTE),
            SessionState::Authenticated(claim) => claim,
        };

        let role = claim.role();
        let allowed = match self.required_module {
            Some(module) => self.policy.has_module_access(role, module),
            None => self.policy.has_route_access(role, path),
        };

        if allowed {
            AccessOutcome::Granted
        } else {
            self.deny(self.policy.fallback_route(role))
        }
    }

    /// Runs `render` only when access is granted.
    pub fn render<T, F>(&self, path: &str, session: &SessionState, render: F) -> Guarded<T>
    where
        F: FnOnce() -> T,
    {
        match self.evaluate(path, session) {
            AccessOutcome::Loading => Guarded::Loading,
            AccessOutcome::Granted => Guarded::Rendered(render()),
            AccessOutcome::Denied { destination } => Guarded::Denied { destination },
            AccessOutcome::Redirect { destination } => Guarded::Redirect { destination },
        }
    }

    fn deny(&self, destination: &str) -> AccessOutcome {
        let destination = destination.to_owned();
        match self.denial_mode {
            DenialMode::Inline => AccessOutcome::Denied { destination },
            DenialMode::Redirect => AccessOutcome::Redirect { destination },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use hearth_domain::{FORBIDDEN_ROUTE, Module, Role, RoleClaim};

    use super::{AccessGuard, AccessOutcome, DenialMode, Guarded};
    use crate::{AccessPolicy, SessionState};

    fn signed_in(role: &str) -> SessionState {
        SessionState::Authenticated(RoleClaim::new(role))
    }

    #[test]
    fn pending_session_renders_nothing() {
        let guard = AccessGuard::new(AccessPolicy::standard());
        let calls = Cell::new(0);

        let result = guard.render("/dashboard", &SessionState::Pending, || {
            calls.set(calls.get() + 1);
        });

        assert_eq!(result, Guarded::Loading);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn anonymous_session_targets_sign_in() {
        let guard = AccessGuard::new(AccessPolicy::standard());
        assert_eq!(
            guard.evaluate("/dashboard", &SessionState::Anonymous),
            AccessOutcome::Denied {
                destination: "/sign-in".to_owned()
            }
        );
    }

    #[test]
    fn granted_route_runs_render() {
        let guard = AccessGuard::new(AccessPolicy::standard());
        let result = guard.render("/reports/occupancy", &signed_in("Owner"), || "report");
        assert_eq!(result, Guarded::Rendered("report"));
    }

    #[test]
    fn denied_route_points_to_fallback_without_rendering() {
        let guard = AccessGuard::new(AccessPolicy::standard());
        let calls = Cell::new(0);

        let result = guard.render("/settings", &signed_in("Tenant"), || {
            calls.set(calls.get() + 1);
        });

        assert_eq!(
            result,
            Guarded::Denied {
                destination: "/maintenance".to_owned()
            }
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn redirect_mode_returns_redirect() {
        let guard =
            AccessGuard::new(AccessPolicy::standard()).with_denial_mode(DenialMode::Redirect);
        assert_eq!(
            guard.evaluate("/tenants", &signed_in(Role::Vendor.as_str())),
            AccessOutcome::Redirect {
                destination: "/maintenance".to_owned()
            }
        );
    }

    #[test]
    fn module_override_ignores_current_path() {
        let guard = AccessGuard::new(AccessPolicy::standard()).requiring(Module::Settings);

        assert_eq!(
            guard.evaluate("/dashboard", &signed_in("PropertyManager")),
            AccessOutcome::Denied {
                destination: "/dashboard".to_owned()
            }
        );
        assert_eq!(
            guard.evaluate("/unmapped", &signed_in("Administrator")),
            AccessOutcome::Granted
        );
    }

    #[test]
    fn unknown_role_is_sent_to_forbidden_page() {
        let guard = AccessGuard::new(AccessPolicy::standard());
        assert_eq!(
            guard.evaluate("/dashboard", &signed_in("Hacker")),
            AccessOutcome::Denied {
                destination: FORBIDDEN_ROUTE.to_owned()
            }
        );
    }
}
