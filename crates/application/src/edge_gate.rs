//! Request-time gate applied before any page handler runs.

use hearth_domain::{SIGN_IN_ROUTE, UNAUTHORIZED_SIGN_IN_ROUTE, request_path};

use crate::{AccessPolicy, SessionState};

/// Why the gate redirected a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRedirectReason {
    /// No session or no role on the session.
    SignInRequired,
    /// The session role is not part of the role enumeration.
    UnknownRole,
    /// The application root was requested.
    Landing,
    /// The role may not open the requested path.
    RouteDenied,
}

impl GateRedirectReason {
    /// Returns a stable value for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SignInRequired => "sign_in_required",
            Self::UnknownRole => "unknown_role",
            Self::Landing => "landing",
            Self::RouteDenied => "route_denied",
        }
    }
}

/// Decision returned by the edge gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through to its handler.
    Pass,
    /// Send the client elsewhere.
    Redirect {
        /// Target location.
        location: String,
        /// Reason for the redirect.
        reason: GateRedirectReason,
    },
}

/// Edge gate over the shared access policy.
#[derive(Debug, Clone)]
pub struct EdgeGate {
    policy: AccessPolicy,
}

impl EdgeGate {
    /// Creates an edge gate.
    #[must_use]
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    /// Returns whether a path skips session resolution entirely.
    #[must_use]
    pub fn is_exempt(&self, path: &str) -> bool {
        self.policy.is_public_path(path)
    }

    /// Decides what happens to a request for `path`.
    ///
    /// A pending session is treated as absent: the gate never lets a request
    /// through on an unresolved session.
    #[must_use]
    pub fn decide(&self, path: &str, session: &SessionState) -> GateDecision {
        let path = request_path(path);
        if self.is_exempt(path) {
            return GateDecision::Pass;
        }

        let claim = match session {
            SessionState::Pending | SessionState::Anonymous => {
                return redirect(SIGN_IN_ROUTE, GateRedirectReason::SignInRequired);
            }
            SessionState::Authenticated(claim) => claim,
        };

        let Some(role) = claim.role() else {
            return redirect(UNAUTHORIZED_SIGN_IN_ROUTE, GateRedirectReason::UnknownRole);
        };

        if path == "/" || path.is_empty() {
            return redirect(
                self.policy.fallback_route(Some(role)),
                GateRedirectReason::Landing,
            );
        }

        if self.policy.has_route_access(Some(role), path) {
            GateDecision::Pass
        } else {
            redirect(
                self.policy.fallback_route(Some(role)),
                GateRedirectReason::RouteDenied,
            )
        }
    }
}

fn redirect(location: &str, reason: GateRedirectReason) -> GateDecision {
    GateDecision::Redirect {
        location: location.to_owned(),
        reason,
    }
}
