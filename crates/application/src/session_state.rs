use hearth_domain::{Role, RoleClaim};

/// Outcome of resolving the current session before an access decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Session lookup has not completed yet.
    Pending,
    /// No session, or a session without a role.
    Anonymous,
    /// Signed-in session carrying a raw role value.
    Authenticated(RoleClaim),
}

impl SessionState {
    /// Builds a resolved state from an optional role claim.
    #[must_use]
    pub fn from_claim(claim: Option<RoleClaim>) -> Self {
        match claim {
            Some(claim) => Self::Authenticated(claim),
            None => Self::Anonymous,
        }
    }

    /// Returns the role claim of a signed-in session.
    #[must_use]
    pub fn claim(&self) -> Option<&RoleClaim> {
        match self {
            Self::Authenticated(claim) => Some(claim),
            Self::Pending | Self::Anonymous => None,
        }
    }

    /// Returns the resolved role; `None` for pending, anonymous and unknown roles.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.claim().and_then(RoleClaim::role)
    }
}

#[cfg(test)]
mod tests {
    use hearth_domain::{Role, RoleClaim};

    use super::SessionState;

    #[test]
    fn unknown_claim_stays_authenticated_without_role() {
        let state = SessionState::from_claim(Some(RoleClaim::new("Hacker")));
        assert!(state.claim().is_some());
        assert_eq!(state.role(), None);
    }

    #[test]
    fn missing_claim_is_anonymous() {
        assert_eq!(SessionState::from_claim(None), SessionState::Anonymous);
        assert_eq!(
            SessionState::from_claim(Some(Role::Owner.into())).role(),
            Some(Role::Owner)
        );
    }
}
