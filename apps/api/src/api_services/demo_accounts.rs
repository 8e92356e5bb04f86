use hearth_application::{AccountService, ProvisionAccountInput};
use hearth_core::{AppError, AppResult};
use hearth_domain::Role;
use tracing::info;

const DEMO_EMAIL_DOMAIN: &str = "demo.hearth.local";

/// Returns the demo sign-in email for a role.
pub fn demo_email(role: Role) -> String {
    format!("{}@{DEMO_EMAIL_DOMAIN}", role.as_str().to_lowercase())
}

/// Provisions one account per role. Existing accounts are left untouched.
pub async fn seed_demo_accounts(service: &AccountService, password: &str) -> AppResult<usize> {
    let mut created = 0;

    for role in Role::all() {
        let result = service
            .provision_account(ProvisionAccountInput {
                email: demo_email(*role),
                display_name: format!("Demo {}", role.display_name()),
                role: *role,
                password: password.to_owned(),
            })
            .await;

        match result {
            Ok(_) => created += 1,
            Err(AppError::Conflict(_)) => {}
            Err(error) => return Err(error),
        }
    }

    info!(created, "seeded demo accounts");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hearth_application::{AccountService, SignInOutcome};
    use hearth_core::AppResult;
    use hearth_domain::Role;
    use hearth_infrastructure::{Argon2PasswordHasher, InMemoryAccountRepository};

    use super::{demo_email, seed_demo_accounts};

    #[tokio::test]
    async fn seeding_twice_creates_each_account_once() -> AppResult<()> {
        let service = AccountService::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(Argon2PasswordHasher::new()),
        );

        assert_eq!(
            seed_demo_accounts(&service, "demo-password-123").await?,
            Role::all().len()
        );
        assert_eq!(seed_demo_accounts(&service, "demo-password-123").await?, 0);

        let outcome = service
            .sign_in(&demo_email(Role::BuildingMaintenance), "demo-password-123")
            .await?;
        assert!(matches!(
            outcome,
            SignInOutcome::Authenticated(account) if account.role == Role::BuildingMaintenance
        ));
        Ok(())
    }
}
