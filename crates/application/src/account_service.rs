//! Account ports and sign-in service.
//!
//! Roles are fixed when an account is provisioned; sign-in only proves the
//! password and hands the stored role to the session. Failure messages are
//! generic so callers cannot probe which emails exist.

use std::sync::Arc;

use async_trait::async_trait;
use hearth_core::{AppError, AppResult, NonEmptyString};
use hearth_domain::{AccountId, EmailAddress, Role, validate_password};

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Account record returned by repository queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Unique account identifier.
    pub id: AccountId,
    /// Canonical email address.
    pub email: String,
    /// Name shown in the interface.
    pub display_name: String,
    /// Role assigned at invite time.
    pub role: Role,
    /// Argon2id password hash.
    pub password_hash: String,
}

/// Repository port for account persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Finds an account by canonical email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AccountRecord>>;

    /// Stores a new account. Fails with `Conflict` when the email is taken.
    async fn create(&self, account: AccountRecord) -> AppResult<()>;
}

/// Port for password hashing operations.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password.
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Verifies a plaintext password against a stored hash.
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Result of a sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Credentials matched; a session may be established.
    Authenticated(AccountRecord),
    /// Unknown email or wrong password.
    Failed,
}

/// Input for provisioning an invited account.
#[derive(Debug, Clone)]
pub struct ProvisionAccountInput {
    /// Email address of the invitee.
    pub email: String,
    /// Display name of the invitee.
    pub display_name: String,
    /// Role fixed for the account.
    pub role: Role,
    /// Initial plaintext password.
    pub password: String,
}

/// Application service for account sign-in and provisioning.
#[derive(Clone)]
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
    /// Creates a new account service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Verifies email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<SignInOutcome> {
        let Ok(email) = EmailAddress::new(email) else {
            let _ = self.password_hasher.hash_password(password);
            return Ok(SignInOutcome::Failed);
        };

        let Some(account) = self.repository.find_by_email(email.as_str()).await? else {
            // Hash anyway so unknown emails cost the same as wrong passwords.
            let _ = self.password_hasher.hash_password(password);
            return Ok(SignInOutcome::Failed);
        };

        if self
            .password_hasher
            .verify_password(password, account.password_hash.as_str())?
        {
            Ok(SignInOutcome::Authenticated(account))
        } else {
            Ok(SignInOutcome::Failed)
        }
    }

    /// Creates an account with a fixed role.
    pub async fn provision_account(&self, input: ProvisionAccountInput) -> AppResult<AccountId> {
        let email = EmailAddress::new(input.email)?;
        let display_name = NonEmptyString::new(input.display_name.trim())?;
        validate_password(input.password.as_str())?;

        if self
            .repository
            .find_by_email(email.as_str())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "account '{}' already exists",
                email.as_str()
            )));
        }

        let id = AccountId::new();
        let password_hash = self.password_hasher.hash_password(input.password.as_str())?;
        self.repository
            .create(AccountRecord {
                id,
                email: email.into(),
                display_name: display_name.into(),
                role: input.role,
                password_hash,
            })
            .await?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use hearth_core::{AppError, AppResult};
    use hearth_domain::Role;
    use tokio::sync::Mutex;

    use super::{
        AccountRecord, AccountRepository, AccountService, PasswordHasher, ProvisionAccountInput,
        SignInOutcome,
    };

    #[derive(Default)]
    struct FakeAccountRepository {
        accounts: Mutex<HashMap<String, AccountRecord>>,
    }

    #[async_trait]
    impl AccountRepository for FakeAccountRepository {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<AccountRecord>> {
            Ok(self.accounts.lock().await.get(email).cloned())
        }

        async fn create(&self, account: AccountRecord) -> AppResult<()> {
            let mut accounts = self.accounts.lock().await;
            if accounts.contains_key(&account.email) {
                return Err(AppError::Conflict(account.email));
            }
            accounts.insert(account.email.clone(), account);
            Ok(())
        }
    }

    struct ReversingHasher;

    impl PasswordHasher for ReversingHasher {
        fn hash_password(&self, password: &str) -> AppResult<String> {
            Ok(password.chars().rev().collect())
        }

        fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
            Ok(password.chars().rev().collect::<String>() == hash)
        }
    }

    fn service() -> AccountService {
        AccountService::new(
            Arc::new(FakeAccountRepository::default()),
            Arc::new(ReversingHasher),
        )
    }

    fn front_desk_input() -> ProvisionAccountInput {
        ProvisionAccountInput {
            email: "Desk@Hearth.Example".to_owned(),
            display_name: "Front Desk".to_owned(),
            role: Role::FrontDesk,
            password: "lobby-shift-2024".to_owned(),
        }
    }

    #[tokio::test]
    async fn provisioned_account_signs_in_with_its_role() -> AppResult<()> {
        let service = service();
        service.provision_account(front_desk_input()).await?;

        let outcome = service
            .sign_in("desk@hearth.example", "lobby-shift-2024")
            .await?;

        match outcome {
            SignInOutcome::Authenticated(account) => assert_eq!(account.role, Role::FrontDesk),
            SignInOutcome::Failed => panic!("expected successful sign-in"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_fail_alike() -> AppResult<()> {
        let service = service();
        service.provision_account(front_desk_input()).await?;

        assert_eq!(
            service.sign_in("desk@hearth.example", "wrong-password").await?,
            SignInOutcome::Failed
        );
        assert_eq!(
            service.sign_in("nobody@hearth.example", "lobby-shift-2024").await?,
            SignInOutcome::Failed
        );
        assert_eq!(
            service.sign_in("not-an-email", "lobby-shift-2024").await?,
            SignInOutcome::Failed
        );
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() -> AppResult<()> {
        let service = service();
        service.provision_account(front_desk_input()).await?;

        let duplicate = service.provision_account(front_desk_input()).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));
        Ok(())
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let service = service();
        let mut input = front_desk_input();
        input.password = "short".to_owned();

        assert!(service.provision_account(input).await.is_err());
    }
}
