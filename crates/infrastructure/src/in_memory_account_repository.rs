use std::collections::HashMap;

use async_trait::async_trait;
use hearth_application::{AccountRecord, AccountRepository};
use hearth_core::{AppError, AppResult};
use tokio::sync::RwLock;

/// In-memory account repository keyed by canonical email.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, AccountRecord>>,
}

impl InMemoryAccountRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AccountRecord>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email.to_lowercase().as_str()).cloned())
    }

    async fn create(&self, account: AccountRecord) -> AppResult<()> {
        let key = account.email.to_lowercase();
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&key) {
            return Err(AppError::Conflict(format!(
                "account '{key}' already exists"
            )));
        }

        accounts.insert(key, account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hearth_application::{AccountRecord, AccountRepository};
    use hearth_core::{AppError, AppResult};
    use hearth_domain::{AccountId, Role};

    use super::InMemoryAccountRepository;

    fn owner_record() -> AccountRecord {
        AccountRecord {
            id: AccountId::new(),
            email: "owner@hearth.example".to_owned(),
            display_name: "Owner".to_owned(),
            role: Role::Owner,
            password_hash: "hash".to_owned(),
        }
    }

    #[tokio::test]
    async fn lookup_ignores_email_case() -> AppResult<()> {
        let repository = InMemoryAccountRepository::new();
        repository.create(owner_record()).await?;

        let found = repository.find_by_email("Owner@Hearth.Example").await?;
        assert_eq!(found.map(|account| account.role), Some(Role::Owner));
        Ok(())
    }

    #[tokio::test]
    async fn second_account_with_same_email_conflicts() -> AppResult<()> {
        let repository = InMemoryAccountRepository::new();
        repository.create(owner_record()).await?;

        let result = repository.create(owner_record()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        Ok(())
    }
}
