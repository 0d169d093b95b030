//! In-memory account repository adapter.
//!
//! Stand-in for the out-of-scope persistence layer: the composition root
//! and the test suites run against it without external infrastructure. A
//! database-backed adapter implements the same port and maps its failures
//! into [`AccountPersistenceError`] variants.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::Account;
use crate::domain::ports::{AccountPersistenceError, AccountRepository};

/// Thread-safe account store keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from an iterator of accounts.
    pub fn seeded(accounts: impl IntoIterator<Item = Account>) -> Self {
        let store = Self::new();
        for account in accounts {
            store.insert(account);
        }
        store
    }

    /// Insert or replace the record for the account's username.
    pub fn insert(&self, account: Account) {
        // Poisoning cannot leave the map in a broken state, so recover the
        // guard instead of failing the write.
        let mut guard = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        guard.insert(account.username().to_owned(), account);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        let guard = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use uuid::Uuid;

    use super::*;

    fn account(username: &str) -> Account {
        Account::new(Uuid::new_v4(), username, "salt$digest")
    }

    #[tokio::test]
    async fn finds_inserted_accounts_by_exact_username() {
        let store = InMemoryAccountRepository::seeded([account("ada"), account("grace")]);

        let found = store.find_by_username("ada").await.expect("lookup");
        assert_eq!(found.map(|a| a.username().to_owned()), Some("ada".to_owned()));

        let missing = store.find_by_username("Ada").await.expect("lookup");
        assert!(missing.is_none(), "usernames are matched case-sensitively");
    }

    #[tokio::test]
    async fn missing_usernames_are_none_not_errors() {
        let store = InMemoryAccountRepository::new();
        let found = store.find_by_username("nobody").await.expect("lookup");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn insert_replaces_the_record_for_a_username() {
        let store = InMemoryAccountRepository::new();
        store.insert(account("ada"));
        store.insert(Account::new(Uuid::new_v4(), "ada", "other$digest").soft_deleted());

        let found = store
            .find_by_username("ada")
            .await
            .expect("lookup")
            .expect("account present");
        assert!(found.is_deleted());
        assert_eq!(found.password_hash(), "other$digest");
    }
}
