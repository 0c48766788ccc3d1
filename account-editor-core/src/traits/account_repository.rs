//! Account persistence abstract Trait

use std::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::Account;

/// Account collection persistence
///
/// The store hands over the whole collection after every successful mutation;
/// an implementation decides whether to write through or buffer.
///
/// Platform implementation:
/// - `JsonFileAccountRepository` (account-editor-app)
/// - [`InMemoryAccountRepository`] for tests and ephemeral sessions
pub trait AccountRepository: Send + Sync {
    /// Load the collection saved last time, in order
    fn load_all(&self) -> CoreResult<Vec<Account>>;

    /// Replace the saved collection
    ///
    /// # Arguments
    /// * `accounts` - Account list, in display order
    fn save_all(&self, accounts: &[Account]) -> CoreResult<()>;
}

/// Repository that keeps the collection in memory only
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing collection
    #[must_use]
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn load_all(&self) -> CoreResult<Vec<Account>> {
        self.accounts
            .read()
            .map(|accounts| accounts.clone())
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }

    fn save_all(&self, accounts: &[Account]) -> CoreResult<()> {
        let mut stored = self
            .accounts
            .write()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        *stored = accounts.to_vec();
        Ok(())
    }
}
