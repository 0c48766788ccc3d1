//! Account collection store
//!
//! Owns the canonical, ordered list of accounts. Every successful mutation is
//! handed to the [`AccountRepository`] and announced to subscribers.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::AccountRepository;
use crate::types::{Account, AccountFormData};

/// Change notification sent to subscribers after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A blank account was appended
    Added(String),
    /// An account was overwritten from form data
    Updated(String),
    /// An account was removed
    Deleted(String),
}

impl StoreEvent {
    /// Id of the affected account
    pub fn account_id(&self) -> &str {
        match self {
            Self::Added(id) | Self::Updated(id) | Self::Deleted(id) => id,
        }
    }
}

/// Handle returned by [`AccountStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&StoreEvent)>;

/// In-memory account collection backed by a repository
pub struct AccountStore {
    accounts: Vec<Account>,
    repository: Arc<dyn AccountRepository>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl AccountStore {
    /// Create an empty store
    #[must_use]
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self::with_accounts(repository, Vec::new())
    }

    /// Restore the collection saved in `repository`
    ///
    /// LDAP records saved with a password lose it; the cleaned collection is
    /// written back when anything changed.
    pub fn load(repository: Arc<dyn AccountRepository>) -> CoreResult<Self> {
        let mut accounts = repository.load_all()?;
        let normalized = accounts
            .iter_mut()
            .map(Account::normalize)
            .filter(|changed| *changed)
            .count();
        log::info!("Restored {} account(s)", accounts.len());

        let store = Self::with_accounts(repository, accounts);
        if normalized > 0 {
            log::warn!("Dropped stored password from {normalized} LDAP account(s)");
            if let Err(e) = store.flush() {
                e.log("Failed to persist normalized accounts");
            }
        }
        Ok(store)
    }

    fn with_accounts(repository: Arc<dyn AccountRepository>, accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            repository,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ===== Queries =====

    /// All accounts in display order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Get account based on ID
    pub fn get_account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Account in editor shape; a missing password becomes `""`
    pub fn get_account_form_data(&self, id: &str) -> Option<AccountFormData> {
        self.get_account(id).map(Account::to_form_data)
    }

    // ===== Mutations =====

    /// Append a blank LDAP account and return its id
    pub fn add_account(&mut self) -> String {
        let account = Account::empty();
        let id = account.id.clone();
        self.accounts.push(account);
        log::debug!("Added account {id}");
        self.commit(&StoreEvent::Added(id.clone()));
        id
    }

    /// Remove the account with `id`; unknown ids are ignored
    pub fn delete_account(&mut self, id: &str) {
        if let Err(e) = self.try_delete_account(id) {
            log::debug!("Delete skipped: {e}");
        }
    }

    /// Like [`delete_account`](Self::delete_account) but reports unknown ids
    pub fn try_delete_account(&mut self, id: &str) -> CoreResult<()> {
        let index = self.position(id)?;
        self.accounts.remove(index);
        log::debug!("Deleted account {id}");
        self.commit(&StoreEvent::Deleted(id.to_string()));
        Ok(())
    }

    /// Overwrite the account named by `form.id`; unknown ids are ignored.
    ///
    /// Labels are re-parsed from `form.label_text` and the password is dropped for
    /// LDAP accounts. No validation happens here.
    pub fn update_account(&mut self, form: &AccountFormData) {
        if let Err(e) = self.try_update_account(form) {
            log::debug!("Update skipped: {e}");
        }
    }

    /// Like [`update_account`](Self::update_account) but reports unknown ids
    pub fn try_update_account(&mut self, form: &AccountFormData) -> CoreResult<()> {
        let index = self.position(&form.id)?;
        self.accounts[index].apply_form(form);
        log::debug!("Updated account {} as {}", form.id, form.account_type);
        self.commit(&StoreEvent::Updated(form.id.clone()));
        Ok(())
    }

    // ===== Subscriptions =====

    /// Register a listener called after every successful mutation
    pub fn subscribe(&mut self, listener: impl Fn(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns `false` if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    // ===== Persistence =====

    /// Write the current collection to the repository
    pub fn flush(&self) -> CoreResult<()> {
        self.repository.save_all(&self.accounts)
    }

    fn position(&self, id: &str) -> CoreResult<usize> {
        self.accounts
            .iter()
            .position(|account| account.id == id)
            .ok_or_else(|| CoreError::AccountNotFound(id.to_string()))
    }

    /// Persist, then notify. A failed save keeps the in-memory change.
    fn commit(&self, event: &StoreEvent) {
        if let Err(e) = self.flush() {
            e.log("Failed to persist accounts");
        }
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}
