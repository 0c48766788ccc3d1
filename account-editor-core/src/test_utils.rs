//! Test helper module
//!
//! Provides a mock repository and convenient factory methods.

use std::sync::{Arc, Mutex};

use crate::error::{CoreError, CoreResult};
use crate::services::AccountStore;
use crate::traits::AccountRepository;
use crate::types::{Account, AccountFormData, AccountType};

// ===== MockAccountRepository =====

pub struct MockAccountRepository {
    /// Every collection handed to `save_all`, oldest first
    saves: Mutex<Vec<Vec<Account>>>,
    /// If Some, `save_all` returns this error
    save_error: Mutex<Option<String>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self {
            saves: Mutex::new(Vec::new()),
            save_error: Mutex::new(None),
        }
    }

    pub fn set_save_error(&self, err: Option<String>) {
        *self.save_error.lock().unwrap() = err;
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn last_saved(&self) -> Option<Vec<Account>> {
        self.saves.lock().unwrap().last().cloned()
    }
}

impl AccountRepository for MockAccountRepository {
    fn load_all(&self) -> CoreResult<Vec<Account>> {
        Ok(self.last_saved().unwrap_or_default())
    }

    fn save_all(&self, accounts: &[Account]) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.lock().unwrap() {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.saves.lock().unwrap().push(accounts.to_vec());
        Ok(())
    }
}

// ===== Factories =====

pub fn create_test_store() -> (AccountStore, Arc<MockAccountRepository>) {
    let repo = Arc::new(MockAccountRepository::new());
    let store = AccountStore::new(repo.clone());
    (store, repo)
}

fn form(
    account_type: AccountType,
    id: &str,
    label_text: &str,
    login: &str,
    password: &str,
) -> AccountFormData {
    AccountFormData {
        id: id.to_string(),
        label_text: label_text.to_string(),
        account_type,
        login: login.to_string(),
        password: password.to_string(),
    }
}

pub fn ldap_form(id: &str, label_text: &str, login: &str, password: &str) -> AccountFormData {
    form(AccountType::Ldap, id, label_text, login, password)
}

pub fn local_form(id: &str, label_text: &str, login: &str, password: &str) -> AccountFormData {
    form(AccountType::Local, id, label_text, login, password)
}
