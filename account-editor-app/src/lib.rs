//! Application bootstrap for the account editor.
//!
//! Provides `AppState` (store + validator container), `AppStateBuilder`
//! (configuration and adapter injection) and the JSON storage adapter.

pub mod adapters;
pub mod config;

use std::sync::Arc;

use account_editor_core::error::CoreResult;
use account_editor_core::services::{AccountStore, AccountValidator};
use account_editor_core::traits::AccountRepository;
use account_editor_core::types::AccountFormData;

use crate::adapters::JsonFileAccountRepository;
use crate::config::AppConfig;

/// Application state.
///
/// Owns the single account store and the form validator. The UI layer
/// constructs this once at startup via `AppStateBuilder` and passes it around.
pub struct AppState {
    config: AppConfig,
    store: AccountStore,
    validator: AccountValidator,
}

impl AppState {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AccountStore {
        &mut self.store
    }

    pub fn validator(&self) -> &AccountValidator {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut AccountValidator {
        &mut self.validator
    }

    /// Start an edit session for `id`: clear stale errors and return its form data.
    pub fn edit_form(&mut self, id: &str) -> Option<AccountFormData> {
        self.validator.clear_errors();
        self.store.get_account_form_data(id)
    }

    /// Validate `form` and commit it to the store only when it passes.
    ///
    /// Returns the validation result; errors are left in the validator.
    pub fn submit_form(&mut self, form: &AccountFormData) -> bool {
        if !self.validator.validate_account(form) {
            log::debug!("Form for account {} rejected", form.id);
            return false;
        }
        self.store.update_account(form);
        true
    }

    /// Flush the collection before exit.
    pub fn shutdown(self) -> CoreResult<()> {
        self.store.flush()?;
        log::info!("Saved {} account(s) on shutdown", self.store.len());
        Ok(())
    }
}

/// Builder for constructing `AppState`.
///
/// # Optional
/// - `config` — defaults to `AppConfig::default()`
/// - `account_repository` — defaults to a `JsonFileAccountRepository`
///   at `config.storage_path()`
pub struct AppStateBuilder {
    config: AppConfig,
    account_repository: Option<Arc<dyn AccountRepository>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            account_repository: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn account_repository(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repository = Some(repo);
        self
    }

    /// Build the `AppState`, restoring saved accounts.
    ///
    /// # Errors
    /// Fails when the repository cannot load the saved collection.
    pub fn build(self) -> CoreResult<AppState> {
        let account_repository = self.account_repository.unwrap_or_else(|| {
            Arc::new(JsonFileAccountRepository::new(self.config.storage_path()))
        });

        let store = AccountStore::load(account_repository).inspect_err(|e| {
            e.log("Failed to restore accounts");
        })?;
        let validator = AccountValidator::with_language(self.config.language(), self.config.limits);

        Ok(AppState {
            config: self.config,
            store,
            validator,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
