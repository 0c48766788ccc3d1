//! Account repository
//!
//! Stores the account collection in a JSON file and implements
//! account-editor-core's `AccountRepository` trait.

use std::fs;
use std::path::{Path, PathBuf};

use account_editor_core::traits::AccountRepository;
use account_editor_core::types::Account;
use account_editor_core::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current on-disk format version
pub const ACCOUNTS_FILE_VERSION: u32 = 1;

/// File header plus accounts, as written
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountsFileRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    accounts: &'a [Account],
}

/// File contents as read; `version` is absent in files written by the browser build
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountsFile {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    accounts: Vec<Account>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAccounts {
    File(AccountsFile),
    Bare(Vec<Account>),
}

/// JSON file-based account repository
pub struct JsonFileAccountRepository {
    path: PathBuf,
}

impl JsonFileAccountRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the parent directory exists
    fn ensure_parent_dir(&self) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
            }
        }
        Ok(())
    }
}

impl AccountRepository for JsonFileAccountRepository {
    fn load_all(&self) -> CoreResult<Vec<Account>> {
        if !self.path.exists() {
            log::debug!("No accounts file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| CoreError::StorageError(e.to_string()))?;

        let stored: StoredAccounts = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        match stored {
            StoredAccounts::File(file) => match file.version {
                Some(version) if version != ACCOUNTS_FILE_VERSION => {
                    Err(CoreError::UnsupportedFileVersion(version))
                }
                _ => {
                    if let Some(saved_at) = file.saved_at {
                        log::debug!("Accounts file last saved at {saved_at}");
                    }
                    Ok(file.accounts)
                }
            },
            StoredAccounts::Bare(accounts) => Ok(accounts),
        }
    }

    fn save_all(&self, accounts: &[Account]) -> CoreResult<()> {
        self.ensure_parent_dir()?;

        let file = AccountsFileRef {
            version: ACCOUNTS_FILE_VERSION,
            saved_at: Utc::now(),
            accounts,
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content).map_err(|e| CoreError::StorageError(e.to_string()))?;

        Ok(())
    }
}
