//! Account-related type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::labels::{labels_to_text, parse_labels};

/// A single normalized label attached to an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelTag {
    pub text: String,
}

impl LabelTag {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// How the account authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccountType {
    /// Credential managed by the directory; no password is stored
    #[default]
    #[serde(rename = "LDAP")]
    Ldap,
    /// Password kept in the store
    #[serde(rename = "Local", alias = "Локальная")]
    Local,
}

impl AccountType {
    /// Wire name used by the UI layer
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ldap => "LDAP",
            Self::Local => "Local",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account record as persisted by the store
///
/// `password` is `None` exactly when `account_type` is [`AccountType::Ldap`]
/// once the record has been written by [`AccountStore`](crate::AccountStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID (UUID)
    pub id: String,
    /// Labels in display order
    #[serde(default)]
    pub label: Vec<LabelTag>,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub login: String,
    pub password: Option<String>,
}

impl Account {
    /// Blank LDAP account with a fresh id
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            label: Vec::new(),
            account_type: AccountType::Ldap,
            login: String::new(),
            password: None,
        }
    }

    /// Overwrite every field from form input, normalizing labels and the password.
    pub fn apply_form(&mut self, form: &AccountFormData) {
        self.label = parse_labels(&form.label_text);
        self.account_type = form.account_type;
        self.login.clone_from(&form.login);
        self.password = match form.account_type {
            AccountType::Ldap => None,
            AccountType::Local => Some(form.password.clone()),
        };
    }

    /// Drop a password an LDAP record should not carry; returns `true` if one was dropped.
    pub fn normalize(&mut self) -> bool {
        self.account_type == AccountType::Ldap && self.password.take().is_some()
    }

    /// Project back into the shape the editor works with
    #[must_use]
    pub fn to_form_data(&self) -> AccountFormData {
        AccountFormData {
            id: self.id.clone(),
            label_text: labels_to_text(&self.label),
            account_type: self.account_type,
            login: self.login.clone(),
            password: self.password.clone().unwrap_or_default(),
        }
    }
}

/// Raw editor input for one account
///
/// An empty `password` stands for "no password".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFormData {
    pub id: String,
    /// `"; "`-joined label text as typed by the user
    pub label_text: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub login: String,
    pub password: String,
}
