//! Validation result types

use serde::{Deserialize, Serialize};

/// Editor fields that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationField {
    Login,
    Password,
    Label,
}

impl ValidationField {
    #[must_use]
    pub fn all() -> &'static [ValidationField] {
        &[Self::Login, Self::Password, Self::Label]
    }
}

/// Field name -> error message; a `None` field is currently valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: ValidationField) -> Option<&str> {
        match field {
            ValidationField::Login => self.login.as_deref(),
            ValidationField::Password => self.password.as_deref(),
            ValidationField::Label => self.label.as_deref(),
        }
    }

    pub fn set(&mut self, field: ValidationField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: ValidationField) {
        *self.slot_mut(field) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.login.is_none() && self.password.is_none() && self.label.is_none()
    }

    fn slot_mut(&mut self, field: ValidationField) -> &mut Option<String> {
        match field {
            ValidationField::Login => &mut self.login,
            ValidationField::Password => &mut self.password,
            ValidationField::Label => &mut self.label,
        }
    }
}

/// Maximum lengths, counted in UTF-16 code units like a browser `String.length`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationLimits {
    pub login_max_length: usize,
    pub password_max_length: usize,
    pub label_max_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            login_max_length: 100,
            password_max_length: 100,
            label_max_length: 50,
        }
    }
}
