//! Account form validation
//!
//! Checks are synchronous and never fail with an error: every outcome is a `bool`
//! plus the per-field message kept in [`ValidationErrors`].

use crate::i18n::{Language, MessageTable};
use crate::types::{
    AccountFormData, AccountType, LabelTag, ValidationErrors, ValidationField, ValidationLimits,
};
use crate::utils::labels;
use crate::utils::text::{form_length, trim_form};

/// Field and form validator holding the current error messages
#[derive(Debug, Clone, Default)]
pub struct AccountValidator {
    errors: ValidationErrors,
    messages: MessageTable,
    limits: ValidationLimits,
}

impl AccountValidator {
    /// Validator with English messages and default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator using the messages of `language`
    #[must_use]
    pub fn with_language(language: Language, limits: ValidationLimits) -> Self {
        Self::with_messages(language.messages().clone(), limits)
    }

    /// Validator using a custom message table
    #[must_use]
    pub fn with_messages(messages: MessageTable, limits: ValidationLimits) -> Self {
        Self {
            errors: ValidationErrors::default(),
            messages,
            limits,
        }
    }

    /// Current errors
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Validate one field and update its entry in the error map.
    ///
    /// The previous error for `field` is always cleared first, so calling this
    /// repeatedly reflects only the latest value. `account_type` matters for
    /// [`ValidationField::Password`] only; passwords are checked for local accounts.
    pub fn validate_field(
        &mut self,
        field: ValidationField,
        value: &str,
        account_type: Option<AccountType>,
    ) -> bool {
        self.errors.clear(field);

        let failure = match field {
            ValidationField::Login => self.check_required(
                value,
                &self.messages.login_required,
                &self.messages.login_too_long,
                self.limits.login_max_length,
            ),
            ValidationField::Password if account_type == Some(AccountType::Local) => self
                .check_required(
                    value,
                    &self.messages.password_required,
                    &self.messages.password_too_long,
                    self.limits.password_max_length,
                ),
            ValidationField::Password => None,
            ValidationField::Label => self.check_length(
                value,
                &self.messages.label_too_long,
                self.limits.label_max_length,
            ),
        };

        match failure {
            Some(message) => {
                log::debug!("Validation failed for {field:?}: {message}");
                self.errors.set(field, message);
                false
            }
            None => true,
        }
    }

    /// Validate login, password and label of a form.
    ///
    /// All three fields are always checked, so the error map holds every failure.
    pub fn validate_account(&mut self, form: &AccountFormData) -> bool {
        let login_ok = self.validate_field(ValidationField::Login, &form.login, None);
        let password_ok = self.validate_field(
            ValidationField::Password,
            &form.password,
            Some(form.account_type),
        );
        let label_ok = self.validate_field(ValidationField::Label, &form.label_text, None);

        login_ok && password_ok && label_ok
    }

    /// See [`labels::parse_labels`]
    pub fn parse_labels(text: &str) -> Vec<LabelTag> {
        labels::parse_labels(text)
    }

    /// See [`labels::labels_to_text`]
    pub fn labels_to_text(labels: &[LabelTag]) -> String {
        labels::labels_to_text(labels)
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear_all();
    }

    fn check_required(
        &self,
        value: &str,
        required: &str,
        too_long: &str,
        max: usize,
    ) -> Option<String> {
        if trim_form(value).is_empty() {
            return Some(required.to_string());
        }
        self.check_length(value, too_long, max)
    }

    fn check_length(&self, value: &str, too_long: &str, max: usize) -> Option<String> {
        (form_length(value) > max).then(|| self.messages.too_long(too_long, max))
    }
}
