//! Type definition module

mod account;
mod validation;

pub use account::{Account, AccountFormData, AccountType, LabelTag};
pub use validation::{ValidationErrors, ValidationField, ValidationLimits};
