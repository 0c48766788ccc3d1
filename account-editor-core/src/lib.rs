//! Account Editor Core Library
//!
//! Provides the logic behind the credentials/account editor, including:
//! - Field and form validation (`AccountValidator`)
//! - Conversion between free-text labels and tag lists
//! - The in-memory account collection (`AccountStore`)
//!
//! The UI and persistence layers are abstracted away: storage goes through the
//! `AccountRepository` trait, and callers observe changes by subscribing to the store.

pub mod error;
pub mod i18n;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{AccountStore, AccountValidator, StoreEvent, SubscriptionId};
pub use traits::{AccountRepository, InMemoryAccountRepository};
pub use utils::labels::{labels_to_text, parse_labels};
