//! Business logic service layer

mod account_store;
mod account_validator;

pub use account_store::{AccountStore, StoreEvent, SubscriptionId};
pub use account_validator::AccountValidator;
