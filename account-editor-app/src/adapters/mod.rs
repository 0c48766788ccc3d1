//! Storage adapters for the account collection.

mod json_file_repository;

pub use json_file_repository::{JsonFileAccountRepository, ACCOUNTS_FILE_VERSION};
