//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// Field validation never produces one of these: input-shape problems are
/// reported through [`ValidationErrors`](crate::types::ValidationErrors).
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration could not be read or written
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Unsupported file version (when loading persisted accounts)
    #[error("Unsupported file version: {0}")]
    UnsupportedFileVersion(u32),
}

impl CoreError {
    /// Whether it is expected behavior (caller passed an unknown id, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AccountNotFound(_) | Self::UnsupportedFileVersion(_) => true,
            Self::StorageError(_) | Self::SerializationError(_) | Self::ConfigError(_) => false,
        }
    }

    /// Log this error at the level chosen by [`is_expected`](Self::is_expected).
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
