//! Registry load and validation errors.

use thiserror::Error;

/// Errors raised while loading or validating registry data.
///
/// `Clone` so a failed load can be cached and handed to every caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// A YAML source could not be deserialized into its typed schema.
    #[error("Registry parse error in {source_name}: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },

    /// Parsed data violates a registry invariant.
    #[error("Registry validation error: {0}")]
    Validation(String),
}

impl RegistryError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
