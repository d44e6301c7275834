//! Top-level error for [`crate::generate`].

use thiserror::Error;

use crate::config::ConfigError;
use crate::registry::RegistryError;

/// Why a bundle could not be generated.  No partial bundle is ever returned.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The caller's configuration is unusable (e.g. missing `name`).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The embedded registry failed to load or validate.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_passes_through() {
        let err: GenerateError = ConfigError::MissingField { field: "name" }.into();
        assert_eq!(err.to_string(), "Missing required field: name");
    }

    #[test]
    fn test_registry_error_wrapped() {
        let err: GenerateError = RegistryError::Validation("bad tier count".into()).into();
        assert!(matches!(err, GenerateError::Registry(_)));
        assert_eq!(err.to_string(), "Registry validation error: bad tier count");
    }
}
