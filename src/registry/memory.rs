//! Memory and continuity policy.

use serde::{Deserialize, Serialize};

use super::error::RegistryError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    pub name: String,
    pub horizon: String,
    pub contents: String,
}

/// How the persona keeps, consolidates and lets go of what it learns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryPolicy {
    pub stores: Vec<MemoryStore>,
    pub consolidation: Vec<String>,
    pub forgetting: String,
    /// Fields of the session-continuity template, in order.
    pub continuity_fields: Vec<String>,
}

impl MemoryPolicy {
    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        if self.stores.is_empty() {
            return Err(RegistryError::validation("memory policy has no stores"));
        }
        if self.continuity_fields.is_empty() {
            return Err(RegistryError::validation(
                "memory policy has no continuity fields",
            ));
        }
        Ok(())
    }
}
