//! Safety policy: fixed rules, contextual rules and a graded degradation ladder.

use serde::{Deserialize, Serialize};

use super::error::RegistryError;

pub const DEGRADATION_LEVELS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyRule {
    pub id: String,
    pub rule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextRule {
    pub context: String,
    pub rule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalFramework {
    pub name: String,
    pub principle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationLevel {
    pub level: u8,
    pub name: String,
    pub trigger: String,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyPolicy {
    pub non_negotiable: Vec<SafetyRule>,
    pub contextual: Vec<ContextRule>,
    pub frameworks: Vec<EthicalFramework>,
    pub degradation: Vec<DegradationLevel>,
}

impl SafetyPolicy {
    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        if self.non_negotiable.is_empty() {
            return Err(RegistryError::validation("safety policy has no fixed rules"));
        }
        if self.degradation.len() != DEGRADATION_LEVELS {
            return Err(RegistryError::validation(format!(
                "degradation ladder needs {} levels, found {}",
                DEGRADATION_LEVELS,
                self.degradation.len()
            )));
        }
        for (i, level) in self.degradation.iter().enumerate() {
            if level.level as usize != i + 1 {
                return Err(RegistryError::validation(format!(
                    "degradation level '{}' numbered {}, expected {}",
                    level.name,
                    level.level,
                    i + 1
                )));
            }
        }
        Ok(())
    }
}
