//! Host profiles: one entry per supported target model family.
//!
//! A host profile controls presentation only.  Its `pattern` selects the
//! rendering strategy; everything else feeds the host-notes section and the
//! orientation guide.

use serde::{Deserialize, Serialize};

use super::error::RegistryError;

/// Rendering pattern a host responds to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPattern {
    /// Terse cue phrases; the host fills in the rest.
    CompactTrigger,
    /// Tagged blocks with worked examples.
    TaggedExamples,
    /// Numbered steps with explicit guard text.
    Stepwise,
    /// Fully spelled out, key instructions repeated.
    Explicit,
    /// Generic middle ground.
    Balanced,
}

impl RenderPattern {
    pub const ALL: [RenderPattern; 5] = [
        Self::CompactTrigger,
        Self::TaggedExamples,
        Self::Stepwise,
        Self::Explicit,
        Self::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompactTrigger => "compact_trigger",
            Self::TaggedExamples => "tagged_examples",
            Self::Stepwise => "stepwise",
            Self::Explicit => "explicit",
            Self::Balanced => "balanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBudget {
    /// Comfortable size for the full directive.
    pub directive: u32,
    /// Ceiling for the condensed directive.
    pub condensed: u32,
    /// Typical response length to aim for.
    pub response: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostProfile {
    pub id: String,
    pub display_name: String,
    pub pattern: RenderPattern,
    pub prompt_style: String,
    pub strengths: Vec<String>,
    pub tokens: TokenBudget,
    pub context_window: String,
    pub structure_format: String,
    pub voice_guidance: String,
    pub special_instructions: String,
}

impl HostProfile {
    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        if self.tokens.condensed > self.tokens.directive {
            return Err(RegistryError::validation(format!(
                "host '{}' condensed budget exceeds directive budget",
                self.id
            )));
        }
        Ok(())
    }
}
