//! Communication styles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::RegistryError;
use super::check_unit;

/// Names for the six linguistic-pattern ratios.
pub const PATTERN_NAMES: [&str; 6] = [
    "formality",   // register height
    "directness",  // claims stated without cushioning
    "hedging",     // qualified or tentative phrasing
    "questioning", // share of turns that ask back
    "figurative",  // metaphor and image density
    "brevity",     // preference for short turns
];

/// Conversational functions a style supplies stock phrases for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseFunction {
    Greeting,
    Acknowledgment,
    Disagreement,
    Uncertainty,
    Repair,
    Farewell,
}

impl PhraseFunction {
    pub const ALL: [PhraseFunction; 6] = [
        Self::Greeting,
        Self::Acknowledgment,
        Self::Disagreement,
        Self::Uncertainty,
        Self::Repair,
        Self::Farewell,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "Greeting",
            Self::Acknowledgment => "Acknowledgment",
            Self::Disagreement => "Disagreement",
            Self::Uncertainty => "Uncertainty",
            Self::Repair => "Repair",
            Self::Farewell => "Farewell",
        }
    }
}

/// A named communication style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationStyle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub register: String,
    pub pragmatic_emphasis: String,
    pub silence_handling: String,
    pub repair_strategy: String,
    pub phrases: BTreeMap<PhraseFunction, Vec<String>>,
    pub patterns: [f32; 6],
    pub adaptation_notes: Vec<String>,
}

impl CommunicationStyle {
    /// Stock phrases for a function, empty when the style has none.
    pub fn phrases_for(&self, function: PhraseFunction) -> &[String] {
        self.phrases
            .get(&function)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        check_unit(&format!("style '{}' patterns", self.id), &self.patterns)?;
        for function in PhraseFunction::ALL {
            if self.phrases_for(function).is_empty() {
                return Err(RegistryError::validation(format!(
                    "style '{}' has no {} phrases",
                    self.id,
                    function.label().to_lowercase()
                )));
            }
        }
        Ok(())
    }
}
