//! Caller configuration: the input to [`crate::generate`].
//!
//! # Example YAML
//!
//! ```yaml
//! model: claude
//! name: Lumen
//! depth: essential
//! personality:
//!   archetype: explorer
//!   communicationStyle: warm
//!   traits: { O: 0.8, N: 0.2 }
//!   coreValues: [honesty, wonder]
//! ```
//!
//! Every field is optional at the schema level so that absent `model` or
//! `name` surface as [`ConfigError::MissingField`] from the resolver rather
//! than as a deserialization error.

pub mod resolver;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::BigFive;

pub use resolver::{resolve, KeyOutcome, KeyResolution, Resolution, ResolvedContext};

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while reading or resolving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field is absent or blank.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The registry lacks the entry a fallback points at.
    #[error("Registry has no fallback {kind} '{key}'")]
    MissingFallback {
        kind: &'static str,
        key: &'static str,
    },

    /// JSON parsing failed.
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("Config YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Reading a config file failed.
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Schema
// ============================================================================

/// Per-dimension Big Five overrides, keyed by single letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitOverrides {
    #[serde(rename = "O", default, skip_serializing_if = "Option::is_none")]
    pub openness: Option<f32>,
    #[serde(rename = "C", default, skip_serializing_if = "Option::is_none")]
    pub conscientiousness: Option<f32>,
    #[serde(rename = "E", default, skip_serializing_if = "Option::is_none")]
    pub extraversion: Option<f32>,
    #[serde(rename = "A", default, skip_serializing_if = "Option::is_none")]
    pub agreeableness: Option<f32>,
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    pub neuroticism: Option<f32>,
}

impl TraitOverrides {
    /// The overrides that are set, in Big Five order.
    pub fn entries(&self) -> Vec<(BigFive, f32)> {
        [
            (BigFive::Openness, self.openness),
            (BigFive::Conscientiousness, self.conscientiousness),
            (BigFive::Extraversion, self.extraversion),
            (BigFive::Agreeableness, self.agreeableness),
            (BigFive::Neuroticism, self.neuroticism),
        ]
        .into_iter()
        .filter_map(|(dim, value)| value.map(|v| (dim, v)))
        .collect()
    }

    /// Set one dimension.
    pub fn with(mut self, dim: BigFive, value: f32) -> Self {
        let slot = match dim {
            BigFive::Openness => &mut self.openness,
            BigFive::Conscientiousness => &mut self.conscientiousness,
            BigFive::Extraversion => &mut self.extraversion,
            BigFive::Agreeableness => &mut self.agreeableness,
            BigFive::Neuroticism => &mut self.neuroticism,
        };
        *slot = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Optional personality block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<TraitOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_values: Option<Vec<String>>,
}

/// Top-level generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConfig {
    /// Host profile key; unknown keys fall back to the generic host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Persona display name.  Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `essential`, `full` or `maximum`; anything else means `full`.
    #[serde(
        default,
        deserialize_with = "lenient_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub depth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<PersonalityConfig>,
}

/// Read a lookup key of any scalar or compound type as text, so that a
/// non-string value reaches the resolver as an unknown key instead of
/// failing deserialization.
fn lenient_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(key)) => Some(key),
        Some(other) => Some(other.to_string()),
    })
}

impl GenerateConfig {
    /// Config with the two required fields set.
    pub fn new(model: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, depth: impl Into<String>) -> Self {
        self.depth = Some(depth.into());
        self
    }

    pub fn with_personality(mut self, personality: PersonalityConfig) -> Self {
        self.personality = Some(personality);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from disk.  `.json` files are read as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }
}

impl PersonalityConfig {
    pub fn archetype(key: impl Into<String>) -> Self {
        Self {
            archetype: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, key: impl Into<String>) -> Self {
        self.communication_style = Some(key.into());
        self
    }

    pub fn with_traits(mut self, traits: TraitOverrides) -> Self {
        self.traits = Some(traits);
        self
    }

    pub fn with_core_values(mut self, values: Vec<String>) -> Self {
        self.core_values = Some(values);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
