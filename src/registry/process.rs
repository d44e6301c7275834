//! Capability units ("processes"), their layers and inclusion tiers.
//!
//! Tiers nest strictly: every process tagged `essential` is also part of
//! `full` and `maximum`, and every `full` process is part of `maximum`.
//!
//! ```text
//! foundation ─┐
//! cognitive  ─┼─ declared layer order, preserved by the selector
//! relational ─┤
//! generative ─┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::RegistryError;

// ============================================================================
// Layer
// ============================================================================

/// Thematic grouping of processes.  Declaration order is render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Foundation,
    Cognitive,
    Relational,
    Generative,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Self::Foundation,
        Self::Cognitive,
        Self::Relational,
        Self::Generative,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Cognitive => "Cognitive",
            Self::Relational => "Relational",
            Self::Generative => "Generative",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Foundation => "regulation, salience and the present moment",
            Self::Cognitive => "memory, reflection and reasoning",
            Self::Relational => "modelling and tending the other person",
            Self::Generative => "novelty, play and a continuing story",
        }
    }
}

// ============================================================================
// Tier
// ============================================================================

/// Inclusion depth.  Ordered so that `a <= b` means "a is included in b".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Essential,
    Full,
    Maximum,
}

impl Default for Tier {
    fn default() -> Self {
        Self::Full
    }
}

impl Tier {
    pub const ALL: [Tier; 3] = [Self::Essential, Self::Full, Self::Maximum];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Full => "full",
            Self::Maximum => "maximum",
        }
    }

    /// Parse a tier key, trimmed and case-insensitive.
    pub fn parse(key: &str) -> Option<Tier> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(key))
    }

    /// Whether a process tagged `member` is active at this depth.
    pub fn includes(&self, member: Tier) -> bool {
        member <= *self
    }

    /// One-line summary used in orientation text.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Essential => "core regulation, memory and attunement only",
            Self::Full => "adds prediction, reflection, repair and incubation",
            Self::Maximum => "every process, including counterfactuals, attachment, narrative and play",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Process definition
// ============================================================================

/// How one process relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Feeds,
    Modulates,
    Inhibits,
    DependsOn,
}

impl RelationKind {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Feeds => "feeds",
            Self::Modulates => "modulates",
            Self::Inhibits => "inhibits",
            Self::DependsOn => "depends on",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub target: String,
    pub kind: RelationKind,
}

/// Presentation inputs a host strategy picks from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessVariants {
    /// Compact cue phrase.
    pub trigger: String,
    /// A worked example of the process in conversation.
    pub example: String,
    /// Ordered steps for stepwise hosts.
    pub steps: Vec<String>,
    /// What the process must never do.
    pub guard: String,
}

/// One capability unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDef {
    pub id: String,
    pub name: String,
    pub layer: Layer,
    pub tier: Tier,
    pub summary: String,
    pub rationale: String,
    pub algorithm: Vec<String>,
    pub directive: String,
    #[serde(default)]
    pub relations: Vec<Relation>,
    pub variants: ProcessVariants,
}

impl ProcessDef {
    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        if self.id.trim().is_empty() || self.name.trim().is_empty() {
            return Err(RegistryError::validation("process with empty id or name"));
        }
        if self.algorithm.is_empty() {
            return Err(RegistryError::validation(format!(
                "process '{}' has no algorithm sketch",
                self.id
            )));
        }
        if self.variants.steps.is_empty() {
            return Err(RegistryError::validation(format!(
                "process '{}' has no stepwise variant",
                self.id
            )));
        }
        Ok(())
    }
}
