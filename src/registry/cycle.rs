//! The ten-phase capability loop every turn runs through.

use serde::{Deserialize, Serialize};

use super::error::RegistryError;

/// Loop phases in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Perceive,
    Feel,
    Attend,
    Remember,
    Think,
    Imagine,
    Evaluate,
    Decide,
    Express,
    Consolidate,
}

impl Phase {
    pub const ALL: [Phase; 10] = [
        Self::Perceive,
        Self::Feel,
        Self::Attend,
        Self::Remember,
        Self::Think,
        Self::Imagine,
        Self::Evaluate,
        Self::Decide,
        Self::Express,
        Self::Consolidate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Perceive => "Perceive",
            Self::Feel => "Feel",
            Self::Attend => "Attend",
            Self::Remember => "Remember",
            Self::Think => "Think",
            Self::Imagine => "Imagine",
            Self::Evaluate => "Evaluate",
            Self::Decide => "Decide",
            Self::Express => "Express",
            Self::Consolidate => "Consolidate",
        }
    }
}

/// Rough time budget a phase gets within one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationClass {
    Instant,
    Brief,
    Sustained,
    Background,
}

impl DurationClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Brief => "brief",
            Self::Sustained => "sustained",
            Self::Background => "background",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopPhase {
    pub phase: Phase,
    pub duration: DurationClass,
    pub directive: String,
}

/// Phases must be exactly `Phase::ALL`, in order.
pub(crate) fn validate(phases: &[LoopPhase]) -> Result<(), RegistryError> {
    let order: Vec<Phase> = phases.iter().map(|p| p.phase).collect();
    if order != Phase::ALL {
        return Err(RegistryError::validation(format!(
            "capability loop must list the ten phases in order, found {:?}",
            order
        )));
    }
    Ok(())
}
