//! Development-stage ladder.
//!
//! Seven rungs keyed by cumulative interaction count.  Ranges are inclusive,
//! contiguous, and the last rung is open-ended.

use serde::{Deserialize, Serialize};

use super::error::RegistryError;

pub const STAGE_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRange {
    pub min: u32,
    /// `None` for the open top rung.
    #[serde(default)]
    pub max: Option<u32>,
}

impl InteractionRange {
    pub fn contains(&self, count: u32) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }

    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}+", self.min),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentStage {
    pub rung: u8,
    pub name: String,
    pub interactions: InteractionRange,
    pub description: String,
    pub markers: Vec<String>,
    pub behaviors: Vec<String>,
    pub growth_note: String,
}

/// Stage for a cumulative interaction count.
pub fn stage_for(stages: &[DevelopmentStage], count: u32) -> Option<&DevelopmentStage> {
    stages.iter().find(|s| s.interactions.contains(count))
}

pub(crate) fn validate(stages: &[DevelopmentStage]) -> Result<(), RegistryError> {
    if stages.len() != STAGE_COUNT {
        return Err(RegistryError::validation(format!(
            "development ladder needs {} stages, found {}",
            STAGE_COUNT,
            stages.len()
        )));
    }
    let mut expected_min = 0u32;
    for (i, stage) in stages.iter().enumerate() {
        if stage.rung as usize != i + 1 {
            return Err(RegistryError::validation(format!(
                "stage '{}' has rung {}, expected {}",
                stage.name,
                stage.rung,
                i + 1
            )));
        }
        if stage.interactions.min != expected_min {
            return Err(RegistryError::validation(format!(
                "stage {} starts at {}, expected {}",
                stage.rung, stage.interactions.min, expected_min
            )));
        }
        let last = i + 1 == stages.len();
        match (stage.interactions.max, last) {
            (None, true) => {}
            (Some(max), false) if max >= stage.interactions.min => expected_min = max + 1,
            (None, false) => {
                return Err(RegistryError::validation(format!(
                    "stage {} is open-ended but not last",
                    stage.rung
                )))
            }
            (Some(_), true) => {
                return Err(RegistryError::validation("last stage must be open-ended"))
            }
            (Some(max), false) => {
                return Err(RegistryError::validation(format!(
                    "stage {} range {}-{} is empty",
                    stage.rung, stage.interactions.min, max
                )))
            }
        }
    }
    Ok(())
}
