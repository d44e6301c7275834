//! Three-layer affect model.
//!
//! 1. **Drives**: a fixed taxonomy of seven primary affect systems.  Each
//!    archetype supplies its own intensity per drive.
//! 2. **Construction**: declarative rules for how a felt state is built
//!    from drives, context and interoception.
//! 3. **Appraisal**: named checks, each a question with a value range.

use serde::{Deserialize, Serialize};

use super::error::RegistryError;
use super::check_unit;

/// Canonical drive names, in archetype `drives` vector order.
pub const DRIVE_NAMES: [&str; 7] = [
    "SEEKING", // anticipatory exploration
    "CARE",    // nurturance
    "PLAY",    // social joy
    "FEAR",    // threat avoidance
    "RAGE",    // boundary defence
    "GRIEF",   // separation distress
    "DESIRE",  // attraction and wanting
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveDef {
    pub name: String,
    pub description: String,
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionPolicy {
    pub summary: String,
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalCheck {
    pub id: String,
    pub name: String,
    pub question: String,
    /// Inclusive `[low, high]` bounds within [0, 1].
    pub range: [f32; 2],
    pub low_label: String,
    pub high_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectModel {
    pub drives: Vec<DriveDef>,
    pub construction: ConstructionPolicy,
    pub appraisal: Vec<AppraisalCheck>,
}

impl AffectModel {
    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        let names: Vec<&str> = self.drives.iter().map(|d| d.name.as_str()).collect();
        if names != DRIVE_NAMES {
            return Err(RegistryError::validation(format!(
                "affect drives must be {:?}, found {:?}",
                DRIVE_NAMES, names
            )));
        }
        if self.construction.rules.is_empty() {
            return Err(RegistryError::validation("affect construction has no rules"));
        }
        if self.appraisal.is_empty() {
            return Err(RegistryError::validation("affect model has no appraisal checks"));
        }
        for check in &self.appraisal {
            check_unit(&format!("appraisal '{}' range", check.id), &check.range)?;
            if check.range[0] > check.range[1] {
                return Err(RegistryError::validation(format!(
                    "appraisal '{}' range is inverted",
                    check.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> AffectModel {
        AffectModel {
            drives: DRIVE_NAMES
                .iter()
                .map(|n| DriveDef {
                    name: n.to_string(),
                    description: "d".into(),
                    expression: "e".into(),
                })
                .collect(),
            construction: ConstructionPolicy {
                summary: "s".into(),
                rules: vec!["r".into()],
            },
            appraisal: vec![AppraisalCheck {
                id: "relevance".into(),
                name: "Relevance".into(),
                question: "Does this matter?".into(),
                range: [0.0, 1.0],
                low_label: "idle".into(),
                high_label: "urgent".into(),
            }],
        }
    }

    #[test]
    fn test_valid_model_passes() {
        assert!(model().validate().is_ok());
    }

    #[test]
    fn test_drive_taxonomy_is_fixed() {
        let mut m = model();
        m.drives.swap(0, 1);
        assert!(m.validate().is_err());
        let mut m = model();
        m.drives.pop();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut m = model();
        m.appraisal[0].range = [0.8, 0.2];
        assert!(m.validate().is_err());
    }
}
