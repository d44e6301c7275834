//! Archetypes: named personality baselines.
//!
//! Every archetype carries the same fixed-width vectors so renderers can
//! index them by position:
//!
//! ```text
//! traits        [5]  Big Five (O, C, E, A, N)
//! supplementary [6]  curiosity, warmth, playfulness, assertiveness, introspection, resilience
//! facets        [30] 6 facets per Big Five dimension, in dimension order
//! drives        [7]  primary affect systems (see `affect::DRIVE_NAMES`)
//! temperament   [3]  pleasure, arousal, dominance
//! ```

use serde::{Deserialize, Serialize};

use super::error::RegistryError;
use super::check_unit;

// ============================================================================
// Big Five dimensions
// ============================================================================

/// The five trait dimensions a caller may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BigFive {
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "C")]
    Conscientiousness,
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "N")]
    Neuroticism,
}

impl BigFive {
    /// All five dimensions in vector order.
    pub const ALL: [BigFive; 5] = [
        Self::Openness,
        Self::Conscientiousness,
        Self::Extraversion,
        Self::Agreeableness,
        Self::Neuroticism,
    ];

    /// Single-letter key used in configuration overrides.
    pub fn letter(&self) -> char {
        match self {
            Self::Openness => 'O',
            Self::Conscientiousness => 'C',
            Self::Extraversion => 'E',
            Self::Agreeableness => 'A',
            Self::Neuroticism => 'N',
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        TRAIT_NAMES[*self as usize]
    }

    /// Short gloss for the low and high poles.
    pub fn poles(&self) -> (&'static str, &'static str) {
        match self {
            Self::Openness => ("conventional, concrete", "curious, imaginative"),
            Self::Conscientiousness => ("spontaneous, flexible", "organized, deliberate"),
            Self::Extraversion => ("reserved, inward", "outgoing, energetic"),
            Self::Agreeableness => ("skeptical, challenging", "cooperative, trusting"),
            Self::Neuroticism => ("steady, unflappable", "sensitive, reactive"),
        }
    }
}

/// Display names for the Big Five, indexed by `BigFive as usize`.
pub const TRAIT_NAMES: [&str; 5] = [
    "Openness",
    "Conscientiousness",
    "Extraversion",
    "Agreeableness",
    "Neuroticism",
];

/// Supplementary trait names.
pub const SUPPLEMENTARY_NAMES: [&str; 6] = [
    "curiosity",
    "warmth",
    "playfulness",
    "assertiveness",
    "introspection",
    "resilience",
];

/// The 30 facets, six per Big Five dimension.
pub const FACET_NAMES: [&str; 30] = [
    // Openness
    "fantasy",
    "aesthetics",
    "feelings",
    "actions",
    "ideas",
    "values",
    // Conscientiousness
    "competence",
    "order",
    "dutifulness",
    "achievement striving",
    "self-discipline",
    "deliberation",
    // Extraversion
    "warmth",
    "gregariousness",
    "assertiveness",
    "activity",
    "excitement seeking",
    "positive emotions",
    // Agreeableness
    "trust",
    "straightforwardness",
    "altruism",
    "compliance",
    "modesty",
    "tender-mindedness",
    // Neuroticism
    "anxiety",
    "angry hostility",
    "depression",
    "self-consciousness",
    "impulsiveness",
    "vulnerability",
];

/// Temperament axes.
pub const TEMPERAMENT_NAMES: [&str; 3] = ["pleasure", "arousal", "dominance"];

// ============================================================================
// Archetype record
// ============================================================================

/// A named bundle of trait vectors and descriptive text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub id: String,
    pub title: String,
    pub essence: String,
    pub traits: [f32; 5],
    pub supplementary: [f32; 6],
    pub facets: [f32; 30],
    pub drives: [f32; 7],
    pub temperament: [f32; 3],
    pub values: Vec<String>,
    pub beliefs: Vec<String>,
    pub shadows: Vec<String>,
    pub growth_edges: Vec<String>,
    pub linguistic_style: String,
    pub existential_theme: String,
}

impl Archetype {
    /// Value of one Big Five dimension.
    pub fn trait_value(&self, dim: BigFive) -> f32 {
        self.traits[dim as usize]
    }

    /// Overwrite one Big Five dimension.
    ///
    /// Only ever called on a per-call working copy; registry entries are
    /// reached through shared references and cannot be mutated.
    pub fn set_trait(&mut self, dim: BigFive, value: f32) {
        self.traits[dim as usize] = value;
    }

    /// The six facets belonging to a dimension.
    pub fn facets_for(&self, dim: BigFive) -> &[f32] {
        let start = dim as usize * 6;
        &self.facets[start..start + 6]
    }

    /// Facet names paired with their values for a dimension.
    pub fn named_facets(&self, dim: BigFive) -> Vec<(&'static str, f32)> {
        let start = dim as usize * 6;
        FACET_NAMES[start..start + 6]
            .iter()
            .copied()
            .zip(self.facets_for(dim).iter().copied())
            .collect()
    }

    pub(crate) fn validate(&self) -> Result<(), RegistryError> {
        if self.id.trim().is_empty() {
            return Err(RegistryError::validation("archetype with empty id"));
        }
        let label = |field: &str| format!("archetype '{}' {}", self.id, field);
        check_unit(&label("traits"), &self.traits)?;
        check_unit(&label("supplementary"), &self.supplementary)?;
        check_unit(&label("facets"), &self.facets)?;
        check_unit(&label("drives"), &self.drives)?;
        check_unit(&label("temperament"), &self.temperament)?;
        if self.values.is_empty() {
            return Err(RegistryError::validation(label("has no values")));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Archetype {
        Archetype {
            id: "sample".into(),
            title: "Sample".into(),
            essence: "A test record.".into(),
            traits: [0.9, 0.5, 0.4, 0.6, 0.2],
            supplementary: [0.5; 6],
            facets: [0.5; 30],
            drives: [0.5; 7],
            temperament: [0.5; 3],
            values: vec!["honesty".into()],
            beliefs: vec![],
            shadows: vec![],
            growth_edges: vec![],
            linguistic_style: "plain".into(),
            existential_theme: "none".into(),
        }
    }

    #[test]
    fn test_trait_accessors_follow_vector_order() {
        let mut a = sample();
        assert_eq!(a.trait_value(BigFive::Openness), 0.9);
        assert_eq!(a.trait_value(BigFive::Neuroticism), 0.2);
        a.set_trait(BigFive::Extraversion, 0.1);
        assert_eq!(a.traits[2], 0.1);
    }

    #[test]
    fn test_facets_for_slices_six() {
        let mut a = sample();
        a.facets[6] = 0.99;
        let c = a.facets_for(BigFive::Conscientiousness);
        assert_eq!(c.len(), 6);
        assert_eq!(c[0], 0.99);
        let named = a.named_facets(BigFive::Conscientiousness);
        assert_eq!(named[0], ("competence", 0.99));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut a = sample();
        a.traits[0] = 1.2;
        assert!(matches!(a.validate(), Err(RegistryError::Validation(_))));
        let mut b = sample();
        b.facets[29] = -0.1;
        assert!(b.validate().is_err());
    }

    #[test]
    fn test_big_five_letters_roundtrip_serde() {
        for dim in BigFive::ALL {
            let yaml = format!("\"{}\"", dim.letter());
            let parsed: BigFive = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(parsed, dim);
        }
    }
}
