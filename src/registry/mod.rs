//! Domain registry: immutable reference data for persona generation.
//!
//! All reference data (archetypes, communication styles, processes, the
//! affect model, memory policy, capability loop, development ladder, safety
//! policy and host profiles) ships as YAML embedded in the binary.  It is
//! parsed into typed records and validated once, on first use, and then
//! shared read-only for the lifetime of the process.
//!
//! # Load pipeline
//!
//! ```text
//! data/*.yaml ─ include_str! ─► RegistrySources
//!   ↓  serde_yaml (closed enums reject unknown layer/tier/pattern tags)
//! Registry (typed records)
//!   ↓  validate(): numeric ranges, tier counts, ladder contiguity, fallbacks
//! &'static Registry (OnceLock)
//! ```
//!
//! Nothing in this module hands out `&mut` access to a loaded registry.
//! Callers that need to change a record (trait overrides) clone it first.

pub mod affect;
pub mod archetype;
pub mod cycle;
pub mod development;
pub mod error;
pub mod host;
pub mod memory;
pub mod process;
pub mod safety;
pub mod style;

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;

pub use affect::{AffectModel, AppraisalCheck, ConstructionPolicy, DriveDef, DRIVE_NAMES};
pub use archetype::{Archetype, BigFive, FACET_NAMES, SUPPLEMENTARY_NAMES, TEMPERAMENT_NAMES};
pub use cycle::{DurationClass, LoopPhase, Phase};
pub use development::{DevelopmentStage, InteractionRange};
pub use error::RegistryError;
pub use host::{HostProfile, RenderPattern, TokenBudget};
pub use memory::{MemoryPolicy, MemoryStore};
pub use process::{Layer, ProcessDef, ProcessVariants, Relation, RelationKind, Tier};
pub use safety::{ContextRule, DegradationLevel, EthicalFramework, SafetyPolicy, SafetyRule};
pub use style::{CommunicationStyle, PhraseFunction, PATTERN_NAMES};

/// Archetype used when the requested key is absent or unknown.
pub const FALLBACK_ARCHETYPE: &str = "custom";
/// Communication style used when the requested key is absent or unknown.
pub const DEFAULT_STYLE: &str = "balanced";
/// Host profile used when the requested key is unknown.
pub const FALLBACK_HOST: &str = "generic";

/// Processes tagged with each tier.  Cumulative: 8 / 12 / 16.
const TIER_COUNTS: [(Tier, usize); 3] = [(Tier::Essential, 8), (Tier::Full, 4), (Tier::Maximum, 4)];

// ============================================================================
// Sources
// ============================================================================

/// Raw YAML text for each registry table.
#[derive(Debug, Clone, Copy)]
pub struct RegistrySources<'a> {
    pub archetypes: &'a str,
    pub styles: &'a str,
    pub processes: &'a str,
    pub affect: &'a str,
    pub memory: &'a str,
    pub cycle: &'a str,
    pub development: &'a str,
    pub safety: &'a str,
    pub hosts: &'a str,
}

impl RegistrySources<'static> {
    /// The data compiled into the crate.
    pub const EMBEDDED: RegistrySources<'static> = RegistrySources {
        archetypes: include_str!("data/archetypes.yaml"),
        styles: include_str!("data/styles.yaml"),
        processes: include_str!("data/processes.yaml"),
        affect: include_str!("data/affect.yaml"),
        memory: include_str!("data/memory.yaml"),
        cycle: include_str!("data/cycle.yaml"),
        development: include_str!("data/development.yaml"),
        safety: include_str!("data/safety.yaml"),
        hosts: include_str!("data/hosts.yaml"),
    };
}

fn parse<T: DeserializeOwned>(source_name: &'static str, text: &str) -> Result<T, RegistryError> {
    serde_yaml::from_str(text).map_err(|e| RegistryError::Parse {
        source_name,
        message: e.to_string(),
    })
}

/// Fail unless every value lies in `[0, 1]`.
pub(crate) fn check_unit(label: &str, values: &[f32]) -> Result<(), RegistryError> {
    for (i, &v) in values.iter().enumerate() {
        if !(0.0..=1.0).contains(&v) {
            return Err(RegistryError::Validation(format!(
                "{}[{}] = {} is outside 0.0..1.0",
                label, i, v
            )));
        }
    }
    Ok(())
}

// ============================================================================
// Registry
// ============================================================================

/// The loaded, validated reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    archetypes: Vec<Archetype>,
    styles: Vec<CommunicationStyle>,
    processes: Vec<ProcessDef>,
    affect: AffectModel,
    memory: MemoryPolicy,
    cycle: Vec<LoopPhase>,
    stages: Vec<DevelopmentStage>,
    safety: SafetyPolicy,
    hosts: Vec<HostProfile>,
}

static BUILTIN: OnceLock<Result<Registry, RegistryError>> = OnceLock::new();

impl Registry {
    /// The process-wide registry built from the embedded data.
    ///
    /// Parsed and validated on first call; later calls return the cached
    /// result (including a cached failure).
    pub fn builtin() -> Result<&'static Registry, RegistryError> {
        BUILTIN
            .get_or_init(|| {
                let loaded = Registry::from_sources(&RegistrySources::EMBEDDED);
                match &loaded {
                    Ok(reg) => log::debug!(
                        "Loaded registry: {} archetypes, {} styles, {} processes, {} hosts",
                        reg.archetypes.len(),
                        reg.styles.len(),
                        reg.processes.len(),
                        reg.hosts.len()
                    ),
                    Err(e) => log::error!("Embedded registry failed to load: {}", e),
                }
                loaded
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Parse and validate a registry from YAML sources.
    pub fn from_sources(sources: &RegistrySources<'_>) -> Result<Self, RegistryError> {
        let registry = Self {
            archetypes: parse("archetypes", sources.archetypes)?,
            styles: parse("styles", sources.styles)?,
            processes: parse("processes", sources.processes)?,
            affect: parse("affect", sources.affect)?,
            memory: parse("memory", sources.memory)?,
            cycle: parse("cycle", sources.cycle)?,
            stages: parse("development", sources.development)?,
            safety: parse("safety", sources.safety)?,
            hosts: parse("hosts", sources.hosts)?,
        };
        registry.validate()?;
        Ok(registry)
    }

    fn validate(&self) -> Result<(), RegistryError> {
        unique_ids("archetype", self.archetypes.iter().map(|a| a.id.as_str()))?;
        unique_ids("style", self.styles.iter().map(|s| s.id.as_str()))?;
        unique_ids("process", self.processes.iter().map(|p| p.id.as_str()))?;
        unique_ids("host", self.hosts.iter().map(|h| h.id.as_str()))?;

        for archetype in &self.archetypes {
            archetype.validate()?;
        }
        for style in &self.styles {
            style.validate()?;
        }
        for host in &self.hosts {
            host.validate()?;
        }
        self.validate_processes()?;
        self.affect.validate()?;
        self.memory.validate()?;
        cycle::validate(&self.cycle)?;
        development::validate(&self.stages)?;
        self.safety.validate()?;

        if self.archetype(FALLBACK_ARCHETYPE).is_none() {
            return Err(RegistryError::validation(format!(
                "fallback archetype '{}' is missing",
                FALLBACK_ARCHETYPE
            )));
        }
        if self.style(DEFAULT_STYLE).is_none() {
            return Err(RegistryError::validation(format!(
                "default style '{}' is missing",
                DEFAULT_STYLE
            )));
        }
        if self.host(FALLBACK_HOST).is_none() {
            return Err(RegistryError::validation(format!(
                "fallback host '{}' is missing",
                FALLBACK_HOST
            )));
        }
        Ok(())
    }

    fn validate_processes(&self) -> Result<(), RegistryError> {
        let ids: HashSet<&str> = self.processes.iter().map(|p| p.id.as_str()).collect();
        let mut last_layer = Layer::Foundation;
        for process in &self.processes {
            process.validate()?;
            if process.layer < last_layer {
                return Err(RegistryError::validation(format!(
                    "process '{}' ({:?}) is declared after a {:?} process",
                    process.id, process.layer, last_layer
                )));
            }
            last_layer = process.layer;
            for relation in &process.relations {
                if relation.target == process.id || !ids.contains(relation.target.as_str()) {
                    return Err(RegistryError::validation(format!(
                        "process '{}' relates to unknown target '{}'",
                        process.id, relation.target
                    )));
                }
            }
        }
        for (tier, expected) in TIER_COUNTS {
            let found = self.processes.iter().filter(|p| p.tier == tier).count();
            if found != expected {
                return Err(RegistryError::validation(format!(
                    "expected {} {} processes, found {}",
                    expected, tier, found
                )));
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookups (trimmed, ASCII case-insensitive)
    // -----------------------------------------------------------------------

    pub fn archetype(&self, key: &str) -> Option<&Archetype> {
        let key = key.trim();
        self.archetypes.iter().find(|a| a.id.eq_ignore_ascii_case(key))
    }

    pub fn style(&self, key: &str) -> Option<&CommunicationStyle> {
        let key = key.trim();
        self.styles.iter().find(|s| s.id.eq_ignore_ascii_case(key))
    }

    pub fn host(&self, key: &str) -> Option<&HostProfile> {
        let key = key.trim();
        self.hosts.iter().find(|h| h.id.eq_ignore_ascii_case(key))
    }

    pub fn process(&self, id: &str) -> Option<&ProcessDef> {
        self.processes.iter().find(|p| p.id == id)
    }

    // -----------------------------------------------------------------------
    // Tables
    // -----------------------------------------------------------------------

    pub fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    pub fn styles(&self) -> &[CommunicationStyle] {
        &self.styles
    }

    pub fn processes(&self) -> &[ProcessDef] {
        &self.processes
    }

    pub fn affect(&self) -> &AffectModel {
        &self.affect
    }

    pub fn memory(&self) -> &MemoryPolicy {
        &self.memory
    }

    pub fn cycle(&self) -> &[LoopPhase] {
        &self.cycle
    }

    pub fn stages(&self) -> &[DevelopmentStage] {
        &self.stages
    }

    pub fn safety(&self) -> &SafetyPolicy {
        &self.safety
    }

    pub fn hosts(&self) -> &[HostProfile] {
        &self.hosts
    }
}

fn unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.to_ascii_lowercase()) {
            return Err(RegistryError::validation(format!(
                "duplicate {} id '{}'",
                kind, id
            )));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
