//! Configuration resolver: maps a [`GenerateConfig`] onto registry entries.
//!
//! ```text
//! GenerateConfig
//!   ├─ name / model ── blank? ──► ConfigError::MissingField
//!   ├─ model ───────── host lookup ───── unknown ─► "generic"
//!   ├─ depth ───────── Tier::parse ───── unknown ─► full
//!   └─ personality
//!        ├─ archetype ─ lookup ───────── unknown ─► "custom"
//!        ├─ communicationStyle ─ lookup ─ unknown ─► "balanced"
//!        ├─ traits ──── copy-on-write overrides (clamped to [0, 1])
//!        └─ coreValues ─ replaces the working copy's values
//! ```
//!
//! The archetype is held as a `Cow`: it borrows the registry entry until an
//! override is applied, at which point the entry is cloned and only the
//! clone changes.  The registry itself is only ever reachable through `&`.

use std::borrow::Cow;

use crate::registry::{
    Archetype, BigFive, CommunicationStyle, HostProfile, Registry, Tier, DEFAULT_STYLE,
    FALLBACK_ARCHETYPE, FALLBACK_HOST,
};

use super::{ConfigError, GenerateConfig};

// ============================================================================
// Resolution record
// ============================================================================

/// How a requested key was turned into a registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The requested key exists.
    Matched,
    /// No key was requested; the default was used.
    Defaulted,
    /// A key was requested but is unknown; the fallback was used.
    FellBack,
}

/// One key lookup, kept so substitutions are observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResolution {
    pub requested: Option<String>,
    pub resolved: String,
    pub outcome: KeyOutcome,
}

impl KeyResolution {
    fn new(requested: Option<&str>, resolved: &str, outcome: KeyOutcome) -> Self {
        Self {
            requested: requested.map(str::to_string),
            resolved: resolved.to_string(),
            outcome,
        }
    }

    pub fn fell_back(&self) -> bool {
        self.outcome == KeyOutcome::FellBack
    }
}

/// Which key each lookup actually resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub archetype: KeyResolution,
    pub style: KeyResolution,
    pub host: KeyResolution,
    pub tier: KeyResolution,
}

impl Resolution {
    /// Lookups that fell back, in archetype, style, host, tier order.
    pub fn fallbacks(&self) -> Vec<(&'static str, &KeyResolution)> {
        [
            ("archetype", &self.archetype),
            ("communication style", &self.style),
            ("host", &self.host),
            ("depth", &self.tier),
        ]
        .into_iter()
        .filter(|(_, r)| r.fell_back())
        .collect()
    }
}

/// The concrete (archetype, style, host, tier) tuple for one generation call.
#[derive(Debug, Clone)]
pub struct ResolvedContext<'r> {
    /// Persona name, trimmed.
    pub name: String,
    /// Borrowed registry entry, or an owned working copy once overridden.
    pub archetype: Cow<'r, Archetype>,
    pub style: &'r CommunicationStyle,
    pub host: &'r HostProfile,
    pub tier: Tier,
    /// Big Five dimensions changed by the caller.
    pub overridden: Vec<BigFive>,
    /// Whether `coreValues` replaced the archetype's values.
    pub custom_values: bool,
    pub resolution: Resolution,
}

// ============================================================================
// resolve()
// ============================================================================

fn required<'c>(value: &'c Option<String>, field: &'static str) -> Result<&'c str, ConfigError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField { field }),
    }
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Look up `requested` with `find`, substituting `fallback` when absent or unknown.
fn lookup<'r, T>(
    kind: &'static str,
    requested: Option<&str>,
    fallback: &str,
    find: impl Fn(&str) -> Option<&'r T>,
    id_of: impl Fn(&T) -> &str,
) -> Option<(&'r T, KeyResolution)> {
    if let Some(key) = requested {
        if let Some(found) = find(key) {
            let res = KeyResolution::new(Some(key), id_of(found), KeyOutcome::Matched);
            return Some((found, res));
        }
        log::debug!("Unknown {} '{}', falling back to '{}'", kind, key, fallback);
        let found = find(fallback)?;
        return Some((found, KeyResolution::new(Some(key), fallback, KeyOutcome::FellBack)));
    }
    let found = find(fallback)?;
    Some((found, KeyResolution::new(None, fallback, KeyOutcome::Defaulted)))
}

fn resolve_tier(requested: Option<&str>) -> (Tier, KeyResolution) {
    match requested {
        Some(key) => match Tier::parse(key) {
            Some(tier) => (tier, KeyResolution::new(Some(key), tier.as_str(), KeyOutcome::Matched)),
            None => {
                log::debug!("Unknown depth '{}', using '{}'", key, Tier::default());
                let tier = Tier::default();
                (tier, KeyResolution::new(Some(key), tier.as_str(), KeyOutcome::FellBack))
            }
        },
        None => {
            let tier = Tier::default();
            (tier, KeyResolution::new(None, tier.as_str(), KeyOutcome::Defaulted))
        }
    }
}

/// Resolve a configuration against the registry.
///
/// Fails only when `name` or `model` is absent or blank.  Unknown keys are
/// never errors; they are recorded in [`ResolvedContext::resolution`].
pub fn resolve<'r>(
    registry: &'r Registry,
    config: &GenerateConfig,
) -> Result<ResolvedContext<'r>, ConfigError> {
    let name = required(&config.name, "name")?;
    let model = required(&config.model, "model")?;

    let personality = config.personality.clone().unwrap_or_default();

    let (host, host_res) = lookup(
        "host",
        Some(model),
        FALLBACK_HOST,
        |k| registry.host(k),
        |h| h.id.as_str(),
    )
    .ok_or(ConfigError::MissingFallback {
        kind: "host",
        key: FALLBACK_HOST,
    })?;

    let (base, archetype_res) = lookup(
        "archetype",
        optional(&personality.archetype),
        FALLBACK_ARCHETYPE,
        |k| registry.archetype(k),
        |a| a.id.as_str(),
    )
    .ok_or(ConfigError::MissingFallback {
        kind: "archetype",
        key: FALLBACK_ARCHETYPE,
    })?;

    let (style, style_res) = lookup(
        "communication style",
        optional(&personality.communication_style),
        DEFAULT_STYLE,
        |k| registry.style(k),
        |s| s.id.as_str(),
    )
    .ok_or(ConfigError::MissingFallback {
        kind: "communication style",
        key: DEFAULT_STYLE,
    })?;

    let (tier, tier_res) = resolve_tier(optional(&config.depth));

    let mut archetype: Cow<'r, Archetype> = Cow::Borrowed(base);
    let mut overridden = Vec::new();
    if let Some(traits) = personality.traits {
        for (dim, value) in traits.entries() {
            if !value.is_finite() {
                log::warn!("Ignoring non-finite {} override", dim.name());
                continue;
            }
            let clamped = value.clamp(0.0, 1.0);
            if clamped != value {
                log::warn!(
                    "{} override {} is outside 0.0..1.0, clamped to {}",
                    dim.name(),
                    value,
                    clamped
                );
            }
            archetype.to_mut().set_trait(dim, clamped);
            overridden.push(dim);
        }
    }

    let mut custom_values = false;
    if let Some(values) = personality.core_values {
        let values: Vec<String> = values
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        if !values.is_empty() {
            archetype.to_mut().values = values;
            custom_values = true;
        }
    }

    Ok(ResolvedContext {
        name: name.to_string(),
        archetype,
        style,
        host,
        tier,
        overridden,
        custom_values,
        resolution: Resolution {
            archetype: archetype_res,
            style: style_res,
            host: host_res,
            tier: tier_res,
        },
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PersonalityConfig, TraitOverrides};

    fn registry() -> &'static Registry {
        Registry::builtin().unwrap()
    }

    #[test]
    fn test_missing_name_or_model_is_fatal() {
        let reg = registry();
        for cfg in [
            GenerateConfig::default(),
            GenerateConfig {
                model: Some("x".into()),
                ..GenerateConfig::default()
            },
            GenerateConfig {
                name: Some("x".into()),
                ..GenerateConfig::default()
            },
            GenerateConfig::new("claude", "   "),
            GenerateConfig::new("", "Lumen"),
        ] {
            let err = resolve(reg, &cfg).unwrap_err();
            assert!(matches!(err, ConfigError::MissingField { .. }), "{:?}", cfg);
        }
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = resolve(registry(), &GenerateConfig::new("claude", "")).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: name");
        let err = resolve(registry(), &GenerateConfig::new(" ", "Lumen")).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: model");
    }

    #[test]
    fn test_defaults_when_personality_absent() {
        let ctx = resolve(registry(), &GenerateConfig::new("claude", "Lumen")).unwrap();
        assert_eq!(ctx.name, "Lumen");
        assert_eq!(ctx.archetype.id, "custom");
        assert_eq!(ctx.style.id, "balanced");
        assert_eq!(ctx.host.id, "claude");
        assert_eq!(ctx.tier, Tier::Full);
        assert_eq!(ctx.resolution.archetype.outcome, KeyOutcome::Defaulted);
        assert_eq!(ctx.resolution.tier.outcome, KeyOutcome::Defaulted);
        assert!(ctx.resolution.fallbacks().is_empty());
        assert!(matches!(ctx.archetype, Cow::Borrowed(_)));
    }

    #[test]
    fn test_unknown_keys_fall_back_visibly() {
        let cfg = GenerateConfig::new("palm-9000", "Lumen")
            .with_depth("bottomless")
            .with_personality(PersonalityConfig::archetype("wizard").with_style("shouty"));
        let ctx = resolve(registry(), &cfg).unwrap();
        assert_eq!(ctx.host.id, "generic");
        assert_eq!(ctx.archetype.id, "custom");
        assert_eq!(ctx.style.id, "balanced");
        assert_eq!(ctx.tier, Tier::Full);

        let r = &ctx.resolution;
        assert!(r.host.fell_back());
        assert_eq!(r.host.requested.as_deref(), Some("palm-9000"));
        assert_eq!(r.host.resolved, "generic");
        assert!(r.archetype.fell_back());
        assert!(r.style.fell_back());
        assert!(r.tier.fell_back());
        let kinds: Vec<&str> = r.fallbacks().iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec!["archetype", "communication style", "host", "depth"]);
    }

    #[test]
    fn test_numeric_depth_falls_back_to_full() {
        let cfg =
            GenerateConfig::from_json(r#"{"model":"claude","name":"Lumen","depth":3}"#).unwrap();
        let ctx = resolve(registry(), &cfg).unwrap();
        assert_eq!(ctx.tier, Tier::Full);
        assert!(ctx.resolution.tier.fell_back());
        assert_eq!(ctx.resolution.tier.requested.as_deref(), Some("3"));
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let cfg = GenerateConfig::new("Gemini", "Lumen")
            .with_depth("MAXIMUM")
            .with_personality(PersonalityConfig::archetype("Sage").with_style("Direct"));
        let ctx = resolve(registry(), &cfg).unwrap();
        assert_eq!(ctx.host.id, "gemini");
        assert_eq!(ctx.archetype.id, "sage");
        assert_eq!(ctx.style.id, "direct");
        assert_eq!(ctx.tier, Tier::Maximum);
        assert_eq!(ctx.resolution.archetype.outcome, KeyOutcome::Matched);
    }

    #[test]
    fn test_overrides_copy_instead_of_mutating_registry() {
        let reg = registry();
        let cfg = GenerateConfig::new("claude", "Lumen").with_personality(
            PersonalityConfig::archetype("explorer")
                .with_traits(TraitOverrides::default().with(BigFive::Openness, 0.1)),
        );
        let ctx = resolve(reg, &cfg).unwrap();
        assert!(matches!(ctx.archetype, Cow::Owned(_)));
        assert_eq!(ctx.archetype.trait_value(BigFive::Openness), 0.1);
        assert_eq!(ctx.overridden, vec![BigFive::Openness]);

        // Registry entry untouched, and a fresh resolve sees the baseline.
        assert_eq!(reg.archetype("explorer").unwrap().trait_value(BigFive::Openness), 0.92);
        let plain = resolve(
            reg,
            &GenerateConfig::new("claude", "Lumen")
                .with_personality(PersonalityConfig::archetype("explorer")),
        )
        .unwrap();
        assert_eq!(plain.archetype.trait_value(BigFive::Openness), 0.92);
    }

    #[test]
    fn test_out_of_range_overrides_are_clamped_and_nan_ignored() {
        let traits = TraitOverrides::default()
            .with(BigFive::Openness, 1.7)
            .with(BigFive::Neuroticism, -0.3)
            .with(BigFive::Agreeableness, f32::NAN);
        let cfg = GenerateConfig::new("claude", "Lumen")
            .with_personality(PersonalityConfig::archetype("sage").with_traits(traits));
        let ctx = resolve(registry(), &cfg).unwrap();
        assert_eq!(ctx.archetype.trait_value(BigFive::Openness), 1.0);
        assert_eq!(ctx.archetype.trait_value(BigFive::Neuroticism), 0.0);
        assert_eq!(ctx.archetype.trait_value(BigFive::Agreeableness), 0.70);
        assert_eq!(ctx.overridden, vec![BigFive::Openness, BigFive::Neuroticism]);
    }

    #[test]
    fn test_core_values_replace_working_copy_only() {
        let reg = registry();
        let cfg = GenerateConfig::new("claude", "Lumen").with_personality(
            PersonalityConfig::archetype("guardian")
                .with_core_values(vec!["  loyalty ".into(), "".into(), "patience".into()]),
        );
        let ctx = resolve(reg, &cfg).unwrap();
        assert!(ctx.custom_values);
        assert_eq!(ctx.archetype.values, vec!["loyalty".to_string(), "patience".to_string()]);
        assert_ne!(reg.archetype("guardian").unwrap().values, ctx.archetype.values);
    }

    #[test]
    fn test_blank_core_values_keep_archetype_values() {
        let cfg = GenerateConfig::new("claude", "Lumen").with_personality(
            PersonalityConfig::archetype("guardian").with_core_values(vec![" ".into()]),
        );
        let ctx = resolve(registry(), &cfg).unwrap();
        assert!(!ctx.custom_values);
        assert!(matches!(ctx.archetype, Cow::Borrowed(_)));
    }
}
