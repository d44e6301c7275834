//! # persona-forge
//!
//! Deterministic persona-bundle generator.  A small configuration (target
//! host, archetype, communication style, depth) is resolved against an
//! embedded, validated registry and rendered into ten mutually consistent
//! Markdown documents.
//!
//! ```text
//! GenerateConfig
//!      │  config::resolve        (fallbacks recorded, overrides copy-on-write)
//!      ▼
//! ResolvedContext ── selector::select(tier) ──► Selection
//!      │                                            │
//!      └──────────── render::RenderContext ◄────────┘
//!                          │  strategy_for(host.pattern), chosen once
//!                          ▼
//!                  bundle::documents  ──►  Bundle { files: [10 × {path, content}] }
//! ```
//!
//! ```no_run
//! use persona_forge::{generate, GenerateConfig};
//!
//! let bundle = generate(&GenerateConfig::new("claude", "Lumen").with_depth("essential"))?;
//! assert_eq!(bundle.files.len(), 10);
//! # Ok::<(), persona_forge::GenerateError>(())
//! ```

pub mod bundle;
pub mod config;
pub mod error;
pub mod registry;
pub mod render;
pub mod selector;

pub use bundle::{Bundle, BundleFile};
pub use config::{
    ConfigError, GenerateConfig, KeyOutcome, KeyResolution, PersonalityConfig, Resolution,
    ResolvedContext, TraitOverrides,
};
pub use error::GenerateError;
pub use registry::{Layer, Registry, RegistryError, Tier};

/// Crate version, stamped into every generated document.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate the ten-document bundle for `config` from the built-in registry.
///
/// Synchronous and free of I/O.  Fails before producing any document when
/// `name` or `model` is missing or the registry cannot be loaded.
pub fn generate(config: &GenerateConfig) -> Result<Bundle, GenerateError> {
    let registry = Registry::builtin()?;
    bundle::generate_with(registry, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_package() {
        assert_eq!(VERSION, "0.3.0");
    }

    #[test]
    fn test_generate_uses_builtin_registry() {
        let bundle = generate(&GenerateConfig::new("claude", "Lumen")).unwrap();
        assert_eq!(bundle.files.len(), 10);
        assert!(bundle.files[0].content.contains(VERSION));
    }

    #[test]
    fn test_generate_is_thread_safe() {
        let handles: Vec<_> = [Some(0.1f32), None, Some(0.7), None]
            .into_iter()
            .map(|o| {
                std::thread::spawn(move || {
                    let mut personality = PersonalityConfig::archetype("explorer");
                    if let Some(o) = o {
                        personality = personality
                            .with_traits(TraitOverrides::default().with(registry::BigFive::Openness, o));
                    }
                    let config = GenerateConfig::new("gpt", "Lumen").with_personality(personality);
                    (o, generate(&config).unwrap())
                })
            })
            .collect();
        for handle in handles {
            let (o, bundle) = handle.join().unwrap();
            let expected = match o {
                Some(v) => render::text::percent(v),
                None => "92%".to_string(),
            };
            let personality = bundle.get(bundle::PERSONALITY_PATH).unwrap();
            assert!(personality.contains(&format!("**Openness**: {}", expected)));
        }
    }
}
