//! Bundle generator: ten documents from one resolution pass.
//!
//! ```text
//! GenerateConfig ─► resolve ─► ResolvedContext ─┐
//!                     select(tier) ─► Selection ─┼─► RenderContext ─► 10 × document builder
//!          strategy_for(host.pattern) ───────────┘
//! ```
//!
//! Resolution and selection run once.  Every document reads the same
//! context, so a percentage or process list cannot differ between files.
//! Any failure happens before the first document is built.

pub mod assembler;
pub mod documents;

use serde::{Deserialize, Serialize};

use crate::config::{resolve, GenerateConfig};
use crate::error::GenerateError;
use crate::registry::Registry;
use crate::render::RenderContext;
use crate::selector::select;

// ============================================================================
// Paths
// ============================================================================

pub const SOUL_PATH: &str = "SOUL.md";
pub const QUICKSTART_PATH: &str = "QUICKSTART.md";
pub const PROCESSES_PATH: &str = "reference/PROCESSES.md";
pub const AFFECT_PATH: &str = "reference/AFFECT.md";
pub const PERSONALITY_PATH: &str = "reference/PERSONALITY.md";
pub const DEVELOPMENT_PATH: &str = "reference/DEVELOPMENT.md";
pub const COMMUNICATION_PATH: &str = "reference/COMMUNICATION.md";
pub const SAFETY_PATH: &str = "reference/SAFETY.md";
pub const CONTINUITY_PATH: &str = "templates/SESSION_CONTINUITY.md";
pub const COMPACT_PATH: &str = "SOUL_COMPACT.md";

type Builder = fn(&RenderContext<'_>) -> String;

/// Document paths and builders, in bundle order.
const DOCUMENTS: [(&str, Builder); 10] = [
    (SOUL_PATH, documents::soul),
    (QUICKSTART_PATH, documents::quickstart),
    (PROCESSES_PATH, documents::processes),
    (AFFECT_PATH, documents::affect),
    (PERSONALITY_PATH, documents::personality),
    (DEVELOPMENT_PATH, documents::development),
    (COMMUNICATION_PATH, documents::communication),
    (SAFETY_PATH, documents::safety),
    (CONTINUITY_PATH, documents::continuity),
    (COMPACT_PATH, documents::compact),
];

/// The fixed path set, in bundle order.
pub fn paths() -> [&'static str; 10] {
    DOCUMENTS.map(|(path, _)| path)
}

// ============================================================================
// Output
// ============================================================================

/// One generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleFile {
    pub path: String,
    pub content: String,
}

/// The result of one `generate` call.  Serializes as `{"files": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub files: Vec<BundleFile>,
}

impl Bundle {
    /// Content of the document at `path`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Generate a bundle against an explicit registry.
pub fn generate_with(registry: &Registry, config: &GenerateConfig) -> Result<Bundle, GenerateError> {
    let resolved = resolve(registry, config)?;
    let selection = select(registry, resolved.tier);
    let ctx = RenderContext::new(registry, &resolved, &selection);

    log::debug!(
        "Generating bundle for '{}' (host '{}', pattern '{}', depth '{}')",
        resolved.name,
        resolved.host.id,
        ctx.strategy.pattern().as_str(),
        resolved.tier
    );

    let files = DOCUMENTS
        .iter()
        .map(|(path, build)| BundleFile {
            path: (*path).to_string(),
            content: build(&ctx),
        })
        .collect();
    Ok(Bundle { files })
}

// ============================================================================
// Tests
// ============================================================================
