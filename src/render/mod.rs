//! Section renderers: the same facts, presented per host.
//!
//! ```text
//! ResolvedContext ─┐
//! Selection ───────┼─► RenderContext ─► Section::render ─► text
//! HostStrategy ────┘        (one per generate call, shared by every section)
//! ```
//!
//! Each renderer is a pure `fn(&RenderContext) -> String`.  Content comes from
//! the resolved context and selection; only the strategy decides layout, so
//! two hosts see identical names and percentages.

pub mod affect;
pub mod catalog;
pub mod communication;
pub mod cycle;
pub mod development;
pub mod host;
pub mod identity;
pub mod memory;
pub mod safety;
pub mod strategy;
pub mod text;

use crate::config::ResolvedContext;
use crate::registry::Registry;
use crate::selector::Selection;

pub use strategy::{strategy_for, HostStrategy, Instruction};

/// Everything a section renderer may read.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub registry: &'a Registry,
    pub resolved: &'a ResolvedContext<'a>,
    pub selection: &'a Selection<'a>,
    pub strategy: &'a dyn HostStrategy,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        registry: &'a Registry,
        resolved: &'a ResolvedContext<'a>,
        selection: &'a Selection<'a>,
    ) -> Self {
        Self {
            registry,
            resolved,
            selection,
            strategy: strategy_for(resolved.host.pattern),
        }
    }

    /// Persona name as configured.
    pub fn name(&self) -> &str {
        &self.resolved.name
    }
}

/// The ten sections of the composite directive, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Identity,
    Cycle,
    Catalog,
    Affect,
    Memory,
    Communication,
    Development,
    Safety,
    HostNotes,
    Closing,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Self::Identity,
        Self::Cycle,
        Self::Catalog,
        Self::Affect,
        Self::Memory,
        Self::Communication,
        Self::Development,
        Self::Safety,
        Self::HostNotes,
        Self::Closing,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Cycle => "Turn Cycle",
            Self::Catalog => "Active Processes",
            Self::Affect => "Emotional Core",
            Self::Memory => "Memory and Continuity",
            Self::Communication => "Voice",
            Self::Development => "Growth Path",
            Self::Safety => "Boundaries",
            Self::HostNotes => "Host Notes",
            Self::Closing => "Closing",
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        match self {
            Self::Identity => identity::render_identity(ctx),
            Self::Cycle => cycle::render(ctx),
            Self::Catalog => catalog::render(ctx),
            Self::Affect => affect::render(ctx),
            Self::Memory => memory::render(ctx),
            Self::Communication => communication::render(ctx),
            Self::Development => development::render(ctx),
            Self::Safety => safety::render(ctx),
            Self::HostNotes => host::render_notes(ctx),
            Self::Closing => identity::render_closing(ctx),
        }
    }
}

/// Render every section in document order.
pub fn render_sections(ctx: &RenderContext<'_>) -> Vec<String> {
    Section::ALL.iter().map(|s| s.render(ctx)).collect()
}

// ============================================================================
// Tests
// ============================================================================
