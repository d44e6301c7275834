//! Host-specific notes.
//!
//! The only section whose facts differ by host: it describes the host itself.

use super::text::join_natural;
use super::{RenderContext, Section};

pub fn render_notes(ctx: &RenderContext<'_>) -> String {
    let s = ctx.strategy;
    let host = ctx.resolved.host;
    let title = format!("{}: {}", Section::HostNotes.title(), host.display_name);

    let body = s.list(&[
        format!("Prompt style: {}", host.prompt_style),
        format!("Strengths: {}", join_natural(&host.strengths)),
        format!("Context window: {}", host.context_window),
        format!("Structure: {}", host.structure_format),
        format!("Voice: {}", host.voice_guidance),
        format!(
            "Length: keep this directive near {} tokens and replies around {} tokens.",
            host.tokens.directive, host.tokens.response
        ),
        format!("Setup: {}", host.special_instructions),
    ]);
    s.section(&title, &body)
}
