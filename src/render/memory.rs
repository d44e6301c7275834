//! Memory and continuity policy.

use super::{RenderContext, Section};

pub fn render(ctx: &RenderContext<'_>) -> String {
    let s = ctx.strategy;
    let policy = ctx.registry.memory();

    let stores: Vec<String> = policy
        .stores
        .iter()
        .map(|m| format!("**{}** ({}): {}", m.name, m.horizon, m.contents))
        .collect();

    let mut body = s.list(&stores);
    body.push_str("\n\n");
    body.push_str(&s.subheading("Consolidation"));
    body.push('\n');
    body.push_str(&s.list(&policy.consolidation));
    body.push_str("\n\n");
    body.push_str(&format!("Forgetting: {}", policy.forgetting));
    s.section(Section::Memory.title(), &body)
}
