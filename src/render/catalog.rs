//! Active process catalog for the composite directive.
//!
//! Lists only the processes the selected tier switches on, grouped by layer.
//! Relation links are filtered to active targets so the directive never
//! points at a process the persona does not run.

use crate::registry::ProcessDef;

use super::strategy::Instruction;
use super::{RenderContext, Section};

/// `feeds Affective Attunement; modulates Salience Gate`, active targets only.
pub fn active_links(ctx: &RenderContext<'_>, process: &ProcessDef) -> Option<String> {
    let links: Vec<String> = process
        .relations
        .iter()
        .filter(|r| ctx.selection.is_active(&r.target))
        .filter_map(|r| {
            ctx.registry
                .process(&r.target)
                .map(|target| format!("{} {}", r.kind.verb(), target.name))
        })
        .collect();
    if links.is_empty() {
        None
    } else {
        Some(links.join("; "))
    }
}

pub fn instruction(ctx: &RenderContext<'_>, process: &ProcessDef) -> Instruction {
    let mut ins =
        Instruction::for_process(process).with_detail(format!("Why: {}", process.rationale));
    if let Some(links) = active_links(ctx, process) {
        ins = ins.with_detail(format!("Links: {}", links));
    }
    ins
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let s = ctx.strategy;
    let mut body = format!(
        "{} processes are active at depth {}. Run them quietly; never narrate them.",
        ctx.selection.len(),
        ctx.selection.tier
    );
    for (layer, members) in ctx.selection.grouped() {
        let instructions: Vec<Instruction> =
            members.iter().map(|p| instruction(ctx, p)).collect();
        body.push_str("\n\n");
        body.push_str(&s.subheading(&format!("{}: {}", layer.title(), layer.description())));
        body.push_str("\n\n");
        body.push_str(&s.render_all(&instructions));
    }
    s.section(Section::Catalog.title(), &body)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{host_configs, registry, render_with};
    use super::*;
    use crate::config::GenerateConfig;
    use crate::registry::Tier;
    use crate::selector::select;

    #[test]
    fn test_lists_only_active_processes() {
        let reg = registry();
        let essential = GenerateConfig::new("claude", "Lumen").with_depth("essential");
        let text = render_with(Section::Catalog, &essential);
        let sel = select(reg, Tier::Essential);
        for (process, active) in sel.catalog() {
            let needle = format!("**{}**", process.name);
            assert_eq!(text.contains(&needle), active, "{}", process.name);
        }
        assert!(text.contains("8 processes are active at depth essential"));
    }

    #[test]
    fn test_same_process_names_for_every_host() {
        let reg = registry();
        let sel = select(reg, Tier::Full);
        for config in host_configs() {
            let text = render_with(Section::Catalog, &config);
            for process in &sel.active {
                assert!(text.contains(&process.name), "{} on {:?}", process.name, config.model);
            }
        }
    }

    #[test]
    fn test_rationale_line_for_every_host() {
        let reg = registry();
        let salience = reg.process("salience").unwrap();
        for config in host_configs() {
            let text = render_with(Section::Catalog, &config);
            assert!(
                text.contains(&format!("Why: {}", salience.rationale)),
                "{:?}",
                config.model
            );
        }
    }

    #[test]
    fn test_links_skip_inactive_targets() {
        let reg = registry();
        let ctx = super::super::tests::resolved(&GenerateConfig::new("claude", "Lumen"));
        for tier in Tier::ALL {
            let sel = select(reg, tier);
            let rc = RenderContext::new(reg, &ctx, &sel);
            for process in &sel.active {
                if let Some(links) = active_links(&rc, process) {
                    for inactive in sel.deferred() {
                        assert!(!links.contains(&inactive.name), "{} -> {}", process.id, inactive.id);
                    }
                }
            }
        }
    }
}
