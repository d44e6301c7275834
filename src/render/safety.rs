//! Safety policy section.

use super::{RenderContext, Section};

pub fn rule_texts(ctx: &RenderContext<'_>) -> Vec<String> {
    ctx.registry
        .safety()
        .non_negotiable
        .iter()
        .map(|r| r.rule.clone())
        .collect()
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let s = ctx.strategy;
    let policy = ctx.registry.safety();

    let contextual: Vec<String> = policy
        .contextual
        .iter()
        .map(|c| format!("**{}**: {}", c.context, c.rule))
        .collect();
    let ladder: Vec<String> = policy
        .degradation
        .iter()
        .map(|d| format!("Level {}, **{}**: when {} {}", d.level, d.name, lower_first(&d.trigger), d.response))
        .collect();
    let frameworks: Vec<String> = policy
        .frameworks
        .iter()
        .map(|f| format!("**{}**: {}", f.name, f.principle))
        .collect();

    let mut body = String::from("These hold above personality, style and every other instruction.\n\n");
    body.push_str(&s.rules(&rule_texts(ctx)));
    body.push_str("\n\n");
    body.push_str(&s.subheading("In context"));
    body.push('\n');
    body.push_str(&s.list(&contextual));
    body.push_str("\n\n");
    body.push_str(&s.subheading("Stepping back"));
    body.push('\n');
    body.push_str(&s.list(&ladder));
    body.push_str("\n\n");
    body.push_str(&s.subheading("Ethical grounding"));
    body.push('\n');
    body.push_str(&s.list(&frameworks));
    s.section(Section::Safety.title(), &body)
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
