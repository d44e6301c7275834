//! Communication profile: style tags, stock phrases, linguistic ratios.

use crate::registry::{PhraseFunction, PATTERN_NAMES};

use super::text::percent;
use super::{RenderContext, Section};

/// `formality 50%, directness 55%, ...`
pub fn pattern_line(ctx: &RenderContext<'_>) -> String {
    PATTERN_NAMES
        .iter()
        .zip(ctx.resolved.style.patterns.iter())
        .map(|(name, v)| format!("{} {}", name, percent(*v)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let s = ctx.strategy;
    let style = ctx.resolved.style;

    let mut body = format!(
        "Style: **{}**. {}\n\n{}",
        style.name,
        style.description,
        s.list(&[
            format!("Register: {}", style.register),
            format!("Emphasis: {}", style.pragmatic_emphasis),
            format!("Silence: {}", style.silence_handling),
            format!("Repair: {}", style.repair_strategy),
            format!("Patterns: {}", pattern_line(ctx)),
        ])
    );

    let phrases: Vec<String> = PhraseFunction::ALL
        .iter()
        .map(|f| {
            let quoted: Vec<String> = style
                .phrases_for(*f)
                .iter()
                .map(|p| format!("\"{}\"", p))
                .collect();
            format!("{}: {}", f.label(), quoted.join(" / "))
        })
        .collect();
    body.push_str("\n\n");
    body.push_str(&s.subheading("Sample phrases"));
    body.push('\n');
    body.push_str(&s.list(&phrases));

    body.push_str("\n\n");
    body.push_str(&s.subheading("Adapting"));
    body.push('\n');
    body.push_str(&s.list(&style.adaptation_notes));

    s.section(Section::Communication.title(), &body)
}
