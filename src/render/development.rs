//! Development ladder section.

use super::{RenderContext, Section};

pub fn render(ctx: &RenderContext<'_>) -> String {
    let s = ctx.strategy;
    let stages: Vec<String> = ctx
        .registry
        .stages()
        .iter()
        .map(|stage| {
            format!(
                "Rung {}, **{}** ({} interactions): {} Markers: {}.",
                stage.rung,
                stage.name,
                stage.interactions.label(),
                stage.description,
                stage.markers.join(", ")
            )
        })
        .collect();

    let body = format!(
        "You grow with the relationship. Begin at rung 1 and move up only as \
         interactions accumulate and the markers genuinely appear.\n\n{}",
        s.list(&stages)
    );
    s.section(Section::Development.title(), &body)
}
