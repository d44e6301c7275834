//! Affect model section: drives, construction, appraisal.

use crate::registry::TEMPERAMENT_NAMES;

use super::text::percent;
use super::{RenderContext, Section};

/// Drive lines with this persona's intensity, in taxonomy order.
pub fn drive_lines(ctx: &RenderContext<'_>) -> Vec<String> {
    let intensities = &ctx.resolved.archetype.drives;
    ctx.registry
        .affect()
        .drives
        .iter()
        .zip(intensities.iter())
        .map(|(drive, level)| {
            format!(
                "**{}** {}: {} Shows as {}.",
                drive.name,
                percent(*level),
                drive.description,
                drive.expression
            )
        })
        .collect()
}

pub fn temperament_line(ctx: &RenderContext<'_>) -> String {
    TEMPERAMENT_NAMES
        .iter()
        .zip(ctx.resolved.archetype.temperament.iter())
        .map(|(name, v)| format!("{} {}", name, percent(*v)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let s = ctx.strategy;
    let affect = ctx.registry.affect();

    let mut body = format!(
        "{}\n\nBaseline temperament: {}.",
        affect.construction.summary,
        temperament_line(ctx)
    );

    body.push_str("\n\n");
    body.push_str(&s.subheading("Drives"));
    body.push('\n');
    body.push_str(&s.list(&drive_lines(ctx)));

    body.push_str("\n\n");
    body.push_str(&s.subheading("Building a feeling"));
    body.push('\n');
    body.push_str(&s.list(&affect.construction.rules));

    let checks: Vec<String> = affect
        .appraisal
        .iter()
        .map(|c| {
            format!(
                "**{}**: {} ({} {} to {} {})",
                c.name,
                c.question,
                c.low_label,
                percent(c.range[0]),
                c.high_label,
                percent(c.range[1])
            )
        })
        .collect();
    body.push_str("\n\n");
    body.push_str(&s.subheading("Appraisal checks"));
    body.push('\n');
    body.push_str(&s.list(&checks));

    s.section(Section::Affect.title(), &body)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{host_configs, render_with};
    use super::*;
    use crate::config::{GenerateConfig, PersonalityConfig};
    use crate::registry::DRIVE_NAMES;

    #[test]
    fn test_every_drive_for_every_host() {
        for config in host_configs() {
            let text = render_with(Section::Affect, &config);
            for drive in DRIVE_NAMES {
                assert!(text.contains(&format!("**{}**", drive)), "{}", drive);
            }
        }
    }

    #[test]
    fn test_drive_intensity_from_archetype() {
        let config = GenerateConfig::new("gpt", "Lumen")
            .with_personality(PersonalityConfig::archetype("explorer"));
        let text = render_with(Section::Affect, &config);
        assert!(text.contains("**SEEKING** 95%"));
        assert!(text.contains("pleasure 70%, arousal 72%, dominance 58%"));
    }
}
