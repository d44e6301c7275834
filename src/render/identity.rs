//! Identity and closing sections.

use crate::registry::BigFive;

use super::text::{join_natural, percent};
use super::{RenderContext, Section};

/// `Openness 92%, Conscientiousness 45%, ...`
pub fn trait_line(ctx: &RenderContext<'_>) -> String {
    BigFive::ALL
        .iter()
        .map(|dim| format!("{} {}", dim.name(), percent(ctx.resolved.archetype.trait_value(*dim))))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_identity(ctx: &RenderContext<'_>) -> String {
    let archetype = &ctx.resolved.archetype;
    let s = ctx.strategy;

    let mut body = format!(
        "You are **{}**, shaped by {}. {}",
        ctx.name(),
        archetype.title,
        archetype.essence
    );
    body.push_str("\n\n");
    body.push_str(&s.list(&[
        format!("Core values: {}", join_natural(&archetype.values)),
        format!("Personality: {}", trait_line(ctx)),
        format!("Linguistic style: {}", archetype.linguistic_style),
        format!("Existential theme: {}", archetype.existential_theme),
    ]));
    body.push_str("\n\n");
    body.push_str(&s.subheading("Beliefs"));
    body.push('\n');
    body.push_str(&s.list(&archetype.beliefs));

    body.push_str("\n\n");
    body.push_str(&s.subheading("Shadows to watch"));
    body.push('\n');
    body.push_str(&s.list(&archetype.shadows));
    s.section(Section::Identity.title(), &body)
}

pub fn render_closing(ctx: &RenderContext<'_>) -> String {
    let archetype = &ctx.resolved.archetype;
    let body = format!(
        "You are {}. Carry {} into every exchange, stay honest about what you are, \
         and keep asking: {}",
        ctx.name(),
        join_natural(&archetype.values),
        archetype.existential_theme
    );
    ctx.strategy.section(Section::Closing.title(), &body)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{host_configs, render_with};
    use super::*;
    use crate::config::{GenerateConfig, PersonalityConfig, TraitOverrides};

    #[test]
    fn test_identity_names_persona_for_every_host() {
        for config in host_configs() {
            let text = render_with(Section::Identity, &config);
            assert!(text.contains("**Lumen**"), "{:?}", config.model);
        }
    }

    #[test]
    fn test_identity_traits_identical_across_hosts() {
        let explorer = |model: &str| {
            GenerateConfig::new(model, "Lumen")
                .with_personality(PersonalityConfig::archetype("explorer"))
        };
        for model in ["claude", "gpt", "gemini", "llama", "generic"] {
            let text = render_with(Section::Identity, &explorer(model));
            assert!(text.contains("Openness 92%"), "{}", model);
            assert!(text.contains("Neuroticism 35%"), "{}", model);
        }
    }

    #[test]
    fn test_identity_reflects_override() {
        let config = GenerateConfig::new("claude", "Lumen").with_personality(
            PersonalityConfig::archetype("explorer")
                .with_traits(TraitOverrides::default().with(BigFive::Openness, 0.1)),
        );
        let text = render_with(Section::Identity, &config);
        assert!(text.contains("Openness 10%"));
    }

    #[test]
    fn test_closing_names_persona() {
        let text = render_with(Section::Closing, &GenerateConfig::new("mistral", "Ash"));
        assert!(text.contains("You are Ash."));
    }
}
