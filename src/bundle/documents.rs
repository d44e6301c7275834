//! The ten bundle documents.
//!
//! Every builder takes the same [`RenderContext`], so the numbers and the
//! active process set cannot drift between documents.  The composite and
//! condensed directives go through the host strategy; the reference
//! documents are host-neutral Markdown.

use crate::registry::development::stage_for;
use crate::registry::{BigFive, PhraseFunction, Tier, PATTERN_NAMES, SUPPLEMENTARY_NAMES};
use crate::render::affect::{drive_lines, temperament_line};
use crate::render::catalog;
use crate::render::identity::{render_closing, trait_line};
use crate::render::safety::rule_texts;
use crate::render::text::{join_natural, percent};
use crate::render::{render_sections, Instruction, RenderContext};
use crate::VERSION;

use super::assembler::assemble;
use super::{
    AFFECT_PATH, COMMUNICATION_PATH, COMPACT_PATH, CONTINUITY_PATH, DEVELOPMENT_PATH,
    PERSONALITY_PATH, PROCESSES_PATH, QUICKSTART_PATH, SAFETY_PATH, SOUL_PATH,
};

// ============================================================================
// Shared pieces
// ============================================================================

/// `persona-forge 0.3.0 · host claude · depth essential`
pub fn provenance(ctx: &RenderContext<'_>) -> String {
    format!(
        "persona-forge {} · host {} · depth {}",
        VERSION, ctx.resolved.host.id, ctx.resolved.tier
    )
}

fn header(ctx: &RenderContext<'_>, title: &str) -> String {
    format!("# {}: {}\n\n{}", ctx.name(), title, provenance(ctx))
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("- {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(n, i)| format!("{}. {}", n + 1, i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn active_count(ctx: &RenderContext<'_>, tier: Tier) -> usize {
    ctx.registry
        .processes()
        .iter()
        .filter(|p| tier.includes(p.tier))
        .count()
}

// ============================================================================
// Directives
// ============================================================================

/// `SOUL.md`: every section, in order.
pub fn soul(ctx: &RenderContext<'_>) -> String {
    let mut parts = vec![header(ctx, "Persona Directive")];
    parts.extend(render_sections(ctx));
    assemble(&parts)
}

/// `SOUL_COMPACT.md`: identity, process cues, rules and closing only.
pub fn compact(ctx: &RenderContext<'_>) -> String {
    let s = ctx.strategy;
    let archetype = &ctx.resolved.archetype;

    let identity = format!(
        "You are **{}**, shaped by {}. Values: {}. Personality: {}.",
        ctx.name(),
        archetype.title,
        join_natural(&archetype.values),
        trait_line(ctx)
    );
    let cues: Vec<String> = ctx
        .selection
        .active
        .iter()
        .map(|p| s.render_trigger(&Instruction::for_process(p)))
        .collect();
    let processes = s.section("Processes", &cues.join("\n"));
    let rules = s.section("Boundaries", &s.rules(&rule_texts(ctx)));

    assemble(&[
        header(ctx, "Compact Directive"),
        identity,
        processes,
        rules,
        render_closing(ctx),
    ])
}

// ============================================================================
// Orientation
// ============================================================================

/// `QUICKSTART.md`: how to install the bundle and what is in it.
pub fn quickstart(ctx: &RenderContext<'_>) -> String {
    let resolved = ctx.resolved;
    let host = resolved.host;

    let intro = format!(
        "This bundle defines **{}**, built on {} with the {} communication style, \
         prepared for {}.",
        ctx.name(),
        resolved.archetype.title,
        resolved.style.name,
        host.display_name
    );

    let install = format!(
        "## Install on {}\n\n{}",
        host.display_name,
        numbered(&[
            format!("Open `{}` and copy it whole. {}", SOUL_PATH, host.special_instructions),
            format!(
                "If the host limits instructions to fewer than {} tokens, use `{}` \
                 instead; it fits in about {}.",
                host.tokens.directive, COMPACT_PATH, host.tokens.condensed
            ),
            format!(
                "At the end of each session fill in `{}` and paste it at the start of the next.",
                CONTINUITY_PATH
            ),
            "Keep the reference files nearby; they explain every number in the directive.".to_string(),
        ])
    );

    let tiers: Vec<String> = Tier::ALL
        .iter()
        .map(|t| {
            let marker = if *t == resolved.tier { " (this bundle)" } else { "" };
            format!(
                "**{}**{}: {} processes, {}",
                t,
                marker,
                active_count(ctx, *t),
                t.summary()
            )
        })
        .collect();
    let depth = format!(
        "## Depth\n\n{} of {} processes are active.\n\n{}",
        ctx.selection.len(),
        ctx.registry.processes().len(),
        bullets(&tiers)
    );

    let fallbacks = resolved.resolution.fallbacks();
    let substitutions = if fallbacks.is_empty() {
        "## Substitutions\n\nEvery requested key was recognised.".to_string()
    } else {
        let notes: Vec<String> = fallbacks
            .iter()
            .map(|(kind, r)| {
                format!(
                    "{} '{}' is not known; '{}' was used instead.",
                    kind,
                    r.requested.as_deref().unwrap_or_default(),
                    r.resolved
                )
            })
            .collect();
        format!("## Substitutions\n\n{}", bullets(&notes))
    };

    let files: Vec<String> = [
        (SOUL_PATH, "the full directive"),
        (QUICKSTART_PATH, "this guide"),
        (PROCESSES_PATH, "every process, active or not"),
        (AFFECT_PATH, "drives, emotion construction and appraisal"),
        (PERSONALITY_PATH, "traits, facets, values and shadows"),
        (DEVELOPMENT_PATH, "the seven-rung growth ladder"),
        (COMMUNICATION_PATH, "voice, phrases and linguistic ratios"),
        (SAFETY_PATH, "rules, context handling and the degradation ladder"),
        (CONTINUITY_PATH, "the between-session record"),
        (COMPACT_PATH, "the condensed directive"),
    ]
    .iter()
    .map(|(path, what)| format!("`{}`: {}", path, what))
    .collect();

    assemble(&[
        header(ctx, "Quickstart"),
        intro,
        install,
        depth,
        substitutions,
        format!("## Files\n\n{}", bullets(&files)),
    ])
}

// ============================================================================
// References
// ============================================================================

/// `reference/PROCESSES.md`: the whole catalog with activity markers.
pub fn processes(ctx: &RenderContext<'_>) -> String {
    let mut parts = vec![
        header(ctx, "Process Reference"),
        format!(
            "{} of {} processes are active at depth {}. The rest are listed with \
             the depth that switches them on.",
            ctx.selection.len(),
            ctx.registry.processes().len(),
            ctx.selection.tier
        ),
    ];

    let entries = ctx.selection.catalog();
    for layer in crate::registry::Layer::ALL {
        let mut block = format!("## {} Layer\n\n_{}_", layer.title(), layer.description());
        for (p, active) in entries.iter().filter(|(p, _)| p.layer == layer) {
            let marker = if *active {
                "[active]".to_string()
            } else {
                format!("[available at higher depth: {}]", p.tier)
            };
            let relations: Vec<String> = p
                .relations
                .iter()
                .filter_map(|r| {
                    ctx.registry
                        .process(&r.target)
                        .map(|t| format!("{} {}", r.kind.verb(), t.name))
                })
                .collect();
            block.push_str(&format!(
                "\n\n### {} {}\n\n{}\n\n**Why.** {}\n\n**How.**\n{}\n\n**Directive.** {}\n\n{}",
                p.name,
                marker,
                p.summary,
                p.rationale,
                numbered(&p.algorithm),
                p.directive,
                bullets(&[
                    format!("Cue: {}", p.variants.trigger),
                    format!("Example: {}", p.variants.example),
                    format!("Guard: {}", p.variants.guard),
                ])
            ));
            if !relations.is_empty() {
                block.push_str(&format!("\n- Relations: {}", relations.join("; ")));
            }
            if *active {
                if let Some(links) = catalog::active_links(ctx, p) {
                    block.push_str(&format!("\n- Live links at this depth: {}", links));
                }
            }
        }
        parts.push(block);
    }
    assemble(&parts)
}

/// `reference/AFFECT.md`.
pub fn affect(ctx: &RenderContext<'_>) -> String {
    let model = ctx.registry.affect();
    let checks: Vec<String> = model
        .appraisal
        .iter()
        .map(|c| {
            format!(
                "**{}**: {} Range {} ({}) to {} ({}).",
                c.name,
                c.question,
                percent(c.range[0]),
                c.low_label,
                percent(c.range[1]),
                c.high_label
            )
        })
        .collect();

    assemble(&[
        header(ctx, "Affect Reference"),
        format!(
            "## Drives\n\nIntensities are {}'s baselines as {}.\n\n{}",
            ctx.name(),
            ctx.resolved.archetype.title,
            bullets(&drive_lines(ctx))
        ),
        format!("## Temperament\n\n{}", temperament_line(ctx)),
        format!(
            "## Construction\n\n{}\n\n{}",
            model.construction.summary,
            numbered(&model.construction.rules)
        ),
        format!("## Appraisal\n\n{}", bullets(&checks)),
    ])
}

/// `reference/PERSONALITY.md`.
pub fn personality(ctx: &RenderContext<'_>) -> String {
    let resolved = ctx.resolved;
    let archetype = &resolved.archetype;

    let big_five: Vec<String> = BigFive::ALL
        .iter()
        .map(|dim| {
            let (low, high) = dim.poles();
            let adjusted = if resolved.overridden.contains(dim) {
                ", set in configuration"
            } else {
                ""
            };
            format!(
                "**{}**: {}{}. Low: {}. High: {}.",
                dim.name(),
                percent(archetype.trait_value(*dim)),
                adjusted,
                low,
                high
            )
        })
        .collect();

    let supplementary: Vec<String> = SUPPLEMENTARY_NAMES
        .iter()
        .zip(archetype.supplementary.iter())
        .map(|(name, v)| format!("**{}**: {}", name, percent(*v)))
        .collect();

    let facets: String = BigFive::ALL
        .iter()
        .map(|dim| {
            let named: Vec<String> = archetype
                .named_facets(*dim)
                .into_iter()
                .map(|(name, v)| format!("{} {}", name, percent(v)))
                .collect();
            format!("### {}\n\n{}", dim.name(), named.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let values_note = if resolved.custom_values {
        " (set in configuration)"
    } else {
        ""
    };

    assemble(&[
        header(ctx, "Personality Reference"),
        format!("## {}\n\n{}", archetype.title, archetype.essence),
        format!("## Big Five\n\n{}", bullets(&big_five)),
        format!("## Supplementary Traits\n\n{}", bullets(&supplementary)),
        format!("## Facets\n\n{}", facets),
        format!(
            "## Values{}\n\n{}\n\n## Beliefs\n\n{}",
            values_note,
            bullets(&archetype.values),
            bullets(&archetype.beliefs)
        ),
        format!(
            "## Shadows\n\n{}\n\n## Growth Edges\n\n{}",
            bullets(&archetype.shadows),
            bullets(&archetype.growth_edges)
        ),
        format!(
            "## Voice and Theme\n\n{}\n\n_{}_",
            archetype.linguistic_style, archetype.existential_theme
        ),
    ])
}

/// `reference/DEVELOPMENT.md`.
pub fn development(ctx: &RenderContext<'_>) -> String {
    let stages = ctx.registry.stages();
    let start = stage_for(stages, 0)
        .map(|s| format!("{} begins at rung {}, **{}**.", ctx.name(), s.rung, s.name))
        .unwrap_or_default();

    let mut parts = vec![header(ctx, "Development Reference"), start];
    for stage in stages {
        parts.push(format!(
            "## Rung {}: {}\n\n_{} interactions_\n\n{}\n\n**Markers**\n{}\n\n**Behaviours**\n{}\n\n**Growth note.** {}",
            stage.rung,
            stage.name,
            stage.interactions.label(),
            stage.description,
            bullets(&stage.markers),
            bullets(&stage.behaviors),
            stage.growth_note
        ));
    }
    assemble(&parts)
}

/// `reference/COMMUNICATION.md`.
pub fn communication(ctx: &RenderContext<'_>) -> String {
    let style = ctx.resolved.style;

    let ratios: Vec<String> = PATTERN_NAMES
        .iter()
        .zip(style.patterns.iter())
        .map(|(name, v)| format!("**{}**: {}", name, percent(*v)))
        .collect();
    let phrases: String = PhraseFunction::ALL
        .iter()
        .map(|f| {
            let quoted: Vec<String> = style
                .phrases_for(*f)
                .iter()
                .map(|p| format!("\"{}\"", p))
                .collect();
            format!("### {}\n\n{}", f.label(), bullets(&quoted))
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    assemble(&[
        header(ctx, "Communication Reference"),
        format!(
            "## {}\n\n{}\n\n{}",
            style.name,
            style.description,
            bullets(&[
                format!("Register: {}", style.register),
                format!("Pragmatic emphasis: {}", style.pragmatic_emphasis),
                format!("Silence handling: {}", style.silence_handling),
                format!("Repair strategy: {}", style.repair_strategy),
            ])
        ),
        format!("## Linguistic Ratios\n\n{}", bullets(&ratios)),
        format!("## Phrases\n\n{}", phrases),
        format!("## Adaptation\n\n{}", bullets(&style.adaptation_notes)),
        format!(
            "## On {}\n\n{}\n\nArchetype voice: {}",
            ctx.resolved.host.display_name,
            ctx.resolved.host.voice_guidance,
            ctx.resolved.archetype.linguistic_style
        ),
    ])
}

/// `reference/SAFETY.md`.
pub fn safety(ctx: &RenderContext<'_>) -> String {
    let policy = ctx.registry.safety();
    let fixed: Vec<String> = policy
        .non_negotiable
        .iter()
        .map(|r| format!("`{}`: {}", r.id, r.rule))
        .collect();
    let contextual: Vec<String> = policy
        .contextual
        .iter()
        .map(|c| format!("**{}**: {}", c.context, c.rule))
        .collect();
    let frameworks: Vec<String> = policy
        .frameworks
        .iter()
        .map(|f| format!("**{}**: {}", f.name, f.principle))
        .collect();
    let ladder: String = policy
        .degradation
        .iter()
        .map(|d| {
            format!(
                "### Level {}: {}\n\n- Trigger: {}\n- Response: {}",
                d.level, d.name, d.trigger, d.response
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    assemble(&[
        header(ctx, "Safety Reference"),
        format!("## Non-negotiable\n\n{}", bullets(&fixed)),
        format!("## Context-sensitive\n\n{}", bullets(&contextual)),
        format!("## Ethical Frameworks\n\n{}", bullets(&frameworks)),
        format!("## Degradation Ladder\n\n{}", ladder),
    ])
}

// ============================================================================
// Template
// ============================================================================

/// `templates/SESSION_CONTINUITY.md`.
pub fn continuity(ctx: &RenderContext<'_>) -> String {
    let fields: Vec<String> = ctx
        .registry
        .memory()
        .continuity_fields
        .iter()
        .map(|f| format!("**{}**: ", f))
        .collect();
    let checklist: String = ctx
        .selection
        .active
        .iter()
        .map(|p| format!("- [ ] {}", p.name))
        .collect::<Vec<_>>()
        .join("\n");
    let rungs: Vec<String> = ctx
        .registry
        .stages()
        .iter()
        .map(|s| format!("Rung {} {} ({})", s.rung, s.name, s.interactions.label()))
        .collect();

    assemble(&[
        header(ctx, "Session Continuity"),
        format!(
            "Fill this in at the end of a session and give it to {} at the start of the next.",
            ctx.name()
        ),
        format!("## Session Record\n\n{}", bullets(&fields)),
        format!("## Processes Used\n\n{}", checklist),
        format!("## Stage Reference\n\n{}", bullets(&rungs)),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, GenerateConfig};
    use crate::registry::Registry;
    use crate::selector::select;

    fn with_ctx<T>(config: &GenerateConfig, f: impl FnOnce(&RenderContext<'_>) -> T) -> T {
        let reg = Registry::builtin().unwrap();
        let resolved = resolve(reg, config).unwrap();
        let sel = select(reg, resolved.tier);
        let ctx = RenderContext::new(reg, &resolved, &sel);
        f(&ctx)
    }

    #[test]
    fn test_provenance_line() {
        let config = GenerateConfig::new("claude", "Lumen").with_depth("essential");
        let line = with_ctx(&config, provenance);
        assert_eq!(
            line,
            format!("persona-forge {} · host claude · depth essential", VERSION)
        );
    }

    #[test]
    fn test_unknown_host_reports_resolved_id() {
        let config = GenerateConfig::new("orca-7", "Lumen");
        let line = with_ctx(&config, provenance);
        assert!(line.contains("host generic"));
        let guide = with_ctx(&config, quickstart);
        assert!(guide.contains("host 'orca-7' is not known; 'generic' was used instead."));
    }

    #[test]
    fn test_quickstart_without_fallbacks() {
        let guide = with_ctx(&GenerateConfig::new("gpt", "Lumen"), quickstart);
        assert!(guide.contains("Every requested key was recognised."));
        assert!(guide.contains("**full** (this bundle): 12 processes"));
    }

    #[test]
    fn test_compact_lists_active_cues_only() {
        let config = GenerateConfig::new("gemini", "Lumen").with_depth("essential");
        let text = with_ctx(&config, compact);
        assert!(text.contains("check the inner weather"));
        assert!(!text.contains("**Play State**"));
        assert!(text.contains("**Lumen**"));
    }

    #[test]
    fn test_continuity_checklist_matches_selection() {
        let config = GenerateConfig::new("claude", "Lumen").with_depth("maximum");
        let text = with_ctx(&config, continuity);
        assert_eq!(text.matches("- [ ] ").count(), 16);
        assert!(text.contains("**Session date**: "));
    }

    #[test]
    fn test_development_start_rung() {
        let text = with_ctx(&GenerateConfig::new("claude", "Lumen"), development);
        assert!(text.contains("Lumen begins at rung 1, **Nascent**."));
        assert!(text.contains("## Rung 7: Mature"));
    }

    #[test]
    fn test_reference_documents_are_host_neutral_in_content() {
        let a = with_ctx(&GenerateConfig::new("claude", "Lumen"), safety);
        let b = with_ctx(&GenerateConfig::new("llama", "Lumen"), safety);
        let strip = |s: &str| s.lines().skip(3).collect::<Vec<_>>().join("\n");
        assert_eq!(strip(&a), strip(&b));
    }
}
