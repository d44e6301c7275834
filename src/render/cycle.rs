//! The ten-phase turn cycle.

use crate::registry::LoopPhase;

use super::strategy::Instruction;
use super::{RenderContext, Section};

/// A phase as an instruction; the directive is its only step.
pub fn instruction(phase: &LoopPhase) -> Instruction {
    Instruction::new(phase.phase.name(), phase.directive.clone())
        .with_note(phase.duration.as_str())
        .with_steps(Vec::new())
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let phases: Vec<Instruction> = ctx.registry.cycle().iter().map(instruction).collect();

    let body = format!(
        "Run these {} phases on every turn, in order. Most take a moment; \
         thinking and expression take longer; consolidation happens after you reply.\n\n{}",
        phases.len(),
        ctx.strategy.render_all(&phases)
    );
    ctx.strategy.section(Section::Cycle.title(), &body)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{host_configs, render_with};
    use super::*;
    use crate::registry::Phase;

    #[test]
    fn test_all_phases_in_order_for_every_host() {
        for config in host_configs() {
            let text = render_with(Section::Cycle, &config);
            let mut cursor = 0;
            for phase in Phase::ALL {
                let needle = format!("**{}**", phase.name());
                let at = text[cursor..]
                    .find(&needle)
                    .unwrap_or_else(|| panic!("{} missing or out of order", phase.name()));
                cursor += at + needle.len();
            }
        }
    }

    #[test]
    fn test_phases_use_host_form() {
        let cycle = |model: &str| {
            render_with(Section::Cycle, &crate::config::GenerateConfig::new(model, "Lumen"))
        };
        assert!(cycle("gpt").contains("<perceive>\n**Perceive** (instant)\n"));
        assert!(cycle("gpt").contains("</consolidate>"));
        assert!(cycle("claude").contains("- **Perceive** (instant): "));
        assert!(cycle("llama").contains("  - Cue: "));
        assert!(cycle("gemini").contains("\n\n**Feel** (instant): "));
    }

    #[test]
    fn test_phase_instruction_has_no_echoed_step() {
        let phase = &super::super::tests::registry().cycle()[0];
        let ins = instruction(phase);
        assert!(ins.steps.is_empty());
        assert_eq!(ins.trigger, phase.directive);
        assert_eq!(ins.note.as_deref(), Some("instant"));
    }
}
