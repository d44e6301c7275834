//! Host strategies: one presentation per render pattern.
//!
//! Renderers never branch on the host.  They build an [`Instruction`] and
//! hand it to the strategy chosen once per generation call:
//!
//! ```text
//! RenderPattern::CompactTrigger ─► CompactTrigger  cue phrases
//! RenderPattern::TaggedExamples ─► TaggedExamples  <tag> blocks + worked example
//! RenderPattern::Stepwise       ─► Stepwise        numbered steps + guard
//! RenderPattern::Explicit       ─► Explicit        spelled out, rules repeated
//! RenderPattern::Balanced       ─► Balanced        plain bullets
//! ```
//!
//! Every form prints the instruction label, note, directive and details
//! verbatim, so names, percentages and reference lines survive whichever
//! strategy is picked.  Strategies differ in layout and repetition only.

use crate::registry::{ProcessDef, RenderPattern};

use super::text::{indent, tag_name};

// ============================================================================
// Instruction
// ============================================================================

/// One renderable instruction: a process, a phase, or similar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instruction {
    pub label: String,
    /// Short parenthetical after the label, e.g. a duration or percentage.
    pub note: Option<String>,
    pub trigger: String,
    pub directive: String,
    pub steps: Vec<String>,
    pub example: Option<String>,
    pub guard: Option<String>,
    /// Extra lines every form prints beneath the instruction.
    pub details: Vec<String>,
}

impl Instruction {
    pub fn new(label: impl Into<String>, directive: impl Into<String>) -> Self {
        let directive = directive.into();
        Self {
            label: label.into(),
            trigger: directive.clone(),
            steps: vec![directive.clone()],
            directive,
            ..Self::default()
        }
    }

    /// The presentation inputs of a process.
    pub fn for_process(process: &ProcessDef) -> Self {
        Self {
            label: process.name.clone(),
            note: None,
            trigger: process.variants.trigger.clone(),
            directive: process.directive.clone(),
            steps: process.variants.steps.clone(),
            example: Some(process.variants.example.clone()),
            guard: Some(process.variants.guard.clone()),
            details: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    fn head(&self) -> String {
        match &self.note {
            Some(note) => format!("**{}** ({})", self.label, note),
            None => format!("**{}**", self.label),
        }
    }

    fn detail_block(&self, width: usize) -> String {
        self.details
            .iter()
            .map(|d| format!("\n{}{}", " ".repeat(width), d))
            .collect()
    }
}

// ============================================================================
// Strategy trait
// ============================================================================

/// Presentation for one render pattern.
///
/// The four `render_*` forms have shared defaults; an implementation picks
/// its primary form in [`HostStrategy::render`] and may restyle sections,
/// lists and rule blocks.
pub trait HostStrategy: Send + Sync {
    fn pattern(&self) -> RenderPattern;

    /// Compact cue: `- **Label** (note): trigger`.
    fn render_trigger(&self, ins: &Instruction) -> String {
        format!("- {}: {}{}", ins.head(), ins.trigger, ins.detail_block(2))
    }

    /// Tagged block with the cue and a worked example.
    fn render_detailed(&self, ins: &Instruction) -> String {
        let tag = tag_name(&ins.label);
        let mut out = format!("<{}>\n{}\n{}", tag, ins.head(), ins.directive);
        if ins.trigger != ins.directive {
            out.push_str(&format!("\nCue: {}", ins.trigger));
        }
        if let Some(example) = &ins.example {
            out.push_str(&format!("\nExample: {}", example));
        }
        out.push_str(&ins.detail_block(0));
        out.push_str(&format!("\n</{}>", tag));
        out
    }

    /// Numbered steps closed by the guard.
    fn render_stepwise(&self, ins: &Instruction) -> String {
        let mut out = format!("{}: {}", ins.head(), ins.directive);
        for (i, step) in ins.steps.iter().enumerate() {
            out.push_str(&format!("\n   {}. {}", i + 1, step));
        }
        if let Some(guard) = &ins.guard {
            out.push_str(&format!("\n   Guard: {}", guard));
        }
        out.push_str(&ins.detail_block(3));
        out
    }

    /// Plain bullet: `- **Label** (note): directive`.
    fn render_default(&self, ins: &Instruction) -> String {
        format!("- {}: {}{}", ins.head(), ins.directive, ins.detail_block(2))
    }

    /// This strategy's primary form.
    fn render(&self, ins: &Instruction) -> String;

    /// Render several instructions, one block each.
    fn render_all(&self, instructions: &[Instruction]) -> String {
        let sep = if self.block_spacing() { "\n\n" } else { "\n" };
        instructions
            .iter()
            .map(|ins| self.render(ins))
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Whether rendered instructions need a blank line between them.
    fn block_spacing(&self) -> bool {
        false
    }

    fn section(&self, title: &str, body: &str) -> String {
        format!("## {}\n\n{}", title, body)
    }

    fn subheading(&self, title: &str) -> String {
        format!("### {}", title)
    }

    fn list(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Rules the persona must always keep.
    fn rules(&self, rules: &[String]) -> String {
        self.list(rules)
    }
}

// ============================================================================
// Implementations
// ============================================================================

/// Short cue phrases; trusts the host to expand them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactTrigger;

impl HostStrategy for CompactTrigger {
    fn pattern(&self) -> RenderPattern {
        RenderPattern::CompactTrigger
    }

    fn render(&self, ins: &Instruction) -> String {
        self.render_trigger(ins)
    }
}

/// Tagged blocks, each carrying one worked example.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedExamples;

impl HostStrategy for TaggedExamples {
    fn pattern(&self) -> RenderPattern {
        RenderPattern::TaggedExamples
    }

    fn render(&self, ins: &Instruction) -> String {
        self.render_detailed(ins)
    }

    fn block_spacing(&self) -> bool {
        true
    }

    fn section(&self, title: &str, body: &str) -> String {
        let tag = tag_name(title);
        format!("## {}\n\n<{}>\n{}\n</{}>", title, tag, body, tag)
    }

    fn rules(&self, rules: &[String]) -> String {
        format!("<rules>\n{}\n</rules>", self.list(rules))
    }
}

/// Numbered procedures with explicit guards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stepwise;

impl HostStrategy for Stepwise {
    fn pattern(&self) -> RenderPattern {
        RenderPattern::Stepwise
    }

    fn render(&self, ins: &Instruction) -> String {
        self.render_stepwise(ins)
    }

    fn block_spacing(&self) -> bool {
        true
    }

    fn list(&self, items: &[String]) -> String {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Everything spelled out, key rules stated twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Explicit;

impl HostStrategy for Explicit {
    fn pattern(&self) -> RenderPattern {
        RenderPattern::Explicit
    }

    fn render(&self, ins: &Instruction) -> String {
        let mut out = self.render_default(ins);
        out.push_str(&format!("\n  - Cue: {}", ins.trigger));
        if let Some(guard) = &ins.guard {
            out.push_str(&format!("\n  - Never: {}", guard));
        }
        out
    }

    fn section(&self, title: &str, body: &str) -> String {
        format!(
            "## {}\n\n{}\n\nFollow the {} instructions above in every reply.",
            title, body, title
        )
    }

    fn rules(&self, rules: &[String]) -> String {
        let listed = self.list(rules);
        format!(
            "{}\n\nRepeat. These rules always apply:\n{}",
            listed,
            indent(&listed, 2)
        )
    }
}

/// Light structure for hosts without a known preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct Balanced;

impl HostStrategy for Balanced {
    fn pattern(&self) -> RenderPattern {
        RenderPattern::Balanced
    }

    fn render(&self, ins: &Instruction) -> String {
        self.render_default(ins)
    }
}

static COMPACT_TRIGGER: CompactTrigger = CompactTrigger;
static TAGGED_EXAMPLES: TaggedExamples = TaggedExamples;
static STEPWISE: Stepwise = Stepwise;
static EXPLICIT: Explicit = Explicit;
static BALANCED: Balanced = Balanced;

/// The strategy for a render pattern.
pub fn strategy_for(pattern: RenderPattern) -> &'static dyn HostStrategy {
    match pattern {
        RenderPattern::CompactTrigger => &COMPACT_TRIGGER,
        RenderPattern::TaggedExamples => &TAGGED_EXAMPLES,
        RenderPattern::Stepwise => &STEPWISE,
        RenderPattern::Explicit => &EXPLICIT,
        RenderPattern::Balanced => &BALANCED,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Instruction {
        Instruction {
            label: "Salience Gate".into(),
            note: Some("brief".into()),
            trigger: "what matters most here".into(),
            directive: "Respond to the most important thing first.".into(),
            steps: vec!["List the parts.".into(), "Rank them.".into()],
            example: Some("Sleep before recipes.".into()),
            guard: Some("Never skip distress.".into()),
            details: vec!["Links: feeds Working Buffer".into()],
        }
    }

    #[test]
    fn test_strategy_for_matches_pattern() {
        for pattern in RenderPattern::ALL {
            assert_eq!(strategy_for(pattern).pattern(), pattern);
        }
    }

    #[test]
    fn test_every_form_keeps_label_note_and_details() {
        let ins = sample();
        for pattern in RenderPattern::ALL {
            let out = strategy_for(pattern).render(&ins);
            assert!(out.contains("**Salience Gate** (brief)"), "{:?}: {}", pattern, out);
            assert!(out.contains("Links: feeds Working Buffer"), "{:?}", pattern);
        }
    }

    #[test]
    fn test_compact_uses_trigger() {
        let out = CompactTrigger.render(&sample());
        assert_eq!(
            out,
            "- **Salience Gate** (brief): what matters most here\n  Links: feeds Working Buffer"
        );
    }

    #[test]
    fn test_tagged_wraps_with_example() {
        let out = TaggedExamples.render(&sample());
        assert!(out.starts_with("<salience_gate>\n"));
        assert!(out.ends_with("</salience_gate>"));
        assert!(out.contains("Example: Sleep before recipes."));
        let section = TaggedExamples.section("Turn Cycle", "body");
        assert_eq!(section, "## Turn Cycle\n\n<turn_cycle>\nbody\n</turn_cycle>");
    }

    #[test]
    fn test_stepwise_numbers_steps_and_guard() {
        let out = Stepwise.render(&sample());
        assert!(out.contains("\n   1. List the parts.\n   2. Rank them."));
        assert!(out.contains("Guard: Never skip distress."));
        assert_eq!(Stepwise.list(&["a".into(), "b".into()]), "1. a\n2. b");
    }

    #[test]
    fn test_explicit_repeats_rules() {
        let rules = vec!["Be honest.".to_string()];
        let out = Explicit.rules(&rules);
        assert_eq!(out.matches("Be honest.").count(), 2);
        assert!(Explicit.render(&sample()).contains("Never: Never skip distress."));
    }

    #[test]
    fn test_balanced_uses_directive() {
        let out = Balanced.render(&sample());
        assert!(out.starts_with("- **Salience Gate** (brief): Respond to the most important thing first."));
    }

    #[test]
    fn test_instruction_new_fills_trigger_and_steps() {
        let ins = Instruction::new("Perceive", "Take it all in.").with_note("instant");
        assert_eq!(ins.trigger, "Take it all in.");
        assert_eq!(ins.steps, vec!["Take it all in.".to_string()]);
        assert_eq!(ins.note.as_deref(), Some("instant"));
    }
}
