//! Small text helpers shared by the section renderers.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_TAG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// A unit value as a whole percentage: `0.92` → `"92%"`.
pub fn percent(value: f32) -> String {
    format!("{}%", (value * 100.0).round() as i32)
}

/// Turn a heading into a tag name: `"Turn Cycle"` → `"turn_cycle"`.
pub fn tag_name(title: &str) -> String {
    let lower = title.to_ascii_lowercase();
    NON_TAG_CHARS
        .replace_all(&lower, "_")
        .trim_matches('_')
        .to_string()
}

/// `"a, b and c"`.
pub fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Indent every line of `text` by `width` spaces.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds() {
        assert_eq!(percent(0.92), "92%");
        assert_eq!(percent(0.1), "10%");
        assert_eq!(percent(0.0), "0%");
        assert_eq!(percent(1.0), "100%");
        assert_eq!(percent(0.456), "46%");
    }

    #[test]
    fn test_tag_name() {
        assert_eq!(tag_name("Turn Cycle"), "turn_cycle");
        assert_eq!(tag_name("Memory and Continuity"), "memory_and_continuity");
        assert_eq!(tag_name("  Host Notes: Llama (local) "), "host_notes_llama_local");
    }

    #[test]
    fn test_join_natural() {
        assert_eq!(join_natural(&[]), "");
        assert_eq!(join_natural(&["a".into()]), "a");
        assert_eq!(join_natural(&["a".into(), "b".into(), "c".into()]), "a, b and c");
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a\n\nb", 2), "  a\n\n  b");
    }
}
