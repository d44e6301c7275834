//! Document assembler: joins rendered parts with a fixed separator.

/// Separator between parts of one document.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// Concatenate `parts` in order.
///
/// Part content is copied byte for byte; only trailing newlines at the very
/// end are normalised so the document ends with exactly one.
pub fn assemble<S: AsRef<str>>(parts: &[S]) -> String {
    let mut out = parts
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<&str>>()
        .join(SEPARATOR);
    let kept = out.trim_end_matches('\n').len();
    out.truncate(kept);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_separator() {
        assert_eq!(assemble(&["# A", "## B"]), "# A\n\n---\n\n## B\n");
    }

    #[test]
    fn test_single_trailing_newline() {
        assert_eq!(assemble(&["body\n\n"]), "body\n");
    }

    #[test]
    fn test_inner_content_untouched() {
        assert_eq!(assemble(&["a  \n", "b"]), "a  \n\n\n---\n\nb\n");
    }

    #[test]
    fn test_deterministic() {
        let parts = vec!["x".to_string(), "y".to_string()];
        assert_eq!(assemble(&parts), assemble(&parts));
    }
}
