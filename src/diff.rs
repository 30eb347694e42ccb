//! Diff rendering between the remote baseline and the local file.

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

/// A rendered diff, ready for terminal display.
#[derive(Debug, Clone)]
pub struct DiffRender {
    /// True when the two inputs differ.
    pub changed: bool,
    /// Line-oriented rendering with `+`/`-` markers.
    pub text: String,
}

/// Render a line-level diff of `remote` (baseline) against `local`.
///
/// Pure and deterministic; inserted lines are marked `+`, deleted lines `-`,
/// unchanged lines are kept as dimmed context.
pub fn render(remote: &str, local: &str) -> DiffRender {
    let diff = TextDiff::from_lines(remote, local);

    let mut changed = false;
    let mut text = String::new();
    for change in diff.iter_all_changes() {
        let line = change.value();
        let rendered = match change.tag() {
            ChangeTag::Insert => {
                changed = true;
                format!("+ {}", line.trim_end_matches('\n')).green().to_string()
            }
            ChangeTag::Delete => {
                changed = true;
                format!("- {}", line.trim_end_matches('\n')).red().to_string()
            }
            ChangeTag::Equal => {
                format!("  {}", line.trim_end_matches('\n')).dimmed().to_string()
            }
        };
        text.push_str(&rendered);
        text.push('\n');
    }

    DiffRender { changed, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs_show_no_changes() {
        for content in ["", "A=1\n", "A=1\nB=2\nC=3\n", "no trailing newline"] {
            let rendered = render(content, content);
            assert!(!rendered.changed, "no-op diff must report unchanged");
        }
    }

    #[test]
    fn test_insertions_against_empty_baseline() {
        let rendered = render("", "A=1\nB=2\n");
        assert!(rendered.changed);
        assert!(rendered.text.contains("A=1"));
        assert!(rendered.text.contains("B=2"));
        // Pure insertions: nothing on the deletion side.
        assert!(!rendered.text.contains("- "));
    }

    #[test]
    fn test_changed_value_shows_both_sides() {
        let rendered = render("A=1\n", "A=2\n");
        assert!(rendered.changed);
        assert!(rendered.text.contains("A=1"));
        assert!(rendered.text.contains("A=2"));
    }

    #[test]
    fn test_deterministic() {
        let first = render("A=1\nB=2\n", "A=1\nB=3\n");
        let second = render("A=1\nB=2\n", "A=1\nB=3\n");
        assert_eq!(first.text, second.text);
        assert_eq!(first.changed, second.changed);
    }
}
