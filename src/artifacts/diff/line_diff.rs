use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, DiffTag, Edit, MyersDiff};
use colored::Color;
use std::io::Write;

const ANSI_RESET: &str = "\x1B[0m";

/// Line-oriented diff between two texts.
///
/// Holds only the flattened edit script; every rendering is derived from it on
/// demand so the same diff always produces identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    edits: Vec<Edit<String>>,
}

impl LineDiff {
    pub fn between(old: &str, new: &str) -> Self {
        let a = split_lines(old);
        let b = split_lines(new);

        LineDiff {
            edits: MyersDiff::new(&a, &b).diff(),
        }
    }

    /// Undecorated `(tag, line)` pairs
    pub fn diff(&self) -> Vec<(DiffTag, String)> {
        self.edits
            .iter()
            .map(|edit| (edit.tag(), edit.value().clone()))
            .collect()
    }

    pub fn flat(&self) -> Vec<String> {
        self.edits.iter().map(|edit| edit.to_string()).collect()
    }

    /// Same lines as [`LineDiff::flat`] wrapped in ANSI colors.
    ///
    /// The escape codes are always emitted, whether or not stdout is a terminal.
    pub fn formatted(&self) -> Vec<String> {
        self.edits
            .iter()
            .map(|edit| format!("{}{}{}", color_code(edit.tag()), edit, ANSI_RESET))
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.edits.iter().any(|edit| edit.tag() != DiffTag::Equal)
    }

    /// Writes a blank line followed by the formatted diff
    pub fn print(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}", self.formatted().join("\n"))?;

        Ok(())
    }
}

fn color_code(tag: DiffTag) -> String {
    match tag {
        DiffTag::Equal => ANSI_RESET.to_string(),
        DiffTag::Delete => format!("\x1B[{}m", Color::Red.to_fg_str()),
        DiffTag::Insert => format!("\x1B[{}m", Color::Green.to_fg_str()),
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::LineDiff;
    use crate::artifacts::diff::diff_algorithm::DiffTag;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn changed_text() -> (&'static str, &'static str) {
        (
            "unchanged line\nunchanged line\nunchanged line",
            "unchanged line\nchanged line\nunchanged line\nadded line",
        )
    }

    #[rstest]
    fn flat_renders_plain_markers(changed_text: (&str, &str)) {
        let (old, new) = changed_text;

        assert_eq!(
            LineDiff::between(old, new).flat(),
            vec![
                "    unchanged line",
                " +  changed line",
                "    unchanged line",
                " -  unchanged line",
                " +  added line",
            ]
        );
    }

    #[rstest]
    fn formatted_wraps_lines_in_ansi_colors(changed_text: (&str, &str)) {
        let (old, new) = changed_text;
        let formatted = LineDiff::between(old, new).formatted();

        assert_eq!(formatted[0], "\x1B[0m    unchanged line\x1B[0m");
        assert_eq!(formatted[1], "\x1B[32m +  changed line\x1B[0m");
        assert_eq!(formatted[3], "\x1B[31m -  unchanged line\x1B[0m");

        let joined = formatted.join("\n");
        assert!(joined.contains("\x1B[0m"));
        assert!(joined.contains("\x1B[31m "));
        assert!(joined.contains("\x1B[32m"));
    }

    #[rstest]
    fn raw_diff_keeps_tags_and_text(changed_text: (&str, &str)) {
        let (old, new) = changed_text;
        let raw = LineDiff::between(old, new).diff();

        assert_eq!(raw.len(), 5);
        assert_eq!(raw[1], (DiffTag::Insert, "changed line".to_string()));
        assert_eq!(raw[3], (DiffTag::Delete, "unchanged line".to_string()));
    }

    #[rstest]
    fn print_starts_with_blank_line(changed_text: (&str, &str)) {
        let (old, new) = changed_text;
        let diff = LineDiff::between(old, new);
        let mut out = Vec::new();

        diff.print(&mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, format!("\n{}\n", diff.formatted().join("\n")));
    }

    #[test]
    fn empty_texts_compare_as_one_empty_line() {
        let diff = LineDiff::between("", "");

        assert_eq!(diff.flat(), vec!["    "]);
        assert!(!diff.has_changes());
    }

    #[test]
    fn trailing_newline_produces_trailing_empty_line() {
        let diff = LineDiff::between("a\n", "a");

        assert_eq!(diff.flat(), vec!["    a", " -  "]);
    }
}
