const DEPENDENCIES_HEADER: &str = "[dependencies]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    Dependencies,
}

// `\r\n` splits into a line plus an empty one, and empty lines never change state.
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Collects the keys declared under the first `[dependencies]` table, in order.
///
/// A repeated `[dependencies]` header keeps the table open; scanning ends at the
/// first other table header that follows it. Blank lines, comments and lines
/// without `=` inside the table are skipped; values are dropped without being
/// looked at.
pub(crate) fn extract(text: &str) -> Vec<String> {
    let mut section = Section::Outside;
    let mut names = Vec::new();

    for line in text.split(is_line_break) {
        let line = line.trim();

        if line == DEPENDENCIES_HEADER {
            section = Section::Dependencies;
            continue;
        }

        if section == Section::Outside {
            continue;
        }

        if line.starts_with('[') {
            break;
        }

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, _)) = line.split_once('=') {
            names.push(key.trim().to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn no_dependencies_table() {
        let text = "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n\n[dev-dependencies]\nfoo = \"1\"\n";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn keys_keep_declaration_order() {
        let text = "[dependencies]\nserde = \"1.0\"\ntokio = { version = \"1\" }\n";
        assert_eq!(extract(text), ["serde", "tokio"]);
    }

    #[test]
    fn stops_at_next_table() {
        let text = "[dependencies]\n# comment\n\nfoo=1\n[dev-dependencies]\nbar=2\n";
        assert_eq!(extract(text), ["foo"]);
    }

    #[test]
    fn later_dependencies_table_is_not_reached() {
        let text = "[dependencies]\nfoo=1\n[features]\n[dependencies]\nbaz=2\n";
        assert_eq!(extract(text), ["foo"]);
    }

    #[test]
    fn repeated_header_without_other_table_continues() {
        let text = "[dependencies]\nfoo=1\n  [dependencies]  \nbaz=2\n";
        assert_eq!(extract(text), ["foo", "baz"]);
    }

    #[test]
    fn carriage_return_line_endings() {
        assert_eq!(extract("[dependencies]\rserde = 1\rtokio = 2\r"), ["serde", "tokio"]);
    }

    #[test]
    fn other_line_breaks() {
        let text = "[dependencies]\u{2028}a = 1\x0bb = 2\x0cc = 3\x1cd = 4\u{85}e = 5\u{2029}[features]\nf = 6";
        assert_eq!(extract(text), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn sub_tables_end_the_section() {
        let text = "[dependencies]\nfoo = \"1\"\n[dependencies.bar]\nversion = \"2\"\n";
        assert_eq!(extract(text), ["foo"]);
    }

    #[test]
    fn trims_and_splits_on_first_equals() {
        let text = "\t[dependencies]  \r\n   clap   =   { version = \"4\", features = [\"derive\"] }\r\n\"quoted\" = \"1\"\r\n";
        assert_eq!(extract(text), ["clap", "\"quoted\""]);
    }

    #[test]
    fn skips_lines_without_equals() {
        let text = "[dependencies]\n    features\nfoo = 1\n\"not a key\"\n  # bar = 2\n";
        assert_eq!(extract(text), ["foo"]);
    }

    #[test]
    fn keeps_duplicates_and_empty_keys() {
        let text = "[dependencies]\nfoo = 1\nfoo = 2\n= 3\n";
        assert_eq!(extract(text), ["foo", "foo", ""]);
    }

    #[test]
    fn content_before_the_table_is_ignored() {
        let text = "name = \"demo\"\n[package]\nedition = \"2021\"\n[dependencies]\nanyhow = \"1\"\n";
        assert_eq!(extract(text), ["anyhow"]);
    }

    #[test]
    fn extraction_is_repeatable() {
        let text = "[dependencies]\nserde = \"1\"\nserde_json = \"1\"\n[features]\ndefault = []\n";
        assert_eq!(extract(text), extract(text));
    }
}
