//! Escaping of section and key names.
//!
//! The host application's project file reader treats `[`, `]`, `;`, `=`
//! and newlines as syntax and additionally unescapes spaces, underscores
//! and backslashes in identifiers. Values are never escaped.

/// Escapes a section or key name for the project file.
///
/// Every character of the escape set is replaced by its two-character
/// sequence in a single pass over the original input, so sequences
/// produced by one rule are never re-escaped by another.
pub fn escape_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            ';' => escaped.push_str("\\;"),
            '[' => escaped.push_str("\\["),
            ']' => escaped.push_str("\\]"),
            '=' => escaped.push_str("\\="),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            ' ' => escaped.push_str("\\ "),
            '_' => escaped.push_str("\\_"),
            '\\' => escaped.push_str("\\\\"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const ESCAPE_MAP: [(char, &str); 9] = [
        (';', "\\;"),
        ('[', "\\["),
        (']', "\\]"),
        ('=', "\\="),
        ('\r', "\\r"),
        ('\n', "\\n"),
        (' ', "\\ "),
        ('_', "\\_"),
        ('\\', "\\\\"),
    ];

    #[test]
    fn every_syntax_character_is_escaped() {
        for (bad_char, escaped_char) in ESCAPE_MAP {
            let name = format!("section{bad_char}name");
            assert_eq!(escape_name(&name), format!("section{escaped_char}name"));
        }
    }

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(escape_name("VolumeSection0"), "VolumeSection0");
    }

    #[test]
    fn backslash_is_not_double_escaped() {
        // A backslash followed by a space must come out as the two
        // independent escapes, not as an escape of an escape.
        assert_eq!(escape_name("a\\ b"), "a\\\\\\ b");
    }

    #[test]
    fn empty_name_stays_empty() {
        assert_eq!(escape_name(""), "");
    }
}
