//! Escape round-trip tests against a minimal unescaper.

use proptest::prelude::*;
use vgproj_xvgi::escape_name;

/// Reverses the key escaping. Errors on a dangling or unknown escape.
fn unescape_name(escaped: &str) -> Result<String, String> {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(';') => out.push(';'),
            Some('[') => out.push('['),
            Some(']') => out.push(']'),
            Some('=') => out.push('='),
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some(' ') => out.push(' '),
            Some('_') => out.push('_'),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(format!("unknown escape: \\{other}")),
            None => return Err("dangling escape".to_string()),
        }
    }
    Ok(out)
}

#[test]
fn known_names_round_trip() {
    for name in [
        "VolumeSection0_FileSection0",
        "Lot number",
        "a;b[c]d=e",
        "back\\slash",
        "line\nbreak\r",
        "",
    ] {
        let escaped = escape_name(name);
        assert_eq!(unescape_name(&escaped).expect("unescape"), name);
    }
}

proptest! {
    #[test]
    fn escaping_round_trips(name in "\\PC*") {
        let escaped = escape_name(&name);
        prop_assert_eq!(unescape_name(&escaped).expect("unescape"), name);
    }

    #[test]
    fn escaped_names_contain_no_bare_specials(name in "\\PC*") {
        let escaped = escape_name(&name);
        let mut pending_escape = false;
        for c in escaped.chars() {
            if pending_escape {
                pending_escape = false;
                continue;
            }
            if c == '\\' {
                pending_escape = true;
                continue;
            }
            prop_assert!(!matches!(c, ';' | '[' | ']' | '=' | '\r' | '\n' | ' ' | '_'));
        }
        prop_assert!(!pending_escape);
    }
}
