//! The base section serializer.
//!
//! Renders one section: a `[name]` header line, one tab-indented
//! `key = value` line per field, optional metadata lines, and a single
//! blank line as terminator. Every entity serializer bottoms out here.

use crate::escape::escape_name;
use crate::value::{FieldValue, format_value};

/// One named field of a section, in emission order.
pub type Field<'a> = (&'a str, FieldValue);

/// Serializes a section without renaming or metadata.
pub fn serialize(name: &str, fields: &[Field<'_>]) -> String {
    serialize_with_renaming(name, fields, &[], &[])
}

/// Serializes a section.
///
/// `renaming` maps field names to the display names emitted instead;
/// unlisted fields keep their own name. `metadata` pairs are appended
/// after the fields with their values written raw (keys are still
/// escaped). Output order follows input order throughout.
pub fn serialize_with_renaming(
    name: &str,
    fields: &[Field<'_>],
    renaming: &[(&str, &str)],
    metadata: &[(String, String)],
) -> String {
    let mut out = String::new();
    out.push('[');
    out.push_str(&escape_name(name));
    out.push_str("]\n");

    for (key, value) in fields {
        let display_key = renaming
            .iter()
            .find(|(original, _)| original == key)
            .map_or(*key, |(_, renamed)| *renamed);
        out.push('\t');
        out.push_str(&escape_name(display_key));
        out.push_str(" = ");
        out.push_str(&format_value(value));
        out.push('\n');
    }

    for (tag, description) in metadata {
        out.push('\t');
        out.push_str(&escape_name(tag));
        out.push_str(" = ");
        out.push_str(description);
        out.push('\n');
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fields_and_terminator() {
        let fields = [("key", FieldValue::from("value"))];
        let serialized = serialize("test", &fields);
        assert_eq!(serialized, "[test]\n\tkey = value\n\n");
    }

    #[test]
    fn empty_section_is_header_and_blank_line() {
        let serialized = serialize("test", &[]);
        assert_eq!(serialized, "[test]\n\n");
    }

    #[test]
    fn renaming_only_affects_listed_keys() {
        let fields = [
            ("original", FieldValue::from("data")),
            ("original2", FieldValue::from("data2")),
            ("original3", FieldValue::from("data3")),
        ];
        let renaming = [("original", "renamed"), ("original2", "renamed2")];
        let serialized = serialize_with_renaming("test", &fields, &renaming, &[]);
        assert_eq!(
            serialized,
            "[test]\n\trenamed = data\n\trenamed2 = data2\n\toriginal3 = data3\n\n"
        );
    }

    #[test]
    fn renamed_keys_are_escaped() {
        let fields = [("LotNumber", FieldValue::from("42"))];
        let renaming = [("LotNumber", "Lot number")];
        let serialized = serialize_with_renaming("test", &fields, &renaming, &[]);
        assert_eq!(serialized, "[test]\n\tLot\\ number = 42\n\n");
    }

    #[test]
    fn metadata_follows_fields_in_order() {
        let metadata = vec![
            ("tag1".to_string(), "val1".to_string()),
            ("tag2".to_string(), "val2".to_string()),
        ];
        let serialized = serialize_with_renaming("test", &[], &[], &metadata);
        assert_eq!(serialized, "[test]\n\ttag1 = val1\n\ttag2 = val2\n\n");
    }

    #[test]
    fn metadata_values_are_written_raw() {
        let metadata = vec![("tag".to_string(), "a_b c".to_string())];
        let serialized = serialize_with_renaming("test", &[], &[], &metadata);
        assert_eq!(serialized, "[test]\n\ttag = a_b c\n\n");
    }

    #[test]
    fn section_name_is_escaped() {
        let serialized = serialize("bad name_here", &[]);
        assert!(serialized.starts_with("[bad\\ name\\_here]\n"));
    }

    #[test]
    fn missing_value_yields_empty_string() {
        let fields = [("key", FieldValue::Empty)];
        let serialized = serialize("test", &fields);
        assert_eq!(serialized, "[test]\n\tkey = \n\n");
    }

    #[test]
    fn output_is_deterministic() {
        let fields = [
            ("a", FieldValue::from(1.5)),
            ("b", FieldValue::from(true)),
        ];
        assert_eq!(serialize("test", &fields), serialize("test", &fields));
    }
}
