//! Field values and their textual encoding.
//!
//! [`FieldValue`] is the closed set of value shapes a section field can
//! take. Keeping the set closed makes formatting total: there is no
//! "unsupported value" case to fall back from at runtime.

use std::path::{Path, PathBuf};

use vgproj_model::{SectionEnum, Vector2f, Vector2i, Vector3f, Vector3i, Vectorf};

/// Largest finite value representable as a 32 bit float; positive
/// infinity in float vectors is clamped to it.
const FLOAT32_MAX: f64 = 3.402823e38;

/// Smallest positive normal 32 bit float; negative infinity in float
/// vectors is clamped to it. The clamp is intentionally asymmetric.
const FLOAT32_MIN_POSITIVE: f64 = 1.175494e-38;

/// A single field value of a section.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Missing value, rendered as an empty string.
    Empty,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Filesystem path, rendered in forward-slash form.
    Path(PathBuf),
    /// Enum member, rendered as `<TypeName>_<MemberName>`.
    Enum {
        type_name: &'static str,
        member: &'static str,
    },
    Vec2f([f64; 2]),
    Vec3f([f64; 3]),
    Vecf(Vec<f64>),
    Vec2i([i64; 2]),
    Vec3i([i64; 3]),
}

impl FieldValue {
    /// Value for an enum member.
    pub fn enumeration<E: SectionEnum>(member: &E) -> Self {
        Self::Enum {
            type_name: E::TYPE_NAME,
            member: member.member_name(),
        }
    }

    /// Value for an optional path; `None` renders as an empty string.
    pub fn optional_path(path: Option<&PathBuf>) -> Self {
        match path {
            Some(path) => Self::Path(path.clone()),
            None => Self::Empty,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&Path> for FieldValue {
    fn from(value: &Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<&PathBuf> for FieldValue {
    fn from(value: &PathBuf) -> Self {
        Self::Path(value.clone())
    }
}

impl From<Vector2f> for FieldValue {
    fn from(value: Vector2f) -> Self {
        Self::Vec2f(value.components())
    }
}

impl From<Vector3f> for FieldValue {
    fn from(value: Vector3f) -> Self {
        Self::Vec3f(value.components())
    }
}

impl From<&Vectorf> for FieldValue {
    fn from(value: &Vectorf) -> Self {
        Self::Vecf(value.0.clone())
    }
}

impl From<Vector2i> for FieldValue {
    fn from(value: Vector2i) -> Self {
        Self::Vec2i(value.components())
    }
}

impl From<Vector3i> for FieldValue {
    fn from(value: Vector3i) -> Self {
        Self::Vec3i(value.components())
    }
}

/// Renders a field value in its canonical project-file form.
pub fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Empty => String::new(),
        FieldValue::Str(text) => text.clone(),
        FieldValue::Int(number) => number.to_string(),
        FieldValue::Float(number) => number.to_string(),
        FieldValue::Bool(flag) => if *flag { "True" } else { "False" }.to_string(),
        FieldValue::Path(path) => posix_form(path),
        FieldValue::Enum { type_name, member } => format!("{type_name}_{member}"),
        FieldValue::Vec2f(components) => join_floats(components),
        FieldValue::Vec3f(components) => join_floats(components),
        FieldValue::Vecf(components) => join_floats(components),
        FieldValue::Vec2i(components) => join_ints(components),
        FieldValue::Vec3i(components) => join_ints(components),
    }
}

/// Forward-slash form of a path. Windows-style separators become
/// slashes; drive letters and UNC prefixes are kept textually.
fn posix_form(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Float components joined by two spaces, seven decimals each.
fn join_floats(components: &[f64]) -> String {
    components
        .iter()
        .map(|&component| format!("{:.7}", clamp_infinite(component)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Integer components joined by two spaces.
fn join_ints(components: &[i64]) -> String {
    components
        .iter()
        .map(|component| component.to_string())
        .collect::<Vec<_>>()
        .join("  ")
}

/// Maps infinities onto the float32 extremes the host accepts.
fn clamp_infinite(value: f64) -> f64 {
    if value == f64::INFINITY {
        FLOAT32_MAX
    } else if value == f64::NEG_INFINITY {
        FLOAT32_MIN_POSITIVE
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgproj_model::MeshFormat;

    #[test]
    fn missing_value_renders_empty() {
        assert_eq!(format_value(&FieldValue::Empty), "");
        assert_eq!(format_value(&FieldValue::optional_path(None)), "");
    }

    #[test]
    fn windows_path_renders_with_forward_slashes() {
        let path = PathBuf::from("C:\\foo\\bar\\baz");
        assert_eq!(format_value(&FieldValue::Path(path)), "C:/foo/bar/baz");
    }

    #[test]
    fn posix_path_is_unchanged() {
        let path = PathBuf::from("/c/foo/bar/baz");
        assert_eq!(format_value(&FieldValue::Path(path)), "/c/foo/bar/baz");
    }

    #[test]
    fn unc_path_keeps_leading_double_slash() {
        let path = PathBuf::from("\\\\mnt\\test\\");
        assert_eq!(format_value(&FieldValue::Path(path)), "//mnt/test/");
    }

    #[test]
    fn enum_member_renders_type_and_member() {
        let value = FieldValue::enumeration(&MeshFormat::STL);
        assert_eq!(format_value(&value), "MeshFormat_STL");
    }

    #[test]
    fn float_vectors_use_seven_decimals_and_double_spaces() {
        assert_eq!(
            format_value(&FieldValue::from(Vector3f(1.0, 2.0, 3.0))),
            "1.0000000  2.0000000  3.0000000"
        );
        assert_eq!(
            format_value(&FieldValue::from(Vector2f(1.0, 2.0))),
            "1.0000000  2.0000000"
        );
        let variable: Vectorf = vec![1.0, 2.0, 3.0, 4.0].into();
        assert_eq!(
            format_value(&FieldValue::from(&variable)),
            "1.0000000  2.0000000  3.0000000  4.0000000"
        );
    }

    #[test]
    fn int_vectors_use_plain_decimals() {
        assert_eq!(format_value(&FieldValue::from(Vector3i(1, 2, 3))), "1  2  3");
        assert_eq!(format_value(&FieldValue::from(Vector2i(1, 2))), "1  2");
    }

    #[test]
    fn infinities_clamp_to_float32_extremes() {
        let positive = format_value(&FieldValue::Vecf(vec![f64::INFINITY]));
        assert_eq!(positive, format!("{FLOAT32_MAX:.7}"));
        let negative = format_value(&FieldValue::Vecf(vec![f64::NEG_INFINITY]));
        assert_eq!(negative, format!("{FLOAT32_MIN_POSITIVE:.7}"));
        assert!(negative.starts_with("0.0000000"));
    }

    #[test]
    fn booleans_render_as_pinned_literals() {
        assert_eq!(format_value(&FieldValue::Bool(true)), "True");
        assert_eq!(format_value(&FieldValue::Bool(false)), "False");
    }

    #[test]
    fn plain_numbers_use_display_form() {
        assert_eq!(format_value(&FieldValue::Float(0.5)), "0.5");
        assert_eq!(format_value(&FieldValue::Float(7200.0)), "7200");
        assert_eq!(format_value(&FieldValue::Int(-3)), "-3");
    }
}
