//! Common value types shared by all section records.
//!
//! Fixed-arity vectors are distinct types rather than plain arrays because
//! they serialize differently (float components are written with a fixed
//! number of decimals, integer components as plain decimals).

use serde::{Deserialize, Serialize};

/// Enum types whose members are rendered as `<TypeName>_<MemberName>`
/// in the project file.
pub trait SectionEnum {
    /// Name of the enum type as it appears on the wire.
    const TYPE_NAME: &'static str;

    /// Name of the member as it appears on the wire.
    fn member_name(&self) -> &'static str;
}

/// Declares a plain section enum and wires up [`SectionEnum`] so the
/// serializer can render members without per-type string tables.
macro_rules! section_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::types::SectionEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn member_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

pub(crate) use section_enum;

/// 2D float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2f(pub f64, pub f64);

/// 3D float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3f(pub f64, pub f64, pub f64);

/// Variable-length float vector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vectorf(pub Vec<f64>);

/// 2D integer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vector2i(pub i64, pub i64);

/// 3D integer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vector3i(pub i64, pub i64, pub i64);

impl Vector2f {
    pub fn components(&self) -> [f64; 2] {
        [self.0, self.1]
    }
}

impl Vector3f {
    pub fn components(&self) -> [f64; 3] {
        [self.0, self.1, self.2]
    }
}

impl Vector2i {
    pub fn components(&self) -> [i64; 2] {
        [self.0, self.1]
    }
}

impl Vector3i {
    pub fn components(&self) -> [i64; 3] {
        [self.0, self.1, self.2]
    }
}

impl Vectorf {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<f64>> for Vectorf {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for Vectorf {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    section_enum! {
        enum Sample {
            First,
            Second,
        }
    }

    #[test]
    fn section_enum_exposes_wire_names() {
        assert_eq!(Sample::TYPE_NAME, "Sample");
        assert_eq!(Sample::First.member_name(), "First");
        assert_eq!(Sample::Second.member_name(), "Second");
    }

    #[test]
    fn vectors_expose_components_in_order() {
        assert_eq!(Vector3f(1.0, 2.0, 3.0).components(), [1.0, 2.0, 3.0]);
        assert_eq!(Vector2i(4, 5).components(), [4, 5]);
        let v: Vectorf = vec![1.0, 2.0].into();
        assert_eq!(v.len(), 2);
    }
}
