//! Untyped rows as they arrive from a generic document.

use std::fmt;

/// The shape of a non-text row value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKind {
    Integer,
    Float,
    Boolean,
    Null,
    Bytes,
    Sequence,
    Map,
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RawKind::Integer => "an integer",
            RawKind::Float => "a float",
            RawKind::Boolean => "a boolean",
            RawKind::Null => "null",
            RawKind::Bytes => "a byte string",
            RawKind::Sequence => "a sequence",
            RawKind::Map => "a map",
        };
        f.write_str(name)
    }
}

/// A row whose type has not been checked yet.
///
/// Documents parsed from TOML or YAML can hold any value where a row is
/// expected. Text rows go on to the usual length and content checks; any
/// other value is rejected as an invalid type.
///
/// # Examples
///
/// ```
/// use groundwork_core::{Area, ErrorKind, RawKind, RawRow};
///
/// let rows = [RawRow::text("40"), RawRow::Other(RawKind::Integer)];
/// let err = Area::from_raw(&rows).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidType);
/// assert_eq!(err.row(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRow {
    Text(String),
    Other(RawKind),
}

impl RawRow {
    /// Creates a text row.
    pub fn text(s: impl Into<String>) -> Self {
        RawRow::Text(s.into())
    }

    /// Returns the row text, or the kind of value found instead.
    pub fn as_text(&self) -> Result<&str, RawKind> {
        match self {
            RawRow::Text(s) => Ok(s.as_str()),
            RawRow::Other(kind) => Err(*kind),
        }
    }
}

impl From<&str> for RawRow {
    fn from(s: &str) -> Self {
        RawRow::Text(s.to_string())
    }
}

impl From<String> for RawRow {
    fn from(s: String) -> Self {
        RawRow::Text(s)
    }
}

#[cfg(feature = "serde")]
mod de {
    use std::fmt;

    use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

    use super::{RawKind, RawRow};

    struct RawRowVisitor;

    impl<'de> Visitor<'de> for RawRowVisitor {
        type Value = RawRow;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("any value")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<RawRow, E> {
            Ok(RawRow::Text(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<RawRow, E> {
            Ok(RawRow::Text(v))
        }

        fn visit_char<E: de::Error>(self, v: char) -> Result<RawRow, E> {
            Ok(RawRow::Text(v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<RawRow, E> {
            Ok(RawRow::Other(RawKind::Boolean))
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> Result<RawRow, E> {
            Ok(RawRow::Other(RawKind::Integer))
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> Result<RawRow, E> {
            Ok(RawRow::Other(RawKind::Integer))
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<RawRow, E> {
            Ok(RawRow::Other(RawKind::Float))
        }

        fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<RawRow, E> {
            Ok(RawRow::Other(RawKind::Bytes))
        }

        fn visit_unit<E: de::Error>(self) -> Result<RawRow, E> {
            Ok(RawRow::Other(RawKind::Null))
        }

        fn visit_none<E: de::Error>(self) -> Result<RawRow, E> {
            Ok(RawRow::Other(RawKind::Null))
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawRow, D::Error> {
            RawRow::deserialize(deserializer)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawRow, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(RawRow::Other(RawKind::Sequence))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawRow, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(RawRow::Other(RawKind::Map))
        }
    }

    impl<'de> Deserialize<'de> for RawRow {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(RawRowVisitor)
        }
    }
}
