//! Malformed areas and the error kind each must raise.

use groundwork_core::{ErrorKind, RawKind, RawRow};

/// A malformed area.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub name: &'static str,
    pub rows: Vec<String>,
    pub kind: ErrorKind,
}

impl Rejection {
    fn new(name: &'static str, rows: Vec<String>, kind: ErrorKind) -> Self {
        Self { name, rows, kind }
    }
}

fn owned(rows: &[&str]) -> Vec<String> {
    rows.iter().map(|r| r.to_string()).collect()
}

/// Text areas that fail validation.
pub fn rejections() -> Vec<Rejection> {
    vec![
        Rejection::new("empty_area", Vec::new(), ErrorKind::InvalidSize),
        Rejection::new(
            "fifty_six_rows",
            (0..56).map(|_| "0".to_string()).collect(),
            ErrorKind::InvalidSize,
        ),
        Rejection::new("empty_row", owned(&["", "10"]), ErrorKind::InvalidElementSize),
        Rejection::new(
            "row_too_long",
            vec!["5".repeat(51)],
            ErrorKind::InvalidElementSize,
        ),
        Rejection::new(
            "rows_differ",
            owned(&["12", "123"]),
            ErrorKind::InconsistentSize,
        ),
        Rejection::new("letters", owned(&["4012", "TeXt"]), ErrorKind::InvalidContent),
        Rejection::new(
            "decimal_point",
            owned(&["401.2", "12345"]),
            ErrorKind::InvalidContent,
        ),
    ]
}

/// Areas whose rows are not text; every one must raise `InvalidType`.
pub fn invalid_type_cases() -> Vec<Vec<RawRow>> {
    [
        RawKind::Integer,
        RawKind::Float,
        RawKind::Map,
        RawKind::Boolean,
        RawKind::Sequence,
        RawKind::Null,
        RawKind::Bytes,
    ]
    .into_iter()
    .map(|kind| vec![RawRow::Other(kind), RawRow::Other(kind)])
    .collect()
}
