//! Error types for area validation

use std::fmt;

use thiserror::Error;

use crate::area::RawKind;

/// Reasons an area is rejected.
///
/// Validation stops at the first violation, so exactly one of these is
/// reported for a malformed area. Row and column indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelingError {
    /// The area has fewer than 1 or more than 50 rows.
    #[error("Area must contain between 1 and 50 elements, inclusive (got {rows})")]
    InvalidSize { rows: usize },

    /// A row arrived as something other than text.
    #[error("Each element of area must be a string (row {row} is {found})")]
    InvalidType { row: usize, found: RawKind },

    /// A row is empty or longer than 50 characters.
    #[error("Elements must contain between 1 and 50 characters, inclusive (row {row} has {len})")]
    InvalidElementSize { row: usize, len: usize },

    /// A row's length differs from the first row's.
    #[error(
        "All elements of area must be of the same length (row {row}: expected {expected}, found {found})"
    )]
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row contains something other than '0'-'9'.
    #[error(
        "Each element of area must contain digits ('0'-'9') only (row {row}, column {column}: {found:?})"
    )]
    InvalidContent {
        row: usize,
        column: usize,
        found: char,
    },
}

impl LevelingError {
    /// Returns the kind of violation without its location details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LevelingError::InvalidSize { .. } => ErrorKind::InvalidSize,
            LevelingError::InvalidType { .. } => ErrorKind::InvalidType,
            LevelingError::InvalidElementSize { .. } => ErrorKind::InvalidElementSize,
            LevelingError::InconsistentSize { .. } => ErrorKind::InconsistentSize,
            LevelingError::InvalidContent { .. } => ErrorKind::InvalidContent,
        }
    }

    /// Returns the offending row, if the violation is tied to one.
    pub fn row(&self) -> Option<usize> {
        match *self {
            LevelingError::InvalidSize { .. } => None,
            LevelingError::InvalidType { row, .. }
            | LevelingError::InvalidElementSize { row, .. }
            | LevelingError::InconsistentSize { row, .. }
            | LevelingError::InvalidContent { row, .. } => Some(row),
        }
    }
}

/// Fieldless mirror of [`LevelingError`] for matching on the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSize,
    InvalidType,
    InvalidElementSize,
    InconsistentSize,
    InvalidContent,
}

impl ErrorKind {
    /// Stable snake_case name, suitable for structured log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidSize => "invalid_size",
            ErrorKind::InvalidType => "invalid_type",
            ErrorKind::InvalidElementSize => "invalid_element_size",
            ErrorKind::InconsistentSize => "inconsistent_size",
            ErrorKind::InvalidContent => "invalid_content",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for area validation.
pub type Result<T> = std::result::Result<T, LevelingError>;
