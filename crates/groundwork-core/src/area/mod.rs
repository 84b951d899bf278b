//! Area validation and flattening
//!
//! An area arrives as rows of digit strings. Validation runs row by row and
//! stops at the first violation, checking in a fixed order:
//!
//! 1. the number of rows is within 1..=50
//! 2. the first row fixes the reference width
//! 3. for each row: it is text, its length is within 1..=50, its length
//!    matches the reference, and every character is '0'-'9'
//!
//! Row lengths are measured in bytes, so a row holding a multi-byte
//! character still reaches the content check when its byte length matches.

mod raw;


use std::ops::Deref;

pub use raw::{RawKind, RawRow};

use crate::error::{LevelingError, Result};
use crate::{MAX_ROWS, MAX_ROW_LEN, MIN_ROWS, MIN_ROW_LEN};

/// Row-major cell heights, every value in `0..=9`.
///
/// Only produced by validation, so consumers can rely on the bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FlatHeights {
    heights: Vec<u8>,
}

impl FlatHeights {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.heights
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.heights
    }
}

impl Deref for FlatHeights {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.heights
    }
}

impl AsRef<[u8]> for FlatHeights {
    fn as_ref(&self) -> &[u8] {
        &self.heights
    }
}

/// A validated area.
///
/// # Examples
///
/// ```
/// use groundwork_core::Area;
///
/// let area = Area::from_rows(&["54454", "61551"]).unwrap();
/// assert_eq!(area.rows(), 2);
/// assert_eq!(area.width(), 5);
/// assert_eq!(area.height(1, 0), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    heights: FlatHeights,
    rows: usize,
    width: usize,
}

impl Area {
    /// Validates typed rows.
    pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self> {
        validate(rows.len(), rows.iter().map(|r| Ok(r.as_ref())))
    }

    /// Validates rows whose type is not yet known.
    ///
    /// A non-text row fails with [`LevelingError::InvalidType`] when the
    /// row-by-row scan reaches it.
    pub fn from_raw(rows: &[RawRow]) -> Result<Self> {
        validate(rows.len(), rows.iter().map(RawRow::as_text))
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells, `rows * width`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.heights.len()
    }

    pub fn heights(&self) -> &FlatHeights {
        &self.heights
    }

    pub fn into_heights(self) -> FlatHeights {
        self.heights
    }

    /// Height at `(row, column)`, or `None` when out of bounds.
    pub fn height(&self, row: usize, column: usize) -> Option<u8> {
        if row >= self.rows || column >= self.width {
            return None;
        }
        self.heights.get(row * self.width + column).copied()
    }
}

/// Validates `rows` and returns their heights in row-major order.
///
/// # Examples
///
/// ```
/// use groundwork_core::flatten;
///
/// let heights = flatten(&["10", "31"]).unwrap();
/// assert_eq!(heights.as_slice(), &[1, 0, 3, 1]);
/// ```
pub fn flatten<R: AsRef<str>>(rows: &[R]) -> Result<FlatHeights> {
    Area::from_rows(rows).map(Area::into_heights)
}

type RowText<'a> = std::result::Result<&'a str, RawKind>;

fn validate<'a, I>(count: usize, rows: I) -> Result<Area>
where
    I: Iterator<Item = RowText<'a>>,
{
    check_area_size(count)?;

    let mut rows = rows.peekable();
    let Some(&first) = rows.peek() else {
        return Err(LevelingError::InvalidSize { rows: 0 });
    };
    let width = element_size(0, element_text(0, first)?)?;

    let mut heights = Vec::with_capacity(count * width);
    for (row, text) in rows.enumerate() {
        let text = element_text(row, text)?;
        let len = element_size(row, text)?;
        check_against_reference(row, len, width)?;
        push_digits(row, text, &mut heights)?;
    }

    Ok(Area {
        heights: FlatHeights { heights },
        rows: count,
        width,
    })
}

fn check_area_size(rows: usize) -> Result<()> {
    if (MIN_ROWS..=MAX_ROWS).contains(&rows) {
        Ok(())
    } else {
        Err(LevelingError::InvalidSize { rows })
    }
}

fn element_text(row: usize, text: RowText<'_>) -> Result<&str> {
    text.map_err(|found| LevelingError::InvalidType { row, found })
}

fn element_size(row: usize, text: &str) -> Result<usize> {
    let len = text.len();
    if (MIN_ROW_LEN..=MAX_ROW_LEN).contains(&len) {
        Ok(len)
    } else {
        Err(LevelingError::InvalidElementSize { row, len })
    }
}

fn check_against_reference(row: usize, len: usize, expected: usize) -> Result<()> {
    if len == expected {
        Ok(())
    } else {
        Err(LevelingError::InconsistentSize {
            row,
            expected,
            found: len,
        })
    }
}

fn push_digits(row: usize, text: &str, heights: &mut Vec<u8>) -> Result<()> {
    for (column, c) in text.chars().enumerate() {
        match c {
            '0'..='9' => heights.push(c as u8 - b'0'),
            found => {
                return Err(LevelingError::InvalidContent { row, column, found });
            }
        }
    }
    Ok(())
}
