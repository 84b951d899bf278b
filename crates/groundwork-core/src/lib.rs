//! Groundwork Core - Area validation and leveling effort search
//!
//! This crate provides the two stages of a leveling computation:
//! - Area validation, which turns rows of digit strings into flat heights
//! - Effort minimization, which searches every target height for the
//!   cheapest way to level those heights
//!
//! # Example
//!
//! ```
//! use groundwork_core::{minimize, Area, Effort};
//!
//! let area = Area::from_rows(&["10", "31"]).unwrap();
//! assert_eq!(minimize(area.heights()), Effort::of(2));
//! ```

pub mod area;
pub mod effort;
pub mod error;

#[cfg(test)]
mod error_tests;

pub use area::{flatten, Area, FlatHeights, RawKind, RawRow};
pub use effort::{cell_effort, effort_for_target, minimize, survey, Effort, Leveling, Survey};
pub use error::{ErrorKind, LevelingError, Result};

/// Minimum number of rows in an area.
pub const MIN_ROWS: usize = 1;

/// Maximum number of rows in an area.
pub const MAX_ROWS: usize = 50;

/// Minimum number of characters in a row.
pub const MIN_ROW_LEN: usize = 1;

/// Maximum number of characters in a row.
pub const MAX_ROW_LEN: usize = 50;

/// Highest height a single cell can encode.
pub const MAX_HEIGHT: u8 = 9;
