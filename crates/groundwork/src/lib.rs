//! Groundwork - minimum effort to level a grid of digit heights
//!
//! An area is a list of equal-length digit strings, one digit per cell.
//! A cell counts as level against target `t` when its height is `t` or
//! `t + 1`; [`get_minimum`] validates the area and returns the smallest
//! total effort over every target from 0 to 9.
//!
//! # Example
//!
//! ```rust
//! use groundwork::prelude::*;
//!
//! let effort = get_minimum(&["5781252", "2471255", "0000291", "1212489"]).unwrap();
//! assert_eq!(effort, Effort::of(53));
//!
//! let err = get_minimum::<&str>(&[]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidSize);
//! ```

pub mod error;
mod level;

#[cfg(feature = "console")]
pub mod console;

pub use error::{GroundworkError, Result};
pub use level::{get_minimum, get_minimum_raw, level, level_document, level_file, level_raw};

// Core types
pub use groundwork_core::{
    flatten, minimize, survey, Area, Effort, ErrorKind, FlatHeights, Leveling, LevelingError,
    RawKind, RawRow, Survey,
};

// Documents and settings
pub use groundwork_config::{AreaDocument, ConfigError, GroundworkConfig};

pub mod prelude {
    pub use super::{get_minimum, level, level_document};
    pub use super::{Area, AreaDocument, Effort, ErrorKind, Leveling, LevelingError, RawRow};
}
