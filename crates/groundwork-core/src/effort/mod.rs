//! Leveling effort and the search for the cheapest target height
//!
//! A cell of height `h` is level against target `t` when `h` is `t` or
//! `t + 1`. Cells above `t + 1` are cut down to `t + 1`, cells below `t` are
//! filled up to `t`, and each unit moved costs one unit of effort.

mod search;


use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, RangeInclusive};

pub use search::{survey, Leveling, Survey};

use crate::MAX_HEIGHT;

/// Every target height worth trying.
///
/// Heights are single digits, so no target outside `0..=9` can beat the
/// best one inside it.
pub const TARGETS: RangeInclusive<u8> = 0..=MAX_HEIGHT;

/// Number of candidate targets.
pub const TARGET_COUNT: usize = MAX_HEIGHT as usize + 1;

/// Total adjustment needed to level an area.
///
/// # Examples
///
/// ```
/// use groundwork_core::Effort;
///
/// let total: Effort = [Effort::of(3), Effort::of(5)].into_iter().sum();
/// assert_eq!(total, Effort::of(8));
/// assert!(Effort::ZERO < total);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Effort {
    units: u32,
}

impl Effort {
    /// No effort at all.
    pub const ZERO: Effort = Effort { units: 0 };

    #[inline]
    pub const fn of(units: u32) -> Self {
        Effort { units }
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.units
    }
}

impl Add for Effort {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Effort::of(self.units + other.units)
    }
}

impl AddAssign for Effort {
    fn add_assign(&mut self, other: Self) {
        self.units += other.units;
    }
}

impl Sum for Effort {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Effort::ZERO, Add::add)
    }
}

impl From<Effort> for u32 {
    fn from(effort: Effort) -> u32 {
        effort.units
    }
}

impl fmt::Debug for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Effort({})", self.units)
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units)
    }
}

/// Effort to level one cell against `target`.
///
/// ```
/// use groundwork_core::{cell_effort, Effort};
///
/// assert_eq!(cell_effort(4, 4), Effort::ZERO);
/// assert_eq!(cell_effort(5, 4), Effort::ZERO);
/// assert_eq!(cell_effort(9, 4), Effort::of(4));
/// assert_eq!(cell_effort(1, 4), Effort::of(3));
/// ```
#[inline]
pub fn cell_effort(height: u8, target: u8) -> Effort {
    let gap = i32::from(height) - i32::from(target);
    let cost = match gap {
        g if g > 1 => g - 1,
        g if g < 0 => -g,
        _ => 0,
    };
    Effort::of(cost.unsigned_abs())
}

/// Total effort to level every cell against `target`.
pub fn effort_for_target(heights: &[u8], target: u8) -> Effort {
    heights.iter().map(|&h| cell_effort(h, target)).sum()
}

/// Minimum total effort over every target in [`TARGETS`].
///
/// Heights are expected to come from a validated [`Area`](crate::Area).
///
/// # Examples
///
/// ```
/// use groundwork_core::{flatten, minimize, Effort};
///
/// let heights = flatten(&["009"]).unwrap();
/// assert_eq!(minimize(&heights), Effort::of(8));
/// ```
pub fn minimize(heights: &[u8]) -> Effort {
    survey(heights).best().effort
}
