//! Exhaustive evaluation of every target height.

use super::{effort_for_target, Effort, TARGETS, TARGET_COUNT};

/// The cheapest target and what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Leveling {
    /// Lower of the two heights counted as level.
    pub target: u8,
    pub effort: Effort,
}

/// Total effort for each target height, indexed by target.
///
/// # Examples
///
/// ```
/// use groundwork_core::{survey, Effort};
///
/// let survey = survey(&[9, 0]);
/// assert_eq!(survey.effort(0), Some(Effort::of(8)));
/// assert_eq!(survey.effort(9), Some(Effort::of(9)));
///
/// let best = survey.best();
/// assert_eq!(best.effort, Effort::of(8));
/// assert_eq!(best.target, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Survey {
    efforts: [Effort; TARGET_COUNT],
}

impl Survey {
    pub fn efforts(&self) -> &[Effort; TARGET_COUNT] {
        &self.efforts
    }

    /// Effort for a single target, or `None` outside `0..=9`.
    pub fn effort(&self, target: u8) -> Option<Effort> {
        self.efforts.get(usize::from(target)).copied()
    }

    /// Iterates `(target, effort)` pairs in ascending target order.
    pub fn iter(&self) -> impl Iterator<Item = Leveling> + '_ {
        TARGETS
            .zip(self.efforts.iter())
            .map(|(target, &effort)| Leveling { target, effort })
    }

    /// The cheapest target.
    ///
    /// Ties go to the lowest target.
    pub fn best(&self) -> Leveling {
        let mut best = Leveling {
            target: 0,
            effort: self.efforts[0],
        };
        for candidate in self.iter().skip(1) {
            if candidate.effort < best.effort {
                best = candidate;
            }
        }
        best
    }
}

/// Evaluates every target in [`TARGETS`] against `heights`.
pub fn survey(heights: &[u8]) -> Survey {
    let mut efforts = [Effort::ZERO; TARGET_COUNT];
    for (slot, target) in efforts.iter_mut().zip(TARGETS) {
        *slot = effort_for_target(heights, target);
    }
    Survey { efforts }
}
