//! Leveling entry points.
//!
//! Logging levels:
//! - **INFO**: Start and end of each run, with the chosen target
//! - **DEBUG**: Effort of every candidate target
//! - **WARN**: Rejected areas

use std::path::Path;
use std::time::Instant;

use groundwork_config::AreaDocument;
use groundwork_core::{survey, Area, Effort, Leveling, LevelingError, RawRow};
use tracing::{debug, info, warn};

use crate::error::Result;

/// Label used in log output for areas passed in directly.
const DEFAULT_LABEL: &str = "area";

/// Returns the minimum total effort to level `rows`.
///
/// # Errors
///
/// Returns the first validation failure, checked row by row.
///
/// # Examples
///
/// ```
/// use groundwork::{get_minimum, Effort, ErrorKind};
///
/// assert_eq!(get_minimum(&["54454", "61551"]).unwrap(), Effort::of(7));
/// assert_eq!(
///     get_minimum(&["12", "123"]).unwrap_err().kind(),
///     ErrorKind::InconsistentSize,
/// );
/// ```
pub fn get_minimum<R: AsRef<str>>(rows: &[R]) -> std::result::Result<Effort, LevelingError> {
    level(rows).map(|leveling| leveling.effort)
}

/// Same as [`get_minimum`] for rows whose type is not yet known.
pub fn get_minimum_raw(rows: &[RawRow]) -> std::result::Result<Effort, LevelingError> {
    level_raw(rows).map(|leveling| leveling.effort)
}

/// Returns the cheapest target together with its effort.
///
/// ```
/// use groundwork::{level, Effort};
///
/// let leveling = level(&["989"]).unwrap();
/// assert_eq!(leveling.target, 8);
/// assert_eq!(leveling.effort, Effort::ZERO);
/// ```
pub fn level<R: AsRef<str>>(rows: &[R]) -> std::result::Result<Leveling, LevelingError> {
    run(DEFAULT_LABEL, || Area::from_rows(rows))
}

/// Same as [`level`] for rows whose type is not yet known.
pub fn level_raw(rows: &[RawRow]) -> std::result::Result<Leveling, LevelingError> {
    run(DEFAULT_LABEL, || Area::from_raw(rows))
}

/// Levels the area held by a loaded document.
pub fn level_document(doc: &AreaDocument) -> Result<Leveling> {
    Ok(run(doc.name(), || Area::from_raw(&doc.area))?)
}

/// Loads a TOML or YAML area document and levels it.
pub fn level_file(path: impl AsRef<Path>) -> Result<Leveling> {
    let doc = AreaDocument::load(path)?;
    level_document(&doc)
}

fn run<F>(label: &str, validate: F) -> std::result::Result<Leveling, LevelingError>
where
    F: FnOnce() -> std::result::Result<Area, LevelingError>,
{
    let start = Instant::now();

    let area = validate().inspect_err(|err| {
        warn!(
            event = "area_rejected",
            label,
            kind = err.kind().as_str(),
            error = %err,
        );
    })?;

    info!(
        event = "level_start",
        label,
        rows = area.rows() as u64,
        width = area.width() as u64,
    );

    let survey = survey(area.heights());
    for candidate in survey.iter() {
        debug!(
            event = "target_evaluated",
            label,
            target = candidate.target,
            effort = candidate.effort.value(),
        );
    }
    let best = survey.best();

    info!(
        event = "level_end",
        label,
        target = best.target,
        effort = best.effort.value(),
        duration_us = start.elapsed().as_micros() as u64,
    );
    Ok(best)
}
