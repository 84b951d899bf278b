//! End-to-end tests for the leveling entry points.

use std::sync::{Arc, Mutex};

use groundwork::{
    get_minimum, get_minimum_raw, level, level_document, level_file, level_raw, AreaDocument,
    ConfigError, Effort, ErrorKind, GroundworkError, LevelingError, RawKind, RawRow,
};
use groundwork_test::{invalid_type_cases, oracle_minimum, random_area, rejections, SCENARIOS};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[test]
fn test_scenarios() {
    for scenario in SCENARIOS {
        assert_eq!(
            get_minimum(scenario.rows).unwrap(),
            Effort::of(scenario.expected),
            "scenario {}",
            scenario.name
        );
    }
}

#[test]
fn test_rejections() {
    for rejection in rejections() {
        let err = get_minimum(&rejection.rows).unwrap_err();
        assert_eq!(err.kind(), rejection.kind, "rejection {}", rejection.name);
    }
}

#[test]
fn test_invalid_types() {
    for rows in invalid_type_cases() {
        let err = get_minimum_raw(&rows).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
        assert_eq!(err.row(), Some(0));
    }
}

#[test]
fn test_raw_rows_match_typed_rows() {
    for scenario in SCENARIOS {
        let raw: Vec<RawRow> = scenario.rows.iter().map(|&r| RawRow::from(r)).collect();
        assert_eq!(get_minimum_raw(&raw), get_minimum(scenario.rows));
        assert_eq!(level_raw(&raw), level(scenario.rows));
    }
}

#[test]
fn test_matches_oracle() {
    for seed in 0..40u64 {
        let rows = 1 + (seed as usize * 7) % 50;
        let width = 1 + (seed as usize * 13) % 50;
        let area = random_area(seed, rows, width);

        let effort = get_minimum(&area).unwrap();
        assert_eq!(effort.value(), oracle_minimum(&area), "seed {seed}");
        assert!(effort.value() <= (rows * width * 9) as u32);
    }
}

#[test]
fn test_row_order_does_not_matter() {
    let mut area = random_area(7, 12, 9);
    let expected = get_minimum(&area).unwrap();
    area.reverse();
    assert_eq!(get_minimum(&area).unwrap(), expected);
}

#[test]
fn test_level_reports_target() {
    let leveling = level(&["90"]).unwrap();
    assert_eq!(leveling.effort, Effort::of(8));
    assert_eq!(leveling.target, 0);

    let leveling = level(&["5781252", "2471255", "0000291", "1212489"]).unwrap();
    assert_eq!(leveling.effort, Effort::of(53));
}

#[test]
fn test_level_document() {
    let doc = AreaDocument::from_toml_str(r#"area = ["54454", "61551"]"#).unwrap();
    assert_eq!(level_document(&doc).unwrap().effort, Effort::of(7));

    let doc = AreaDocument::from_yaml_str("area: [\"12\", 40]").unwrap();
    let err = level_document(&doc).unwrap_err();
    assert_eq!(
        err.as_leveling(),
        Some(&LevelingError::InvalidType {
            row: 1,
            found: RawKind::Integer
        })
    );
}

#[test]
fn test_level_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yard.yml");
    std::fs::write(&path, "label: yard\narea:\n  - \"009\"\n").unwrap();

    let leveling = level_file(&path).unwrap();
    assert_eq!(leveling.effort, Effort::of(8));
}

#[test]
fn test_level_file_errors() {
    let err = level_file("no-such-area.toml").unwrap_err();
    assert!(matches!(err, GroundworkError::Config(ConfigError::Io(_))));
    assert!(err.as_leveling().is_none());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "area = []\n").unwrap();
    let err = level_file(&path).unwrap_err();
    assert_eq!(
        err.as_leveling().map(LevelingError::kind),
        Some(ErrorKind::InvalidSize)
    );
    assert!(err.to_string().starts_with("Invalid area: Area must contain"));
}

#[derive(Clone, Default)]
struct EventCapture {
    events: Arc<Mutex<Vec<String>>>,
}

struct EventName(Option<String>);

impl Visit for EventName {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut name = EventName(None);
        event.record(&mut name);
        if let Some(name) = name.0 {
            self.events.lock().unwrap().push(name);
        }
    }
}

#[test]
fn test_lifecycle_events() {
    let capture = EventCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        level(&["10", "31"]).unwrap();
        get_minimum(&["1", "22"]).unwrap_err();
    });

    let events = capture.events.lock().unwrap();
    assert_eq!(events.first().map(String::as_str), Some("level_start"));
    assert_eq!(
        events.iter().filter(|e| *e == "target_evaluated").count(),
        10
    );
    assert!(events.iter().any(|e| e == "level_end"));
    assert_eq!(events.last().map(String::as_str), Some("area_rejected"));
}
