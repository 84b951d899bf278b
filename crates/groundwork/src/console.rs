//! Colorful console output for leveling runs.
//!
//! Provides a custom `tracing` layer that formats Groundwork events with
//! colors. Events from other crates are left to whatever else is installed.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::OnceLock;

use groundwork_config::GroundworkConfig;
use owo_colors::{OwoColorize, Style};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "groundwork=info";

/// Initializes console output with settings from `groundwork.toml`, or
/// defaults when that file is missing.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    let config = GroundworkConfig::load("groundwork.toml").unwrap_or_default();
    init_with_config(&config);
}

/// Initializes console output with explicit settings.
///
/// `RUST_LOG` overrides `config.log_filter` when set. Safe to call multiple
/// times - only the first call has effect.
pub fn init_with_config(config: &GroundworkConfig) {
    INIT.get_or_init(|| {
        let directives = config.log_filter.as_deref().unwrap_or(DEFAULT_FILTER);
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directives))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(GroundworkConsoleLayer::new(config.ansi))
            .try_init();
    });
}

/// A tracing layer that formats leveling events.
pub struct GroundworkConsoleLayer {
    ansi: bool,
}

impl GroundworkConsoleLayer {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn paint(&self, text: impl Display, style: Style) -> String {
        if self.ansi {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_event(&self, v: &EventVisitor, level: Level) -> String {
        match v.event.as_deref() {
            Some("level_start") => self.format_level_start(v, level),
            Some("target_evaluated") => self.format_target(v, level),
            Some("level_end") => self.format_level_end(v, level),
            Some("area_rejected") => self.format_rejected(v, level),
            _ => String::new(),
        }
    }

    fn prefix(&self, level: Level, tag: &str) -> String {
        let level_style = match level {
            Level::ERROR => Style::new().bright_red().bold(),
            Level::WARN => Style::new().yellow().bold(),
            Level::INFO => Style::new().bright_green(),
            _ => Style::new().bright_blue(),
        };
        format!(
            "{} {:>5} {}",
            self.paint(timestamp(), Style::new().bright_black()),
            self.paint(level, level_style),
            self.paint(format!("[{tag}]"), Style::new().bright_cyan()),
        )
    }

    fn format_level_start(&self, v: &EventVisitor, level: Level) -> String {
        let rows = v.rows.unwrap_or(0);
        let width = v.width.unwrap_or(0);
        format!(
            "{} {} started: rows ({}), width ({}), cells ({})",
            self.prefix(level, "Groundwork"),
            self.paint(v.label(), Style::new().white().bold()),
            self.paint(rows, Style::new().bright_yellow()),
            self.paint(width, Style::new().bright_yellow()),
            self.paint(rows * width, Style::new().bright_magenta()),
        )
    }

    fn format_target(&self, v: &EventVisitor, level: Level) -> String {
        format!(
            "{} target ({}) effort ({})",
            self.prefix(level, "Survey"),
            self.paint(v.target.unwrap_or(0), Style::new().yellow()),
            self.paint(v.effort.unwrap_or(0), Style::new().white()),
        )
    }

    fn format_level_end(&self, v: &EventVisitor, level: Level) -> String {
        format!(
            "{} {} ended: best target ({}), minimum effort ({}), time spent ({})",
            self.prefix(level, "Groundwork"),
            self.paint(v.label(), Style::new().white().bold()),
            self.paint(v.target.unwrap_or(0), Style::new().yellow()),
            self.paint(v.effort.unwrap_or(0), Style::new().bright_green().bold()),
            self.paint(
                format_duration_us(v.duration_us.unwrap_or(0)),
                Style::new().yellow()
            ),
        )
    }

    fn format_rejected(&self, v: &EventVisitor, level: Level) -> String {
        format!(
            "{} {} rejected ({}): {}",
            self.prefix(level, "Groundwork"),
            self.paint(v.label(), Style::new().white().bold()),
            self.paint(v.kind.as_deref().unwrap_or("unknown"), Style::new().bright_red()),
            v.error.as_deref().unwrap_or(""),
        )
    }
}

impl<S: Subscriber> Layer<S> for GroundworkConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("groundwork") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = self.format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    label: Option<String>,
    kind: Option<String>,
    error: Option<String>,
    rows: Option<u64>,
    width: Option<u64>,
    target: Option<u64>,
    effort: Option<u64>,
    duration_us: Option<u64>,
}

impl EventVisitor {
    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("area")
    }

    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "label" => self.label = Some(value),
            "kind" => self.kind = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "rows" => self.rows = Some(value),
            "width" => self.width = Some(value),
            "target" => self.target = Some(value),
            "effort" => self.effort = Some(value),
            "duration_us" => self.duration_us = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.unsigned_abs());
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor() -> EventVisitor {
        EventVisitor {
            event: Some("level_end".to_string()),
            label: Some("backyard".to_string()),
            target: Some(4),
            effort: Some(7),
            duration_us: Some(1500),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_plain_level_end() {
        let layer = GroundworkConsoleLayer::new(false);
        let line = layer.format_event(&visitor(), Level::INFO);
        assert!(line.contains("[Groundwork] backyard ended"));
        assert!(line.contains("best target (4)"));
        assert!(line.contains("minimum effort (7)"));
        assert!(line.contains("time spent (1.50ms)"));
        assert!(!line.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_output() {
        let layer = GroundworkConsoleLayer::new(true);
        let line = layer.format_event(&visitor(), Level::INFO);
        assert!(line.contains('\u{1b}'));
    }

    #[test]
    fn test_rejected() {
        let layer = GroundworkConsoleLayer::new(false);
        let v = EventVisitor {
            event: Some("area_rejected".to_string()),
            kind: Some("invalid_size".to_string()),
            error: Some("too big".to_string()),
            ..EventVisitor::default()
        };
        let line = layer.format_event(&v, Level::WARN);
        assert!(line.contains("area rejected (invalid_size): too big"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let layer = GroundworkConsoleLayer::new(false);
        let v = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(layer.format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_duration_format() {
        assert_eq!(format_duration_us(999), "999µs");
        assert_eq!(format_duration_us(2500), "2.50ms");
        assert_eq!(format_duration_us(3_000_000), "3.00s");
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = GroundworkConfig::new().with_ansi(false);
        init_with_config(&config);
        init_with_config(&config);
        init();
    }
}
