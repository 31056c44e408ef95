//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, constructed tour)
//! - **DEBUG**: New best tours and restarts
//! - **TRACE**: Individual perturbations
//!
//! The default filter is `tourforge_solver=info`; set `RUST_LOG` to change it.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "tourforge_solver=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs a global subscriber, unless one is
/// already installed.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _____                 _____
|_   _|__  _   _ _ __ |  ___|__  _ __ __ _  ___
  | |/ _ \| | | | '__|| |_ / _ \| '__/ _` |/ _ \
  | | (_) | |_| | |   |  _| (_) | | | (_| |  __/
  |_|\___/ \__,_|_|   |_|  \___/|_|  \__, |\___|
                                     |___/
"#;

    let version_line = format!("               v{} - 2-opt Tour Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from solver modules
        if !target.starts_with("tourforge_solver") && !target.starts_with("tourforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    pair: Option<String>,
    seed: Option<String>,
    city_count: Option<u64>,
    sweep: Option<u64>,
    sweeps: Option<u64>,
    improvements: Option<u64>,
    restarts: Option<u64>,
    tried: Option<u64>,
    draws: Option<u64>,
    duration_ms: Option<u64>,
    distance: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "pair" => self.pair = Some(s),
            "seed" => self.seed = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "city_count" => self.city_count = Some(value),
            "sweep" => self.sweep = Some(value),
            "sweeps" => self.sweeps = Some(value),
            "improvements" => self.improvements = Some(value),
            "restarts" => self.restarts = Some(value),
            "tried" => self.tried = Some(value),
            "draws" => self.draws = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "distance" {
            self.distance = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "construction_end" => format_construction_end(v),
        "new_best" => format_new_best(v),
        "restart" => format_restart(v),
        "perturb" => format_perturb(v, level),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let cities = v.city_count.unwrap_or(0);

    let mut output = format!(
        "{} {} Solving │ {} cities",
        format_elapsed(),
        "▶".bright_green().bold(),
        cities.to_formatted_string(&Locale::en).bright_yellow(),
    );

    if let Some(seed) = v.seed.as_deref().and_then(seed_value) {
        output.push_str(&format!(" │ seed {}", seed.bright_yellow()));
    }

    output
}

// Unwraps the Debug form of `Option<u64>`.
fn seed_value(s: &str) -> Option<&str> {
    s.strip_prefix("Some(")?.strip_suffix(')')
}

fn format_construction_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Nearest neighbor │ {}",
        format_elapsed(),
        "◆".bright_blue(),
        format_distance(v.distance.unwrap_or(0.0)).white().bold(),
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    let sweep = v.sweep.unwrap_or(0);

    format!(
        "{} {} New best │ sweep {:>8} │ {}",
        format_elapsed(),
        "★".bright_green(),
        sweep.to_formatted_string(&Locale::en).white(),
        format_distance(v.distance.unwrap_or(0.0))
            .bright_green()
            .bold(),
    )
}

fn format_restart(v: &EventVisitor) -> String {
    let tried = v.tried.unwrap_or(0);

    format!(
        "{} {} Restart │ {} transpositions tried",
        format_elapsed(),
        "↻".bright_magenta(),
        tried.to_formatted_string(&Locale::en).bright_magenta(),
    )
}

fn format_perturb(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let pair = v.pair.as_deref().unwrap_or("?");
    let draws = v.draws.unwrap_or(0);

    format!(
        "{} {} Swap {:>12} │ {} draws",
        format_elapsed(),
        "~".bright_black(),
        pair.bright_black(),
        draws.to_formatted_string(&Locale::en).bright_black(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let distance = format_distance(v.distance.unwrap_or(0.0));
    let sweeps = v.sweeps.unwrap_or(0);
    let improvements = v.improvements.unwrap_or(0);
    let restarts = v.restarts.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} Solving complete │ {} │ {} sweeps │ {} restarts │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        sweeps.to_formatted_string(&Locale::en).white(),
        restarts.to_formatted_string(&Locale::en).white(),
        distance.bright_green().bold(),
    );

    // Summary box
    output.push_str("\n\n");
    output.push_str(
        &"╔══════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    let title = "BEST TOUR FOUND";
    let inner_width: usize = 58;
    let total_pad = inner_width.saturating_sub(title.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        title.bright_green().bold(),
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(
        &"╠══════════════════════════════════════════════════════════╣"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    for (label, value) in [
        ("Distance:", distance),
        ("Improvements:", improvements.to_formatted_string(&Locale::en)),
    ] {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }

    output.push_str(
        &"╚══════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Three decimals, thousands separators on the integer part.
fn format_distance(distance: f64) -> String {
    if !distance.is_finite() {
        return distance.to_string();
    }
    let thousandths = (distance.abs() * 1000.0).round() as u64;
    let sign = if distance < 0.0 && thousandths > 0 {
        "-"
    } else {
        ""
    };
    format!(
        "{}{}.{:03}",
        sign,
        (thousandths / 1000).to_formatted_string(&Locale::en),
        thousandths % 1000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(4.0), "4.000");
        assert_eq!(format_distance(1234567.8912), "1,234,567.891");
        assert_eq!(format_distance(0.0004), "0.000");
        assert_eq!(format_distance(999.9996), "1,000.000");
        assert_eq!(format_distance(f64::INFINITY), "inf");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_seed_value() {
        assert_eq!(seed_value("Some(42)"), Some("42"));
        assert_eq!(seed_value("None"), None);
    }

    #[test]
    fn test_solve_start_shows_cities_and_seed() {
        let mut v = visitor("solve_start");
        v.city_count = Some(1500);
        v.seed = Some("Some(7)".to_string());

        let output = format_event(&v, Level::INFO);
        assert!(output.contains("1,500"));
        assert!(output.contains("cities"));
        assert!(output.contains("seed"));
    }

    #[test]
    fn test_solve_end_summary() {
        let mut v = visitor("solve_end");
        v.distance = Some(12345.5);
        v.sweeps = Some(2000);
        v.improvements = Some(17);
        v.duration_ms = Some(29_500);

        let output = format_event(&v, Level::INFO);
        assert!(output.contains("12,345.500"));
        assert!(output.contains("2,000"));
        assert!(output.contains("29.50s"));
        assert!(output.contains("BEST TOUR FOUND"));
    }

    #[test]
    fn test_perturb_only_at_trace() {
        let mut v = visitor("perturb");
        v.pair = Some("{2, 5}".to_string());
        v.draws = Some(3);

        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("{2, 5}"));
    }

    #[test]
    fn test_new_best_and_restart() {
        let mut best = visitor("new_best");
        best.sweep = Some(12);
        best.distance = Some(42.25);
        assert!(format_event(&best, Level::DEBUG).contains("42.250"));

        let mut restart = visitor("restart");
        restart.tried = Some(1225);
        assert!(format_event(&restart, Level::DEBUG).contains("1,225"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("reversal"), Level::TRACE).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::info!(target: "tourforge_solver", event = "construction_end", distance = 4.0);
    }
}
