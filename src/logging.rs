//! Logging setup for binaries that embed the engine.
//!
//! The library itself only emits `tracing` events (`tally::engine` target):
//! token application at `debug`, phase changes at `trace`, failed
//! evaluations at `warn`. Call [`init_with_config`] once to print them to stderr.
//!
//! `RUST_LOG` takes precedence over the level passed in:
//! ```bash
//! RUST_LOG=tally=trace tally --keys "2 + 2 ="
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Logging levels and per-target overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to every target without an override.
    pub default: String,
    /// `(target, level)` overrides, e.g. `("tally::engine", "debug")`.
    pub targets: Vec<(String, String)>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: "warn".to_string(),
            targets: Vec::new(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive string, e.g. `warn,tally::engine=debug`.
    pub fn directives(&self) -> String {
        let mut directives = self.default.clone();
        for (target, level) in &self.targets {
            directives.push_str(&format!(",{target}={level}"));
        }
        directives
    }
}

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Install a stderr subscriber. Only the first call has any effect.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.directives())
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Parse a `target=level` override as accepted by `--log-target`.
pub fn parse_target_directive(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((target, level)) if !target.is_empty() && !level.is_empty() => {
            Ok((target.trim().to_string(), level.trim().to_string()))
        }
        _ => Err(format!("expected TARGET=LEVEL, got '{raw}'")),
    }
}
