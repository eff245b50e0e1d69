pub mod game_events;

use std::env;
use std::str::FromStr;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::errors::domain::DomainError;

/// Output shape of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            other => Err(DomainError::config(format!(
                "unknown log format '{other}' (expected plain or json)"
            ))),
        }
    }
}

impl LogFormat {
    /// `SOLITAIRE_LOG_FORMAT`, defaulting to plain.
    pub fn from_env() -> Result<Self, DomainError> {
        match env::var("SOLITAIRE_LOG_FORMAT") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(LogFormat::Plain),
        }
    }
}

/// Install the global subscriber. Filter comes from `RUST_LOG`, default `info`.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(format: LogFormat) {
    init_tracing_with_default(format, "info");
}

/// Like [`init_tracing`], with `default_directives` used when `RUST_LOG` is unset.
pub fn init_tracing_with_default(format: LogFormat, default_directives: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Json => registry.with(base.with_ansi(false).json()).try_init(),
        LogFormat::Plain => registry.with(base).try_init(),
    };
    result.ok();
}
