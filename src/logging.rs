//! Logging setup
//!
//! Console plus a daily rolling file, filtered by `RUST_LOG` (default `info`).

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::LOG_FILE_PREFIX;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`-style directives
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn filter_from_env() -> EnvFilter {
    env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// Log to stdout and to a daily rolling file in `log_dir`
pub fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .context("tracing already initialized")?;

    Ok(guard)
}

/// Log to stdout only
pub fn init_console_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        assert_eq!(env_filter(None).to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(env_filter(Some("  ")).to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_bare_level_replaces_default() {
        assert_eq!(env_filter(Some("debug")).to_string(), "debug");
        assert_eq!(env_filter(Some("warn")).to_string(), "warn");
    }

    #[test]
    fn test_target_directives_are_kept() {
        let filter = env_filter(Some("registry_gui=trace")).to_string();
        assert!(filter.contains("registry_gui=trace"));
        assert!(!filter.contains(DEFAULT_LOG_FILTER));
    }
}
