//! Logging setup.
//!
//! Library crates only emit `tracing` events. Applications call [`init`] once
//! at startup to print them.

use nrj_conf::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the configured level parses.
pub const FALLBACK_DIRECTIVE: &str = "info";

/// Build the event filter.
///
/// `rust_log` (the `RUST_LOG` value) wins over `level`; unparsable values are
/// skipped.
pub fn filter_from(level: &str, rust_log: Option<&str>) -> EnvFilter {
	rust_log
		.and_then(|directives| EnvFilter::try_new(directives).ok())
		.or_else(|| EnvFilter::try_new(level).ok())
		.unwrap_or_else(|| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG` or `settings.level`.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case nothing changes.
pub fn init(settings: &LoggingSettings) -> bool {
	let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
	let filter = filter_from(&settings.level, rust_log.as_deref());

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(true)
		.try_init()
		.is_ok()
}
