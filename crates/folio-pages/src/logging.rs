//! Logging setup
//!
//! The runtime logs through `tracing`:
//!
//! | Event | Level |
//! |-------|-------|
//! | Submission state transition | `debug` |
//! | Submit refused (invalid form, already pending) | `debug` |
//! | Submission succeeded | `info` |
//! | Submission failed | `error` |
//!
//! [`init_logging`] installs a `fmt` subscriber for binaries and demos.
//! Libraries embedding the controller can install their own subscriber
//! instead.

use crate::settings::{LoggingSettings, SettingsError, SettingsResult};
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` when set, the configured level otherwise.
pub fn env_filter(settings: &LoggingSettings) -> SettingsResult<EnvFilter> {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return Ok(filter);
	}
	EnvFilter::try_new(&settings.level).map_err(|e| SettingsError::Invalid {
		key: "logging.level",
		reason: e.to_string(),
	})
}

/// Installs the global `fmt` subscriber.
///
/// Returns `Ok(false)` when another subscriber was already installed.
pub fn init_logging(settings: &LoggingSettings) -> SettingsResult<bool> {
	let filter = env_filter(settings)?;
	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(true)
		.try_init()
		.is_ok();

	if installed {
		tracing::debug!(level = %settings.level, "logging initialized");
	}
	Ok(installed)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_second_init_is_not_an_error() {
		let settings = LoggingSettings::default();

		// Only test in this binary that installs a global subscriber
		assert!(init_logging(&settings).unwrap());
		assert!(!init_logging(&settings).unwrap());
	}
}
