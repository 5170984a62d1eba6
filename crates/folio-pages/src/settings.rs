//! Contact form settings
//!
//! Every value has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! fade_in_delay_ms = 10
//! display_ms = 5000
//! fade_out_ms = 300
//! submission_delay_ms = 1500
//! success_rate = 0.9
//! # seed = 42
//!
//! [logging]
//! level = "info"
//! ```

use crate::message::MessageTimings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("Failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("Invalid setting `{key}`: {reason}")]
	Invalid { key: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// Default filter directive, overridden by `RUST_LOG`
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

/// Timing and backend settings for the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormSettings {
	/// Delay before a new message becomes fully visible
	pub fade_in_delay_ms: u64,
	/// Time from message creation until its fade-out begins
	pub display_ms: u64,
	/// Time from fade-out start until the message is cleared
	pub fade_out_ms: u64,
	/// Delay of the simulated submission call
	pub submission_delay_ms: u64,
	/// Probability that a simulated submission succeeds
	pub success_rate: f64,
	/// Fixed seed for the simulated backend; entropy when unset
	pub seed: Option<u64>,
	/// Logging configuration
	pub logging: LoggingSettings,
}

impl Default for ContactFormSettings {
	fn default() -> Self {
		let timings = MessageTimings::default();
		Self {
			fade_in_delay_ms: timings.fade_in_delay.as_millis() as u64,
			display_ms: timings.display.as_millis() as u64,
			fade_out_ms: timings.fade_out.as_millis() as u64,
			submission_delay_ms: 1500,
			success_rate: 0.9,
			seed: None,
			logging: LoggingSettings::default(),
		}
	}
}

impl ContactFormSettings {
	/// Parses and validates settings from a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::ContactFormSettings;
	///
	/// let settings = ContactFormSettings::from_toml_str("success_rate = 1.0").unwrap();
	/// assert_eq!(settings.success_rate, 1.0);
	/// assert_eq!(settings.display_ms, 5000);
	///
	/// assert!(ContactFormSettings::from_toml_str("success_rate = 2.0").is_err());
	/// ```
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Checks value ranges.
	pub fn validate(&self) -> SettingsResult<()> {
		if !(0.0..=1.0).contains(&self.success_rate) {
			return Err(SettingsError::Invalid {
				key: "success_rate",
				reason: format!("must be between 0 and 1, got {}", self.success_rate),
			});
		}
		if self.display_ms == 0 {
			return Err(SettingsError::Invalid {
				key: "display_ms",
				reason: "must be greater than zero".to_string(),
			});
		}
		if self.logging.level.trim().is_empty() {
			return Err(SettingsError::Invalid {
				key: "logging.level",
				reason: "must not be empty".to_string(),
			});
		}
		Ok(())
	}

	/// Message lifecycle delays
	pub fn message_timings(&self) -> MessageTimings {
		MessageTimings {
			fade_in_delay: Duration::from_millis(self.fade_in_delay_ms),
			display: Duration::from_millis(self.display_ms),
			fade_out: Duration::from_millis(self.fade_out_ms),
		}
	}

	/// Delay of the simulated submission call
	pub fn submission_delay(&self) -> Duration {
		Duration::from_millis(self.submission_delay_ms)
	}
}
