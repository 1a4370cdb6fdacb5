//! Site settings
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `NRJ_*` environment variables (a `.env` file is loaded first when present).
//!
//! ```toml
//! [api]
//! base_url = "https://cms.nrjbuilders.com"
//! timeout_secs = 15
//!
//! [site]
//! phone = "+44 123 456 7890"
//!
//! [logging]
//! level = "debug"
//! ```

use crate::env::{Env, EnvError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "NRJ_";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid settings TOML: {0}")]
	Toml(#[from] toml::de::Error),

	#[error(transparent)]
	Env(#[from] EnvError),

	#[error("Invalid value for '{key}': {reason}")]
	Invalid { key: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Content API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
	/// Base URL every endpoint path is appended to
	pub base_url: String,
	/// Per-request timeout in seconds
	pub timeout_secs: u64,
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self {
			base_url: "https://api.example.com".to_string(),
			timeout_secs: 30,
		}
	}
}

/// Business contact details shown next to the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
	pub name: String,
	pub address: String,
	pub phone: String,
	pub email: String,
}

impl SiteInfo {
	/// `tel:` link for the phone number, whitespace removed.
	pub fn phone_href(&self) -> String {
		let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
		format!("tel:{digits}")
	}

	pub fn email_href(&self) -> String {
		format!("mailto:{}", self.email)
	}
}

impl Default for SiteInfo {
	fn default() -> Self {
		Self {
			name: "NRJ Builders & Surveyors".to_string(),
			address: "123 Construction Avenue, Building District, London, UK".to_string(),
			phone: "+44 123 456 7890".to_string(),
			email: "info@nrjbuilders.com".to_string(),
		}
	}
}

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

/// Complete settings for one deployment
///
/// # Examples
///
/// ```
/// use nrj_conf::Settings;
///
/// let settings = Settings::from_toml_str("[api]\nbase_url = \"http://localhost:8080\"").unwrap();
/// assert_eq!(settings.api.base_url, "http://localhost:8080");
/// assert_eq!(settings.api.timeout_secs, 30);
/// assert_eq!(settings.logging.level, "info");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub api: ApiSettings,
	pub site: SiteInfo,
	pub logging: LoggingSettings,
}

impl Settings {
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		Ok(toml::from_str(source)?)
	}

	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.display().to_string(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Override values from `NRJ_API_BASE_URL`, `NRJ_API_TIMEOUT_SECS` and
	/// `NRJ_LOG_LEVEL` when they are set.
	pub fn apply_env(&mut self, env: &Env) -> SettingsResult<()> {
		if let Some(base_url) = env.optional("API_BASE_URL")? {
			self.api.base_url = base_url;
		}
		if let Some(timeout) = env.optional_u64("API_TIMEOUT_SECS")? {
			self.api.timeout_secs = timeout;
		}
		if let Some(level) = env.optional("LOG_LEVEL")? {
			self.logging.level = level;
		}
		Ok(())
	}

	/// Check values that would otherwise only fail on first use.
	pub fn validate(&self) -> SettingsResult<()> {
		let url = url::Url::parse(&self.api.base_url).map_err(|e| SettingsError::Invalid {
			key: "api.base_url",
			reason: e.to_string(),
		})?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(SettingsError::Invalid {
				key: "api.base_url",
				reason: format!("unsupported scheme '{}'", url.scheme()),
			});
		}
		if self.api.timeout_secs == 0 {
			return Err(SettingsError::Invalid {
				key: "api.timeout_secs",
				reason: "timeout must be greater than zero".to_string(),
			});
		}
		if self.logging.level.trim().is_empty() {
			return Err(SettingsError::Invalid {
				key: "logging.level",
				reason: "level must not be empty".to_string(),
			});
		}
		Ok(())
	}

	/// Load `.env`, the optional settings file and `NRJ_*` overrides, then
	/// validate the result.
	pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
		if dotenv::dotenv().is_ok() {
			tracing::debug!("loaded .env file");
		}

		let mut settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		settings.apply_env(&Env::new().with_prefix(ENV_PREFIX))?;
		settings.validate()?;

		tracing::debug!(base_url = %settings.api.base_url, "settings loaded");
		Ok(settings)
	}
}
