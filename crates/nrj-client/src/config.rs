//! Client configuration

use crate::error::{ClientError, ClientResult};
use nrj_conf::ApiSettings;
use std::time::Duration;
use url::Url;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the content API lives and how long to wait for it
///
/// # Examples
///
/// ```
/// use nrj_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://cms.example.com/api/")
///     .unwrap()
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.url_for("/pages"), "https://cms.example.com/api/pages");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
	pub base_url: Url,
	pub timeout: Duration,
}

impl ClientConfig {
	pub fn new(base_url: &str) -> ClientResult<Self> {
		let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
			url: base_url.to_string(),
			reason: e.to_string(),
		})?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(ClientError::InvalidBaseUrl {
				url: base_url.to_string(),
				reason: format!("unsupported scheme '{}'", parsed.scheme()),
			});
		}

		Ok(Self {
			base_url: parsed,
			timeout: DEFAULT_TIMEOUT,
		})
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn from_settings(settings: &ApiSettings) -> ClientResult<Self> {
		Ok(Self::new(&settings.base_url)?.with_timeout(Duration::from_secs(settings.timeout_secs)))
	}

	/// Full URL for an endpoint path such as `/pages/home`.
	pub fn url_for(&self, endpoint: &str) -> String {
		format!("{}{}", self.base_url.as_str().trim_end_matches('/'), endpoint)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("https://api.example.com", "/services", "https://api.example.com/services")]
	#[case("https://api.example.com/", "/services", "https://api.example.com/services")]
	#[case("http://localhost:8080/v1", "/pages/home", "http://localhost:8080/v1/pages/home")]
	fn test_url_for(#[case] base: &str, #[case] endpoint: &str, #[case] expected: &str) {
		assert_eq!(ClientConfig::new(base).unwrap().url_for(endpoint), expected);
	}

	#[rstest]
	#[case("not a url")]
	#[case("ftp://files.example.com")]
	fn test_invalid_base_url(#[case] base: &str) {
		assert!(matches!(
			ClientConfig::new(base),
			Err(ClientError::InvalidBaseUrl { .. })
		));
	}

	#[rstest]
	fn test_from_settings() {
		let settings = ApiSettings {
			base_url: "http://localhost:9000".to_string(),
			timeout_secs: 7,
		};

		let config = ClientConfig::from_settings(&settings).unwrap();

		assert_eq!(config.timeout, Duration::from_secs(7));
		assert_eq!(config.url_for("/testimonials"), "http://localhost:9000/testimonials");
	}
}
