//! Environment variable handling
//!
//! Reads typed values from the process environment, optionally namespaced by
//! a prefix (e.g. `NRJ_`).

use std::env;

/// Environment variable reader with prefix support
#[derive(Debug, Clone, Default)]
pub struct Env {
	/// Optional prefix for environment variables (e.g., "NRJ_")
	pub prefix: Option<String>,
}

impl Env {
	pub fn new() -> Self {
		Self { prefix: None }
	}

	/// Set a prefix for all environment variable lookups
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Get the full key name with prefix
	pub fn key_name(&self, key: &str) -> String {
		match &self.prefix {
			Some(prefix) => format!("{}{}", prefix, key),
			None => key.to_string(),
		}
	}

	/// Read a string value, `None` when unset or not valid unicode
	pub fn optional(&self, key: &str) -> Result<Option<String>, EnvError> {
		let full_key = self.key_name(key);
		check_key(&full_key)?;
		Ok(env::var(&full_key).ok())
	}

	/// Read a string value from environment
	pub fn str(&self, key: &str) -> Result<String, EnvError> {
		self.str_with_default(key, None)
	}

	/// Read a string value with a default
	pub fn str_with_default(&self, key: &str, default: Option<&str>) -> Result<String, EnvError> {
		match self.optional(key)? {
			Some(val) => Ok(val),
			None => match default {
				Some(d) => Ok(d.to_string()),
				None => Err(EnvError::MissingVariable(self.key_name(key))),
			},
		}
	}

	/// Read an unsigned integer, `None` when unset
	pub fn optional_u64(&self, key: &str) -> Result<Option<u64>, EnvError> {
		match self.optional(key)? {
			Some(val) => val
				.trim()
				.parse::<u64>()
				.map(Some)
				.map_err(|source| EnvError::NotANumber {
					key: self.key_name(key),
					value_len: val.len(),
					source,
				}),
			None => Ok(None),
		}
	}

	/// Read an unsigned integer with a default
	pub fn u64_with_default(&self, key: &str, default: Option<u64>) -> Result<u64, EnvError> {
		match self.optional_u64(key)? {
			Some(val) => Ok(val),
			None => default.ok_or_else(|| EnvError::MissingVariable(self.key_name(key))),
		}
	}
}

/// Reject keys that `std::env::var` would report as unset instead of invalid.
///
/// Only the prefix is caller-supplied, so an empty key or a stray `=` or NUL
/// in it is the only way a lookup can go wrong here.
fn check_key(key: &str) -> Result<(), EnvError> {
	if key.is_empty() || key.contains(['=', '\0']) {
		return Err(EnvError::InvalidKey(key.escape_debug().to_string()));
	}
	Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("{0} is not set")]
	MissingVariable(String),

	/// The raw value is not echoed back, only its length.
	#[error("{key} is not an unsigned integer ({value_len}-byte value rejected)")]
	NotANumber {
		key: String,
		value_len: usize,
		#[source]
		source: std::num::ParseIntError,
	},

	#[error("\"{0}\" cannot be used as an environment variable key")]
	InvalidKey(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	fn test_key_name_with_prefix() {
		let env = Env::new().with_prefix("NRJ_");
		assert_eq!(env.key_name("API_BASE_URL"), "NRJ_API_BASE_URL");
		assert_eq!(Env::new().key_name("API_BASE_URL"), "API_BASE_URL");
	}

	#[rstest]
	#[case("", "\"\" cannot be used as an environment variable key")]
	#[case("NRJ=API_BASE_URL", "\"NRJ=API_BASE_URL\" cannot be used as an environment variable key")]
	#[case("NRJ\0API_BASE_URL", "\"NRJ\\0API_BASE_URL\" cannot be used as an environment variable key")]
	fn test_invalid_keys_rejected(#[case] key: &str, #[case] message: &str) {
		let err = check_key(key).unwrap_err();

		assert!(matches!(err, EnvError::InvalidKey(_)));
		assert_eq!(err.to_string(), message);
	}

	#[rstest]
	fn test_bad_prefix_surfaces_instead_of_reading_unset() {
		let env = Env::new().with_prefix("NRJ=");

		assert!(matches!(env.optional("API_BASE_URL"), Err(EnvError::InvalidKey(_))));
	}

	#[rstest]
	#[serial(env)]
	fn test_str_with_default() {
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::remove_var("NRJ_ENV_TEST_MISSING");
		}
		let env = Env::new().with_prefix("NRJ_");

		assert_eq!(
			env.str_with_default("ENV_TEST_MISSING", Some("fallback")).unwrap(),
			"fallback"
		);
		let err = env.str("ENV_TEST_MISSING").unwrap_err();
		assert!(matches!(&err, EnvError::MissingVariable(name) if name == "NRJ_ENV_TEST_MISSING"));
		assert_eq!(err.to_string(), "NRJ_ENV_TEST_MISSING is not set");
	}

	#[rstest]
	#[serial(env)]
	fn test_u64_parse_error_hides_value() {
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("NRJ_ENV_TEST_TIMEOUT", "soon");
		}
		let env = Env::new().with_prefix("NRJ_");

		let err = env.u64_with_default("ENV_TEST_TIMEOUT", Some(30)).unwrap_err();

		assert_eq!(
			err.to_string(),
			"NRJ_ENV_TEST_TIMEOUT is not an unsigned integer (4-byte value rejected)"
		);
		match err {
			EnvError::NotANumber { key, value_len, .. } => {
				assert_eq!(key, "NRJ_ENV_TEST_TIMEOUT");
				assert_eq!(value_len, 4);
			}
			other => panic!("unexpected error: {other:?}"),
		}
		unsafe {
			env::remove_var("NRJ_ENV_TEST_TIMEOUT");
		}
	}
}
