//! Settings loading tests
//!
//! Covers file loading and environment overrides. Tests that touch the
//! process environment run under `#[serial(env)]`.

use nrj_conf::{Env, Settings, SettingsError};
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

const OVERRIDES: [&str; 3] = ["NRJ_API_BASE_URL", "NRJ_API_TIMEOUT_SECS", "NRJ_LOG_LEVEL"];

/// Restores the override variables when dropped
struct EnvGuard;

impl EnvGuard {
	fn set(vars: &[(&str, &str)]) -> Self {
		// Callers hold #[serial(env)], so no other test touches the environment.
		unsafe {
			for key in OVERRIDES {
				env::remove_var(key);
			}
			for (key, value) in vars {
				env::set_var(key, value);
			}
		}
		EnvGuard
	}
}

impl Drop for EnvGuard {
	fn drop(&mut self) {
		unsafe {
			for key in OVERRIDES {
				env::remove_var(key);
			}
		}
	}
}

fn settings_file(contents: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

#[rstest]
#[serial(env)]
fn test_load_from_file() {
	let _guard = EnvGuard::set(&[]);
	let file = settings_file(
		r#"
		[api]
		base_url = "http://localhost:9000"
		timeout_secs = 5
		"#,
	);

	let settings = Settings::load(Some(file.path())).unwrap();

	assert_eq!(settings.api.base_url, "http://localhost:9000");
	assert_eq!(settings.api.timeout_secs, 5);
}

#[rstest]
#[serial(env)]
fn test_env_overrides_file() {
	let _guard = EnvGuard::set(&[
		("NRJ_API_BASE_URL", "https://staging.example.com"),
		("NRJ_LOG_LEVEL", "nrj_client=debug"),
	]);
	let file = settings_file("[api]\nbase_url = \"http://localhost:9000\"\ntimeout_secs = 5\n");

	let settings = Settings::load(Some(file.path())).unwrap();

	assert_eq!(settings.api.base_url, "https://staging.example.com");
	assert_eq!(settings.api.timeout_secs, 5);
	assert_eq!(settings.logging.level, "nrj_client=debug");
}

#[rstest]
#[serial(env)]
fn test_invalid_timeout_override() {
	let _guard = EnvGuard::set(&[("NRJ_API_TIMEOUT_SECS", "ten")]);

	let result = Settings::load(None);

	assert!(matches!(result, Err(SettingsError::Env(_))));
}

#[rstest]
#[serial(env)]
fn test_override_validated_after_merge() {
	let _guard = EnvGuard::set(&[("NRJ_API_TIMEOUT_SECS", "0")]);

	let result = Settings::load(None);

	assert!(matches!(result, Err(SettingsError::Invalid { .. })));
}

#[rstest]
#[serial(env)]
fn test_apply_env_with_custom_prefix() {
	let _guard = EnvGuard::set(&[]);
	// Other prefixes are not part of OVERRIDES, so clean up explicitly.
	unsafe {
		env::set_var("SITE_TEST_API_BASE_URL", "http://127.0.0.1:1");
	}

	let mut settings = Settings::default();
	settings
		.apply_env(&Env::new().with_prefix("SITE_TEST_"))
		.unwrap();

	assert_eq!(settings.api.base_url, "http://127.0.0.1:1");
	unsafe {
		env::remove_var("SITE_TEST_API_BASE_URL");
	}
}

#[rstest]
fn test_missing_file_is_io_error() {
	let result = Settings::from_file("/definitely/not/here/settings.toml");

	match result {
		Err(SettingsError::Io { path, .. }) => assert!(path.ends_with("settings.toml")),
		other => panic!("expected io error, got {other:?}"),
	}
}
