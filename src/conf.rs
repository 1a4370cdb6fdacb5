//! Configuration module.
//!
//! # Examples
//!
//! ```rust
//! use nrj::conf::Settings;
//!
//! let settings = Settings::from_toml_str("[api]\ntimeout_secs = 10").unwrap();
//! assert_eq!(settings.api.timeout_secs, 10);
//! ```

pub use nrj_conf::*;
