//! Configuration for the NRJ site core
//!
//! Provides the deployment [`Settings`] (content API location, contact
//! details, log level) and the [`Env`] reader used for `NRJ_*` overrides.

pub mod env;
pub mod settings;

pub use env::{Env, EnvError};
pub use settings::{
	ApiSettings, ENV_PREFIX, LoggingSettings, Settings, SettingsError, SettingsResult, SiteInfo,
};
