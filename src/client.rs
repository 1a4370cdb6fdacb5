//! Content API client module.

pub use nrj_client::*;
