//! Content client errors

use thiserror::Error;

/// Failure of a single content API request
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("Invalid base URL '{url}': {reason}")]
	InvalidBaseUrl { url: String, reason: String },

	#[error("Failed to build HTTP client: {0}")]
	Build(#[source] reqwest::Error),

	/// The request never produced a response (DNS, connect, timeout).
	#[error("Request to {endpoint} failed: {source}")]
	Network {
		endpoint: String,
		#[source]
		source: reqwest::Error,
	},

	/// The API answered with a non-2xx status.
	#[error("Request to {endpoint} failed with status {status}: {body}")]
	Http {
		endpoint: String,
		status: u16,
		body: String,
	},

	/// A 2xx body that does not match the expected shape.
	#[error("Failed to decode response from {endpoint}: {source}")]
	Decode {
		endpoint: String,
		#[source]
		source: serde_json::Error,
	},
}

impl ClientError {
	/// Check if the error is a timeout
	pub fn is_timeout(&self) -> bool {
		match self {
			ClientError::Network { source, .. } => source.is_timeout(),
			_ => false,
		}
	}

	/// Check if the error is a connection error
	pub fn is_connect(&self) -> bool {
		match self {
			ClientError::Network { source, .. } => source.is_connect(),
			_ => false,
		}
	}

	/// HTTP status code, for [`ClientError::Http`].
	pub fn status(&self) -> Option<u16> {
		match self {
			ClientError::Http { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Endpoint path the failed request targeted, if it got that far.
	pub fn endpoint(&self) -> Option<&str> {
		match self {
			ClientError::Network { endpoint, .. }
			| ClientError::Http { endpoint, .. }
			| ClientError::Decode { endpoint, .. } => Some(endpoint),
			ClientError::InvalidBaseUrl { .. } | ClientError::Build(_) => None,
		}
	}
}

pub type ClientResult<T> = Result<T, ClientError>;
