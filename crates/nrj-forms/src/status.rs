//! Submission status shown under the contact form

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// User-facing texts for each submission status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMessages {
	pub sending: String,
	pub success: String,
	pub failure: String,
}

impl Default for FormMessages {
	fn default() -> Self {
		Self {
			sending: "Sending your message...".to_string(),
			success: "Thank you! Your message has been sent successfully.".to_string(),
			failure: "There was an error sending your message. Please try again.".to_string(),
		}
	}
}

/// Result of the most recent submission attempt
///
/// Serializes as `{"submitted": bool, "success": bool, "message": string}`.
/// `submitted` is true for every variant; [`is_in_flight`](Self::is_in_flight)
/// tells a pending request apart from a finished one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
	Sending { message: String },
	Succeeded { message: String },
	Failed { message: String },
}

impl SubmissionStatus {
	pub fn sending(messages: &FormMessages) -> Self {
		Self::Sending {
			message: messages.sending.clone(),
		}
	}

	pub fn succeeded(messages: &FormMessages) -> Self {
		Self::Succeeded {
			message: messages.success.clone(),
		}
	}

	pub fn failed(messages: &FormMessages) -> Self {
		Self::Failed {
			message: messages.failure.clone(),
		}
	}

	/// Always true: a status only exists once the form has been submitted.
	pub fn submitted(&self) -> bool {
		true
	}

	pub fn success(&self) -> bool {
		matches!(self, Self::Succeeded { .. })
	}

	pub fn is_in_flight(&self) -> bool {
		matches!(self, Self::Sending { .. })
	}

	pub fn message(&self) -> &str {
		match self {
			Self::Sending { message } | Self::Succeeded { message } | Self::Failed { message } => {
				message
			}
		}
	}
}

impl Serialize for SubmissionStatus {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("SubmissionStatus", 3)?;
		state.serialize_field("submitted", &self.submitted())?;
		state.serialize_field("success", &self.success())?;
		state.serialize_field("message", self.message())?;
		state.end()
	}
}
