//! Field validators for the contact form
//!
//! Validation is synchronous and pure: it reads the form values and returns
//! a fresh [`ValidationErrors`] map, it never touches controller state.

use crate::data::{ContactField, ContactFormData};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

// Permissive email shape: something, `@`, something, `.`, something.
//
// Not anchored and not RFC 5322; exotic but valid addresses may be rejected.
static EMAIL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_REGEX: invalid regex pattern"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Required(String),
	#[error("{0}")]
	Invalid(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Rejects values that are empty after trimming.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
	message: String,
}

impl RequiredValidator {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.trim().is_empty() {
			Err(FieldError::Required(self.message.clone()))
		} else {
			Ok(())
		}
	}
}

/// Checks the rough `local@domain.tld` shape of an email address.
///
/// # Examples
///
/// ```
/// use nrj_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("a@b.com").is_ok());
/// assert!(validator.validate("bad").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self.message.as_deref().unwrap_or("Email is invalid");
			Err(FieldError::Invalid(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Field-scoped validation messages, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<ContactField, String>);

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	pub fn get(&self, field: ContactField) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	pub fn contains(&self, field: ContactField) -> bool {
		self.0.contains_key(&field)
	}

	/// Drop the message for one field, returning it if there was one.
	pub fn remove(&mut self, field: ContactField) -> Option<String> {
		self.0.remove(&field)
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
		self.0.iter().map(|(field, message)| (*field, message.as_str()))
	}
}

impl FromIterator<(ContactField, String)> for ValidationErrors {
	fn from_iter<I: IntoIterator<Item = (ContactField, String)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl ContactFormData {
	/// Validate every required field.
	///
	/// `name` and `message` must be non-empty after trimming; `email` must be
	/// non-empty after trimming and look like an address. `phone` and
	/// `subject` are free-form.
	///
	/// # Examples
	///
	/// ```
	/// use nrj_forms::{ContactField, ContactFormData};
	///
	/// let data = ContactFormData {
	///     name: String::new(),
	///     email: "a@b.com".to_string(),
	///     message: "hi".to_string(),
	///     ..Default::default()
	/// };
	/// let errors = data.validate();
	/// assert_eq!(errors.len(), 1);
	/// assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
	/// ```
	pub fn validate(&self) -> ValidationErrors {
		let mut errors = ValidationErrors::new();

		if let Err(e) = RequiredValidator::new("Name is required").validate(&self.name) {
			errors.insert(ContactField::Name, e.to_string());
		}

		let email = RequiredValidator::new("Email is required")
			.validate(&self.email)
			.and_then(|()| EmailValidator::new().validate(&self.email));
		if let Err(e) = email {
			errors.insert(ContactField::Email, e.to_string());
		}

		if let Err(e) = RequiredValidator::new("Message is required").validate(&self.message) {
			errors.insert(ContactField::Message, e.to_string());
		}

		errors
	}

	pub fn is_valid(&self) -> bool {
		self.validate().is_empty()
	}
}
