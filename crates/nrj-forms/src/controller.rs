//! Contact form controller
//!
//! [`ContactForm`] owns the values, errors and submission status of one form
//! instance and drives the submission lifecycle:
//!
//! ```text
//! Idle ──submit──▶ Invalid        (validation failed, nothing sent)
//!   │
//!   └──submit──▶ Submitting ──ok──▶ Succeeded (fields reset)
//!                    │
//!                    └──err──▶ Failed (fields kept)
//! ```
//!
//! The handle is cheap to clone and shares state through `Rc<RefCell<..>>`,
//! like a UI-thread signal. It is deliberately not `Send`.

use crate::data::{ContactField, ContactFormData, UnknownField};
use crate::status::{FormMessages, SubmissionStatus};
use crate::validators::ValidationErrors;
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

/// Transport used to deliver a validated contact form
#[async_trait]
pub trait ContactSubmitter {
	type Error: std::error::Error + Send + Sync + 'static;

	async fn submit_contact(&self, data: &ContactFormData) -> Result<(), Self::Error>;
}

/// What a call to [`ContactForm::submit`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Validation failed; the errors are stored on the form and nothing was sent.
	Invalid(ValidationErrors),
	/// Another submission from this form is still in flight.
	AlreadySubmitting,
	Sent,
	/// The submitter failed; the form shows the generic failure message.
	Failed,
	/// The form was unmounted; any response was dropped without touching state.
	Discarded,
}

/// Coarse phase derived from the form state, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
	Idle,
	Invalid,
	Submitting,
	Succeeded,
	Failed,
}

#[derive(Debug, Default)]
struct FormInner {
	data: ContactFormData,
	errors: ValidationErrors,
	status: Option<SubmissionStatus>,
	messages: FormMessages,
	unmounted: bool,
}

/// Handle to one contact form instance
///
/// # Examples
///
/// ```
/// use nrj_forms::{ContactField, ContactForm, FormPhase};
///
/// let form = ContactForm::new();
/// form.set_field(ContactField::Name, "Ada");
/// assert_eq!(form.value(ContactField::Name), "Ada");
/// assert_eq!(form.phase(), FormPhase::Idle);
/// assert!(form.status().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
	inner: Rc<RefCell<FormInner>>,
}

impl ContactForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_messages(messages: FormMessages) -> Self {
		let form = Self::new();
		form.inner.borrow_mut().messages = messages;
		form
	}

	pub fn data(&self) -> ContactFormData {
		self.inner.borrow().data.clone()
	}

	pub fn value(&self, field: ContactField) -> String {
		self.inner.borrow().data.get(field).to_string()
	}

	pub fn errors(&self) -> ValidationErrors {
		self.inner.borrow().errors.clone()
	}

	pub fn error(&self, field: ContactField) -> Option<String> {
		self.inner.borrow().errors.get(field).map(str::to_string)
	}

	pub fn status(&self) -> Option<SubmissionStatus> {
		self.inner.borrow().status.clone()
	}

	pub fn is_submitting(&self) -> bool {
		self.inner
			.borrow()
			.status
			.as_ref()
			.is_some_and(SubmissionStatus::is_in_flight)
	}

	/// Whether the submit button should be non-interactive.
	pub fn is_submit_disabled(&self) -> bool {
		self.is_submitting()
	}

	pub fn phase(&self) -> FormPhase {
		let inner = self.inner.borrow();
		match &inner.status {
			Some(status) if status.is_in_flight() => FormPhase::Submitting,
			_ if !inner.errors.is_empty() => FormPhase::Invalid,
			Some(status) if status.success() => FormPhase::Succeeded,
			Some(_) => FormPhase::Failed,
			None => FormPhase::Idle,
		}
	}

	/// Update one field and drop its error, if any, without re-validating.
	pub fn set_field(&self, field: ContactField, value: impl Into<String>) {
		let mut inner = self.inner.borrow_mut();
		inner.data.set(field, value);
		inner.errors.remove(field);
	}

	/// [`set_field`](Self::set_field) keyed by the input's `name` attribute.
	pub fn set_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
		let field = name.parse::<ContactField>()?;
		self.set_field(field, value);
		Ok(())
	}

	/// Run validation, store the result and report whether the form is valid.
	pub fn validate(&self) -> bool {
		let mut inner = self.inner.borrow_mut();
		inner.errors = inner.data.validate();
		inner.errors.is_empty()
	}

	/// Tear the form down. Responses arriving afterwards are discarded.
	pub fn unmount(&self) {
		self.inner.borrow_mut().unmounted = true;
	}

	pub fn is_mounted(&self) -> bool {
		!self.inner.borrow().unmounted
	}

	/// Validate and, when valid, mark the form as sending.
	///
	/// Returns the payload to send, or the outcome that ends this attempt
	/// early. Pair every `Ok` with exactly one [`finish_submit`](Self::finish_submit).
	pub fn begin_submit(&self) -> Result<ContactFormData, SubmitOutcome> {
		let mut inner = self.inner.borrow_mut();
		if inner.unmounted {
			return Err(SubmitOutcome::Discarded);
		}
		if inner.status.as_ref().is_some_and(SubmissionStatus::is_in_flight) {
			tracing::debug!("contact form submission already in flight");
			return Err(SubmitOutcome::AlreadySubmitting);
		}

		let errors = inner.data.validate();
		if !errors.is_empty() {
			tracing::debug!(fields = errors.len(), "contact form failed validation");
			inner.errors = errors.clone();
			return Err(SubmitOutcome::Invalid(errors));
		}

		inner.errors.clear();
		inner.status = Some(SubmissionStatus::sending(&inner.messages));
		Ok(inner.data.clone())
	}

	/// Record the result of the submission started by [`begin_submit`](Self::begin_submit).
	pub fn finish_submit<E>(&self, result: Result<(), E>) -> SubmitOutcome
	where
		E: std::fmt::Display,
	{
		let mut inner = self.inner.borrow_mut();
		if inner.unmounted {
			tracing::debug!("contact form unmounted, discarding submission result");
			return SubmitOutcome::Discarded;
		}

		match result {
			Ok(()) => {
				tracing::info!("contact form submitted");
				inner.status = Some(SubmissionStatus::succeeded(&inner.messages));
				inner.data = ContactFormData::default();
				SubmitOutcome::Sent
			}
			Err(err) => {
				tracing::warn!(error = %err, "contact form submission failed");
				inner.status = Some(SubmissionStatus::failed(&inner.messages));
				SubmitOutcome::Failed
			}
		}
	}

	/// Validate, send through `submitter` and record the result.
	pub async fn submit<S>(&self, submitter: &S) -> SubmitOutcome
	where
		S: ContactSubmitter + ?Sized,
	{
		let payload = match self.begin_submit() {
			Ok(payload) => payload,
			Err(outcome) => return outcome,
		};
		let result = submitter.submit_contact(&payload).await;
		self.finish_submit(result)
	}
}
