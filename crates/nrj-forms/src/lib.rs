//! Contact form state and validation
//!
//! - [`ContactFormData`]: the five form values, also the JSON body posted to the API
//! - [`ValidationErrors`]: per-field messages produced by [`ContactFormData::validate`]
//! - [`ContactForm`]: the controller driving the submission lifecycle
//! - [`ContactSubmitter`]: the transport seam, implemented by the content client

pub mod controller;
pub mod data;
pub mod status;
pub mod validators;

pub use controller::{ContactForm, ContactSubmitter, FormPhase, SubmitOutcome};
pub use data::{ContactField, ContactFormData, UnknownField};
pub use status::{FormMessages, SubmissionStatus};
pub use validators::{EmailValidator, FieldError, FieldResult, RequiredValidator, ValidationErrors};
