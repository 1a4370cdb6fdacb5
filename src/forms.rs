//! Contact form module.
//!
//! # Examples
//!
//! ```rust
//! use nrj::forms::{ContactField, ContactForm};
//!
//! let form = ContactForm::new();
//! assert!(!form.validate());
//! assert_eq!(form.error(ContactField::Email).as_deref(), Some("Email is required"));
//! ```

pub use nrj_forms::*;
