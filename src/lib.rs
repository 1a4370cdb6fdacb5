//! # NRJ
//!
//! Content and contact-form core of the NRJ Builders & Surveyors website.
//!
//! The site renders pages, services, projects and testimonials served by a
//! remote content API, and collects enquiries through a contact form. This
//! crate bundles the pieces a rendering layer needs:
//!
//! - [`content`]: typed content records, the `{data, meta}` envelope, SEO
//!   metadata and built-in fallback content
//! - [`client`]: the HTTP client for the content API
//! - [`forms`]: the contact form controller and its validation
//! - [`conf`]: deployment settings with `NRJ_*` environment overrides
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `conf` - settings
//! - `forms` - contact form controller
//! - `client` - content API client (implies `conf` and `forms`)
//! - `logging` - subscriber setup (implies `conf`)
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use nrj::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::load(None)?;
//! nrj::logging::init(&settings.logging);
//!
//! let client = ContentClient::from_settings(&settings.api)?;
//! let home = load_home_or_fallback(&client).await;
//! println!("{}", home.seo().full_title());
//!
//! let form = ContactForm::new();
//! form.set_field(ContactField::Name, "Ada");
//! form.set_field(ContactField::Email, "ada@example.com");
//! form.set_field(ContactField::Message, "I'd like a quote for a loft conversion.");
//! match form.submit(&client).await {
//!     SubmitOutcome::Sent => println!("sent"),
//!     SubmitOutcome::Invalid(errors) => println!("{} fields need attention", errors.len()),
//!     other => println!("{other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "conf")]
pub mod conf;
pub mod content;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "logging")]
pub mod logging;

// Re-export content types
pub use nrj_content::{
	ContentEnvelope, Pagination, PageContent, ProjectContent, Section, SeoMeta, ServiceContent,
	TestimonialContent,
};

// Re-export settings
#[cfg(feature = "conf")]
pub use nrj_conf::{Settings, SettingsError};

// Re-export the client
#[cfg(feature = "client")]
pub use nrj_client::{ClientConfig, ClientError, ContentClient};

// Re-export the form controller
#[cfg(feature = "forms")]
pub use nrj_forms::{ContactForm, ContactFormData, SubmissionStatus, ValidationErrors};

/// Commonly used items, for glob import
pub mod prelude {
	pub use nrj_content::{
		ContentEnvelope, ImageAsset, PageContent, Pagination, ProjectContent, Section, SeoMeta,
		ServiceContent, TestimonialContent,
	};

	#[cfg(feature = "conf")]
	pub use nrj_conf::{Settings, SettingsError};

	#[cfg(feature = "client")]
	pub use nrj_client::{
		ClientConfig, ClientError, ContentClient, ContentQuery, HomeContent, load_home,
		load_home_or_fallback,
	};

	#[cfg(feature = "forms")]
	pub use nrj_forms::{
		ContactField, ContactForm, ContactFormData, ContactSubmitter, FormPhase, SubmissionStatus,
		SubmitOutcome, ValidationErrors,
	};
}
