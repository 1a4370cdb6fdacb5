//! Content shapes for the NRJ Builders & Surveyors site
//!
//! This crate holds the typed objects exchanged between the content API and
//! the presentational layer:
//! - [`ContentEnvelope`]: the `{ data, meta }` wrapper around every response
//! - Page, service, project and testimonial records with their image assets
//! - [`Section`]: the tagged union of page section variants
//! - [`SeoMeta`]: page head metadata (title, Open Graph and Twitter tags)
//! - [`fallback`]: the built-in home page content used when the API is down
//!
//! ## Example
//!
//! ```
//! use nrj_content::{ContentEnvelope, ServiceContent};
//!
//! let json = r#"{"data": []}"#;
//! let envelope: ContentEnvelope<Vec<ServiceContent>> = serde_json::from_str(json).unwrap();
//! assert!(envelope.data.is_empty());
//! assert!(envelope.pagination().is_none());
//! ```

pub mod envelope;
pub mod fallback;
pub mod section;
pub mod seo;
pub mod types;

pub use envelope::{ContentEnvelope, EnvelopeMeta, Pagination};
pub use section::Section;
pub use seo::{MetaTag, SeoKind, SeoMeta};
pub use types::{
	Feature, ImageAsset, PageContent, ProjectContent, ServiceContent, TestimonialContent,
};

/// Display name of the business, used in page titles and Open Graph tags.
pub const SITE_TITLE: &str = "NRJ Builders & Surveyors";
