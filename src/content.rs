//! Content module.
//!
//! Typed records served by the content API.
//!
//! # Examples
//!
//! ```rust
//! use nrj::content::{SeoMeta, fallback};
//!
//! let page = fallback::home_page();
//! let seo = SeoMeta::for_page(&page);
//! assert_eq!(seo.full_title(), "Expert Construction & Surveying Services | NRJ Builders & Surveyors");
//! ```

pub use nrj_content::*;
