//! Page head metadata
//!
//! [`SeoMeta`] describes what a page puts in its `<head>`: the full title and
//! the description, canonical, Open Graph and Twitter card tags. Rendering the
//! tags into HTML is left to the presentational layer.

use crate::SITE_TITLE;
use crate::types::PageContent;
use serde::{Deserialize, Serialize};

/// Image used for social cards when a page has none of its own.
pub const DEFAULT_IMAGE: &str = "https://example.com/default-image.jpg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoKind {
	#[default]
	Website,
	Article,
}

impl SeoKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			SeoKind::Website => "website",
			SeoKind::Article => "article",
		}
	}
}

/// A single `<meta>` or `<link>` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "attr", rename_all = "snake_case")]
pub enum MetaTag {
	/// `<meta name=".." content="..">`
	Name { key: String, content: String },
	/// `<meta property=".." content="..">`
	Property { key: String, content: String },
	/// `<link rel=".." href="..">`
	Link { rel: String, href: String },
}

impl MetaTag {
	fn name(key: &str, content: impl Into<String>) -> Self {
		MetaTag::Name {
			key: key.to_string(),
			content: content.into(),
		}
	}

	fn property(key: &str, content: impl Into<String>) -> Self {
		MetaTag::Property {
			key: key.to_string(),
			content: content.into(),
		}
	}
}

/// Head metadata for one page
///
/// # Examples
///
/// ```
/// use nrj_content::SeoMeta;
///
/// let seo = SeoMeta::new("Contact Us", "Get in touch.");
/// assert_eq!(seo.full_title(), "Contact Us | NRJ Builders & Surveyors");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMeta {
	pub title: String,
	pub description: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub canonical: Option<String>,
	pub image: String,
	#[serde(default)]
	pub kind: SeoKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub published_at: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<String>,
}

impl SeoMeta {
	pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			canonical: None,
			image: DEFAULT_IMAGE.to_string(),
			kind: SeoKind::Website,
			published_at: None,
			updated_at: None,
		}
	}

	/// Derive metadata from a CMS page.
	///
	/// `meta_title`/`meta_description` win over `title`/`description` when set;
	/// the hero image becomes the social image.
	pub fn for_page(page: &PageContent) -> Self {
		let title = non_empty(&page.meta_title).unwrap_or(&page.title);
		let description = non_empty(&page.meta_description).unwrap_or(&page.description);
		let mut seo = Self::new(title, description);
		if let Some(hero) = &page.hero_image {
			seo.image = hero.url.clone();
		}
		seo.updated_at = non_empty(&page.updated_at).map(str::to_string);
		seo.published_at = non_empty(&page.created_at).map(str::to_string);
		seo
	}

	pub fn with_canonical(mut self, url: impl Into<String>) -> Self {
		self.canonical = Some(url.into());
		self
	}

	pub fn with_image(mut self, url: impl Into<String>) -> Self {
		self.image = url.into();
		self
	}

	/// Mark the page as an article with its publication timestamps.
	pub fn as_article(mut self, published_at: Option<String>, updated_at: Option<String>) -> Self {
		self.kind = SeoKind::Article;
		self.published_at = published_at;
		self.updated_at = updated_at;
		self
	}

	/// `"{title} | NRJ Builders & Surveyors"`
	pub fn full_title(&self) -> String {
		format!("{} | {}", self.title, SITE_TITLE)
	}

	/// The tag list for the page head, in emission order.
	///
	/// Article timestamps are only emitted for [`SeoKind::Article`]; the
	/// canonical link is omitted when no canonical URL is known.
	pub fn meta_tags(&self) -> Vec<MetaTag> {
		let mut tags = vec![MetaTag::name("description", &self.description)];

		if let Some(canonical) = &self.canonical {
			tags.push(MetaTag::Link {
				rel: "canonical".to_string(),
				href: canonical.clone(),
			});
		}

		tags.push(MetaTag::property("og:site_name", SITE_TITLE));
		tags.push(MetaTag::property("og:title", &self.title));
		tags.push(MetaTag::property("og:description", &self.description));
		if let Some(canonical) = &self.canonical {
			tags.push(MetaTag::property("og:url", canonical));
		}
		tags.push(MetaTag::property("og:image", &self.image));
		tags.push(MetaTag::property("og:type", self.kind.as_str()));

		tags.push(MetaTag::name("twitter:card", "summary_large_image"));
		tags.push(MetaTag::name("twitter:title", &self.title));
		tags.push(MetaTag::name("twitter:description", &self.description));
		tags.push(MetaTag::name("twitter:image", &self.image));

		if self.kind == SeoKind::Article {
			if let Some(published) = &self.published_at {
				tags.push(MetaTag::property("article:published_time", published));
			}
			if let Some(updated) = &self.updated_at {
				tags.push(MetaTag::property("article:modified_time", updated));
			}
		}

		tags
	}
}

fn non_empty(value: &str) -> Option<&str> {
	if value.trim().is_empty() {
		None
	} else {
		Some(value)
	}
}
