//! Content records served by the content API
//!
//! Timestamps and dates are kept as the strings the API sends; the
//! presentational layer formats them.

use crate::section::Section;
use serde::{Deserialize, Serialize};

/// An image stored in the content backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
	pub id: u64,
	pub url: String,
	pub alt: String,
	pub width: u32,
	pub height: u32,
	#[serde(default)]
	pub mime_type: String,
}

impl ImageAsset {
	/// Create an image asset
	///
	/// # Examples
	///
	/// ```
	/// use nrj_content::ImageAsset;
	///
	/// let image = ImageAsset::new(1, "https://example.com/a.jpeg", "Site", 800, 600);
	/// assert_eq!(image.mime_type, "image/jpeg");
	/// ```
	pub fn new(id: u64, url: impl Into<String>, alt: impl Into<String>, width: u32, height: u32) -> Self {
		let url = url.into();
		let mime_type = mime_type_for(&url).to_string();
		Self {
			id,
			url,
			alt: alt.into(),
			width,
			height,
			mime_type,
		}
	}

	/// Width divided by height, `None` for a zero height.
	pub fn aspect_ratio(&self) -> Option<f64> {
		if self.height == 0 {
			None
		} else {
			Some(f64::from(self.width) / f64::from(self.height))
		}
	}
}

fn mime_type_for(url: &str) -> &'static str {
	let path = url.split(['?', '#']).next().unwrap_or(url);
	match path.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
		Some("jpg" | "jpeg") => "image/jpeg",
		Some("png") => "image/png",
		Some("webp") => "image/webp",
		Some("gif") => "image/gif",
		Some("svg") => "image/svg+xml",
		_ => "application/octet-stream",
	}
}

/// A CMS page (home, about, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
	pub id: u64,
	pub slug: String,
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub meta_title: String,
	#[serde(default)]
	pub meta_description: String,
	#[serde(default)]
	pub hero_image: Option<ImageAsset>,
	#[serde(default)]
	pub sections: Vec<Section>,
	#[serde(default)]
	pub created_at: String,
	#[serde(default)]
	pub updated_at: String,
}

/// A bullet point shown on a service detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
	pub id: u64,
	pub title: String,
	pub description: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceContent {
	pub id: u64,
	pub slug: String,
	pub title: String,
	pub description: String,
	/// Icon name understood by the rendering layer (e.g. `Building`)
	#[serde(default)]
	pub icon: String,
	#[serde(default)]
	pub content: String,
	pub image: ImageAsset,
	#[serde(default)]
	pub features: Vec<Feature>,
	#[serde(default)]
	pub created_at: String,
	#[serde(default)]
	pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectContent {
	pub id: u64,
	pub slug: String,
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub client: String,
	#[serde(default)]
	pub completion_date: String,
	#[serde(default)]
	pub images: Vec<ImageAsset>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub testimonial: Option<TestimonialContent>,
	#[serde(default)]
	pub created_at: String,
	#[serde(default)]
	pub updated_at: String,
}

impl ProjectContent {
	/// The image used on project cards.
	pub fn cover_image(&self) -> Option<&ImageAsset> {
		self.images.first()
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialContent {
	pub id: u64,
	pub client_name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_company: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_photo: Option<ImageAsset>,
	pub content: String,
	pub rating: u8,
	#[serde(default)]
	pub created_at: String,
	#[serde(default)]
	pub updated_at: String,
}

impl TestimonialContent {
	/// Highest rating a testimonial can display.
	pub const MAX_RATING: u8 = 5;

	/// Number of filled stars, clamped to [`Self::MAX_RATING`].
	///
	/// # Examples
	///
	/// ```
	/// use nrj_content::TestimonialContent;
	///
	/// let testimonial: TestimonialContent = serde_json::from_str(
	///     r#"{"id": 1, "client_name": "A", "content": "Great", "rating": 9}"#,
	/// ).unwrap();
	/// assert_eq!(testimonial.stars(), 5);
	/// ```
	pub fn stars(&self) -> u8 {
		self.rating.min(Self::MAX_RATING)
	}

	/// "Name, Company" or just the name.
	pub fn attribution(&self) -> String {
		match self.client_company.as_deref() {
			Some(company) if !company.is_empty() => format!("{}, {}", self.client_name, company),
			_ => self.client_name.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("https://images.example.com/a.jpeg", "image/jpeg")]
	#[case("https://images.example.com/a.JPG", "image/jpeg")]
	#[case("https://images.example.com/a.png?w=200", "image/png")]
	#[case("https://images.example.com/a.webp#top", "image/webp")]
	#[case("https://images.example.com/noext", "application/octet-stream")]
	fn test_mime_type_from_url(#[case] url: &str, #[case] expected: &str) {
		assert_eq!(mime_type_for(url), expected);
	}

	#[rstest]
	fn test_aspect_ratio() {
		let image = ImageAsset::new(1, "a.png", "a", 800, 600);
		assert_eq!(image.aspect_ratio(), Some(800.0 / 600.0));

		let flat = ImageAsset::new(2, "b.png", "b", 800, 0);
		assert_eq!(flat.aspect_ratio(), None);
	}

	#[rstest]
	fn test_service_summary_deserializes_without_detail_fields() {
		let json = r#"{
			"id": 1,
			"slug": "renovations",
			"title": "Renovations",
			"description": "Kitchens and bathrooms",
			"image": {"id": 3, "url": "https://e.com/r.jpeg", "alt": "Renovations", "width": 800, "height": 600}
		}"#;

		let service: ServiceContent = serde_json::from_str(json).unwrap();

		assert_eq!(service.slug, "renovations");
		assert!(service.features.is_empty());
		assert!(service.content.is_empty());
		assert_eq!(service.image.mime_type, "");
	}

	#[rstest]
	fn test_project_with_nested_testimonial() {
		let json = r#"{
			"id": 7,
			"slug": "office",
			"title": "Office",
			"description": "Offices",
			"images": [{"id": 1, "url": "https://e.com/o.jpeg", "alt": "Office", "width": 10, "height": 10, "mime_type": "image/jpeg"}],
			"testimonial": {"id": 2, "client_name": "Sarah", "content": "Great", "rating": 5}
		}"#;

		let project: ProjectContent = serde_json::from_str(json).unwrap();

		assert_eq!(project.cover_image().map(|i| i.id), Some(1));
		assert_eq!(project.testimonial.as_ref().map(|t| t.stars()), Some(5));
	}

	#[rstest]
	#[case(Some("Johnson Properties"), "Sarah Johnson, Johnson Properties")]
	#[case(Some(""), "Sarah Johnson")]
	#[case(None, "Sarah Johnson")]
	fn test_testimonial_attribution(#[case] company: Option<&str>, #[case] expected: &str) {
		let testimonial = TestimonialContent {
			id: 1,
			client_name: "Sarah Johnson".to_string(),
			client_company: company.map(str::to_string),
			client_photo: None,
			content: "Great".to_string(),
			rating: 5,
			created_at: String::new(),
			updated_at: String::new(),
		};

		assert_eq!(testimonial.attribution(), expected);
	}
}
