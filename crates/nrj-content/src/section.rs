//! Page sections
//!
//! A page body is a list of sections, each tagged by `type` in the API
//! payload. Every variant carries only the fields it renders.

use crate::types::{ImageAsset, ProjectContent, ServiceContent, TestimonialContent};
use serde::{Deserialize, Serialize};

/// A block of page content
///
/// # Examples
///
/// ```
/// use nrj_content::Section;
///
/// let json = r#"{"type": "cta", "id": 4, "title": "Ready?", "cta_text": "Contact Us", "cta_link": "/contact"}"#;
/// let section: Section = serde_json::from_str(json).unwrap();
/// assert_eq!(section.kind(), "cta");
/// assert_eq!(section.id(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
	Text {
		id: u64,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		title: Option<String>,
		content: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		background_color: Option<String>,
	},
	Image {
		id: u64,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		title: Option<String>,
		image: ImageAsset,
		/// Caption
		#[serde(default, skip_serializing_if = "Option::is_none")]
		content: Option<String>,
	},
	Gallery {
		id: u64,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		title: Option<String>,
		#[serde(default)]
		items: Vec<ImageAsset>,
	},
	Cta {
		id: u64,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		title: Option<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		content: Option<String>,
		cta_text: String,
		cta_link: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		background_color: Option<String>,
		/// Background image
		#[serde(default, skip_serializing_if = "Option::is_none")]
		image: Option<ImageAsset>,
	},
	Services {
		id: u64,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		title: Option<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		content: Option<String>,
		#[serde(default)]
		items: Vec<ServiceContent>,
	},
	Projects {
		id: u64,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		title: Option<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		content: Option<String>,
		#[serde(default)]
		items: Vec<ProjectContent>,
	},
	Testimonials {
		id: u64,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		title: Option<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		content: Option<String>,
		#[serde(default)]
		items: Vec<TestimonialContent>,
	},
}

impl Section {
	pub fn id(&self) -> u64 {
		match self {
			Section::Text { id, .. }
			| Section::Image { id, .. }
			| Section::Gallery { id, .. }
			| Section::Cta { id, .. }
			| Section::Services { id, .. }
			| Section::Projects { id, .. }
			| Section::Testimonials { id, .. } => *id,
		}
	}

	pub fn title(&self) -> Option<&str> {
		match self {
			Section::Text { title, .. }
			| Section::Image { title, .. }
			| Section::Gallery { title, .. }
			| Section::Cta { title, .. }
			| Section::Services { title, .. }
			| Section::Projects { title, .. }
			| Section::Testimonials { title, .. } => title.as_deref(),
		}
	}

	/// The wire tag of this variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Section::Text { .. } => "text",
			Section::Image { .. } => "image",
			Section::Gallery { .. } => "gallery",
			Section::Cta { .. } => "cta",
			Section::Services { .. } => "services",
			Section::Projects { .. } => "projects",
			Section::Testimonials { .. } => "testimonials",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_text_section() {
		let json = r##"{"type": "text", "id": 1, "title": "About", "content": "We build.", "background_color": "#fff"}"##;

		let section: Section = serde_json::from_str(json).unwrap();

		assert_eq!(
			section,
			Section::Text {
				id: 1,
				title: Some("About".to_string()),
				content: "We build.".to_string(),
				background_color: Some("#fff".to_string()),
			}
		);
		assert_eq!(section.title(), Some("About"));
	}

	#[rstest]
	fn test_gallery_items_are_images() {
		let json = r#"{
			"type": "gallery",
			"id": 2,
			"items": [
				{"id": 1, "url": "https://e.com/1.jpeg", "alt": "one", "width": 1, "height": 1},
				{"id": 2, "url": "https://e.com/2.jpeg", "alt": "two", "width": 1, "height": 1}
			]
		}"#;

		let section: Section = serde_json::from_str(json).unwrap();

		match section {
			Section::Gallery { items, title, .. } => {
				assert_eq!(items.len(), 2);
				assert!(title.is_none());
			}
			other => panic!("expected gallery, got {other:?}"),
		}
	}

	#[rstest]
	fn test_testimonials_section_without_items() {
		let section: Section =
			serde_json::from_str(r#"{"type": "testimonials", "id": 9}"#).unwrap();

		assert_eq!(section.kind(), "testimonials");
		assert_eq!(section.id(), 9);
	}

	#[rstest]
	fn test_unknown_section_type_is_rejected() {
		let result = serde_json::from_str::<Section>(r#"{"type": "carousel", "id": 1}"#);
		assert!(result.is_err());
	}

	#[rstest]
	fn test_cta_requires_link() {
		let result =
			serde_json::from_str::<Section>(r#"{"type": "cta", "id": 1, "cta_text": "Go"}"#);
		assert!(result.is_err());
	}

	#[rstest]
	fn test_serialized_section_keeps_tag() {
		let section = Section::Text {
			id: 3,
			title: None,
			content: "Body".to_string(),
			background_color: None,
		};

		let value = serde_json::to_value(&section).unwrap();

		assert_eq!(
			value,
			serde_json::json!({"type": "text", "id": 3, "content": "Body"})
		);
	}
}
