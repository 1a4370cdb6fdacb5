//! Query parameters for collection endpoints

use serde::Serialize;

/// Typed query string for content collections
///
/// Unset fields are omitted from the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentQuery {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub featured: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub limit: Option<u32>,
}

impl ContentQuery {
	/// `?featured=true`
	pub fn featured() -> Self {
		Self {
			featured: Some(true),
			..Default::default()
		}
	}

	/// `?page={page}&limit={limit}`
	pub fn page(page: u32, limit: u32) -> Self {
		Self {
			page: Some(page),
			limit: Some(limit),
			..Default::default()
		}
	}

	pub fn is_empty(&self) -> bool {
		self.featured.is_none() && self.page.is_none() && self.limit.is_none()
	}
}
