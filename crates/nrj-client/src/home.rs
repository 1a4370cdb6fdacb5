//! Home page aggregate
//!
//! The home page combines the home page record with the featured services,
//! projects and testimonials. When the API is unavailable the site renders
//! the built-in [`nrj_content::fallback`] content instead.

use crate::client::ContentClient;
use crate::error::ClientResult;
use nrj_content::{
	PageContent, ProjectContent, SeoMeta, ServiceContent, TestimonialContent, fallback,
};
use serde::Serialize;

/// Everything the home page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeContent {
	pub page: PageContent,
	pub services: Vec<ServiceContent>,
	pub projects: Vec<ProjectContent>,
	pub testimonials: Vec<TestimonialContent>,
}

impl HomeContent {
	/// Built-in content shown when the API cannot be reached.
	pub fn fallback() -> Self {
		Self {
			page: fallback::home_page(),
			services: fallback::services(),
			projects: fallback::projects(),
			testimonials: fallback::testimonials(),
		}
	}

	pub fn seo(&self) -> SeoMeta {
		SeoMeta::for_page(&self.page)
	}
}

/// Fetch the home page and its featured collections concurrently.
///
/// Fails with the first error; the other requests are dropped.
pub async fn load_home(client: &ContentClient) -> ClientResult<HomeContent> {
	let (pages_api, services_api) = (client.pages(), client.services());
	let (projects_api, testimonials_api) = (client.projects(), client.testimonials());

	let (page, services, projects, testimonials) = futures::try_join!(
		pages_api.home(),
		services_api.featured(),
		projects_api.featured(),
		testimonials_api.featured(),
	)?;

	Ok(HomeContent {
		page: page.data,
		services: services.data,
		projects: projects.data,
		testimonials: testimonials.data,
	})
}

/// [`load_home`], falling back to [`HomeContent::fallback`] on any error.
pub async fn load_home_or_fallback(client: &ContentClient) -> HomeContent {
	match load_home(client).await {
		Ok(home) => home,
		Err(err) => {
			tracing::warn!(error = %err, "home content unavailable, using fallback");
			HomeContent::fallback()
		}
	}
}
