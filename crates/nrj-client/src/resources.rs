//! Typed resource APIs
//!
//! Thin specializations of [`ContentClient::fetch_collection`], one per
//! content collection.

use crate::client::ContentClient;
use crate::error::ClientResult;
use crate::params::ContentQuery;
use nrj_content::{
	ContentEnvelope, PageContent, ProjectContent, ServiceContent, TestimonialContent,
};

/// Default page for [`Projects::all_default`].
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size for [`Projects::all_default`].
pub const DEFAULT_LIMIT: u32 = 10;

/// `/{collection}/{slug}` with the slug encoded as one path segment.
fn slug_path(collection: &str, slug: &str) -> String {
	format!("/{}/{}", collection, urlencoding::encode(slug))
}

/// `/pages`
#[derive(Debug, Clone, Copy)]
pub struct Pages<'a> {
	client: &'a ContentClient,
}

impl<'a> Pages<'a> {
	pub(crate) fn new(client: &'a ContentClient) -> Self {
		Self { client }
	}

	pub async fn all(&self) -> ClientResult<ContentEnvelope<Vec<PageContent>>> {
		self.client.fetch_collection("/pages", None).await
	}

	pub async fn by_slug(&self, slug: &str) -> ClientResult<ContentEnvelope<PageContent>> {
		self.client
			.fetch_collection(&slug_path("pages", slug), None)
			.await
	}

	pub async fn home(&self) -> ClientResult<ContentEnvelope<PageContent>> {
		self.client.fetch_collection("/pages/home", None).await
	}
}

/// `/services`
#[derive(Debug, Clone, Copy)]
pub struct Services<'a> {
	client: &'a ContentClient,
}

impl<'a> Services<'a> {
	pub(crate) fn new(client: &'a ContentClient) -> Self {
		Self { client }
	}

	pub async fn all(&self) -> ClientResult<ContentEnvelope<Vec<ServiceContent>>> {
		self.client.fetch_collection("/services", None).await
	}

	pub async fn by_slug(&self, slug: &str) -> ClientResult<ContentEnvelope<ServiceContent>> {
		self.client
			.fetch_collection(&slug_path("services", slug), None)
			.await
	}

	pub async fn featured(&self) -> ClientResult<ContentEnvelope<Vec<ServiceContent>>> {
		self.client
			.fetch_collection("/services", Some(&ContentQuery::featured()))
			.await
	}
}

/// `/projects`
#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
	client: &'a ContentClient,
}

impl<'a> Projects<'a> {
	pub(crate) fn new(client: &'a ContentClient) -> Self {
		Self { client }
	}

	/// One page of projects; `meta.pagination` describes the rest.
	pub async fn all(&self, page: u32, limit: u32) -> ClientResult<ContentEnvelope<Vec<ProjectContent>>> {
		self.client
			.fetch_collection("/projects", Some(&ContentQuery::page(page, limit)))
			.await
	}

	/// First page of ten projects.
	pub async fn all_default(&self) -> ClientResult<ContentEnvelope<Vec<ProjectContent>>> {
		self.all(DEFAULT_PAGE, DEFAULT_LIMIT).await
	}

	pub async fn by_slug(&self, slug: &str) -> ClientResult<ContentEnvelope<ProjectContent>> {
		self.client
			.fetch_collection(&slug_path("projects", slug), None)
			.await
	}

	pub async fn featured(&self) -> ClientResult<ContentEnvelope<Vec<ProjectContent>>> {
		self.client
			.fetch_collection("/projects", Some(&ContentQuery::featured()))
			.await
	}
}

/// `/testimonials`
#[derive(Debug, Clone, Copy)]
pub struct Testimonials<'a> {
	client: &'a ContentClient,
}

impl<'a> Testimonials<'a> {
	pub(crate) fn new(client: &'a ContentClient) -> Self {
		Self { client }
	}

	pub async fn all(&self) -> ClientResult<ContentEnvelope<Vec<TestimonialContent>>> {
		self.client.fetch_collection("/testimonials", None).await
	}

	pub async fn featured(&self) -> ClientResult<ContentEnvelope<Vec<TestimonialContent>>> {
		self.client
			.fetch_collection("/testimonials", Some(&ContentQuery::featured()))
			.await
	}
}
