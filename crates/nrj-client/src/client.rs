//! HTTP client for the content API
//!
//! Every typed resource call funnels into [`ContentClient::fetch_collection`],
//! which issues one GET, checks the status and decodes the `{data, meta}`
//! envelope. Failures are logged with their endpoint and then returned; there
//! is no retry.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::params::ContentQuery;
use crate::resources::{Pages, Projects, Services, Testimonials};
use async_trait::async_trait;
use nrj_conf::ApiSettings;
use nrj_content::ContentEnvelope;
use nrj_forms::{ContactFormData, ContactSubmitter};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

/// Endpoint receiving contact form submissions.
pub const CONTACT_FORM_ENDPOINT: &str = "/contact-form";

/// Client for one content API deployment
///
/// Cloning is cheap and shares the underlying connection pool.
///
/// # Examples
///
/// ```rust,no_run
/// use nrj_client::{ClientConfig, ContentClient};
///
/// # async fn example() -> Result<(), nrj_client::ClientError> {
/// let client = ContentClient::new(ClientConfig::new("https://cms.example.com")?)?;
/// let services = client.services().featured().await?;
/// for service in services.data {
///     println!("{}", service.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ContentClient {
	config: ClientConfig,
	http: reqwest::Client,
}

impl ContentClient {
	pub fn new(config: ClientConfig) -> ClientResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

		let http = reqwest::Client::builder()
			.timeout(config.timeout)
			.default_headers(headers)
			.build()
			.map_err(ClientError::Build)?;

		Ok(Self { config, http })
	}

	pub fn from_settings(settings: &ApiSettings) -> ClientResult<Self> {
		Self::new(ClientConfig::from_settings(settings)?)
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	pub fn pages(&self) -> Pages<'_> {
		Pages::new(self)
	}

	pub fn services(&self) -> Services<'_> {
		Services::new(self)
	}

	pub fn projects(&self) -> Projects<'_> {
		Projects::new(self)
	}

	pub fn testimonials(&self) -> Testimonials<'_> {
		Testimonials::new(self)
	}

	/// GET `endpoint` and decode the response envelope.
	///
	/// `query` is sent as the query string when present and non-empty.
	pub async fn fetch_collection<T>(
		&self,
		endpoint: &str,
		query: Option<&ContentQuery>,
	) -> ClientResult<ContentEnvelope<T>>
	where
		T: DeserializeOwned,
	{
		let result = self.get_envelope(endpoint, query).await;
		if let Err(err) = &result {
			tracing::error!(endpoint, error = %err, "content request failed");
		}
		result
	}

	async fn get_envelope<T>(
		&self,
		endpoint: &str,
		query: Option<&ContentQuery>,
	) -> ClientResult<ContentEnvelope<T>>
	where
		T: DeserializeOwned,
	{
		let url = self.config.url_for(endpoint);
		tracing::debug!(endpoint, %url, "GET");

		let mut req = self.http.get(&url);
		if let Some(query) = query.filter(|q| !q.is_empty()) {
			req = req.query(query);
		}

		let body = self.send(endpoint, req).await?;
		let envelope: ContentEnvelope<T> =
			serde_json::from_str(&body).map_err(|source| ClientError::Decode {
				endpoint: endpoint.to_string(),
				source,
			})?;

		if let Some(pagination) = envelope.pagination()
			&& !pagination.is_consistent()
		{
			tracing::warn!(
				endpoint,
				total = pagination.total,
				count = pagination.count,
				per_page = pagination.per_page,
				total_pages = pagination.total_pages,
				"inconsistent pagination metadata"
			);
		}

		Ok(envelope)
	}

	/// POST the contact form as JSON to `/contact-form`.
	///
	/// Returns the decoded response body: `Null` when empty, a JSON string
	/// when the body is not JSON. Not idempotent; a retried call may create a
	/// duplicate entry downstream.
	pub async fn submit_contact_form(&self, data: &ContactFormData) -> ClientResult<serde_json::Value> {
		let result = self.post_contact(data).await;
		if let Err(err) = &result {
			tracing::error!(
				endpoint = CONTACT_FORM_ENDPOINT,
				error = %err,
				"contact form submission failed"
			);
		}
		result
	}

	async fn post_contact(&self, data: &ContactFormData) -> ClientResult<serde_json::Value> {
		let url = self.config.url_for(CONTACT_FORM_ENDPOINT);
		tracing::debug!(endpoint = CONTACT_FORM_ENDPOINT, %url, "POST");

		let body = self
			.send(CONTACT_FORM_ENDPOINT, self.http.post(&url).json(data))
			.await?;

		if body.trim().is_empty() {
			return Ok(serde_json::Value::Null);
		}
		Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
	}

	/// Send a request and return the body of a 2xx response.
	async fn send(&self, endpoint: &str, req: reqwest::RequestBuilder) -> ClientResult<String> {
		let network = |source: reqwest::Error| ClientError::Network {
			endpoint: endpoint.to_string(),
			source,
		};

		let response = req.send().await.map_err(network)?;
		let status = response.status();

		if !status.is_success() {
			let body = match response.text().await {
				Ok(body) => body,
				Err(err) => {
					tracing::debug!(endpoint, error = %err, "failed to read error response body");
					String::new()
				}
			};
			return Err(ClientError::Http {
				endpoint: endpoint.to_string(),
				status: status.as_u16(),
				body,
			});
		}

		response.text().await.map_err(network)
	}
}

#[async_trait]
impl ContactSubmitter for ContentClient {
	type Error = ClientError;

	async fn submit_contact(&self, data: &ContactFormData) -> Result<(), Self::Error> {
		self.submit_contact_form(data).await.map(|_| ())
	}
}
