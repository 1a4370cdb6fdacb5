//! Typed client for the NRJ content API
//!
//! ## Example
//!
//! ```rust,no_run
//! use nrj_client::{ClientConfig, ContentClient, home};
//!
//! # async fn example() -> Result<(), nrj_client::ClientError> {
//! let client = ContentClient::new(ClientConfig::new("https://cms.example.com")?)?;
//!
//! let about = client.pages().by_slug("about").await?;
//! let projects = client.projects().all(2, 10).await?;
//! if let Some(pagination) = projects.pagination() {
//!     println!("page {} of {}", pagination.current_page, pagination.total_pages);
//! }
//!
//! let home = home::load_home_or_fallback(&client).await;
//! # let _ = (about, home);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod home;
pub mod params;
pub mod resources;

pub use client::{CONTACT_FORM_ENDPOINT, ContentClient};
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::{ClientError, ClientResult};
pub use home::{HomeContent, load_home, load_home_or_fallback};
pub use params::ContentQuery;
pub use resources::{Pages, Projects, Services, Testimonials};
