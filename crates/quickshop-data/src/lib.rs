//! Resource fetching for Quickshop.
//!
//! Loads a static resource either over HTTP or from the local filesystem and
//! hands back a fully buffered [`Response`] with JSON helpers.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickshop_data::{FetchClient, Resource};
//!
//! let client = FetchClient::new()?;
//! let resource = Resource::parse("https://shop.example.com/data/products.json")?;
//! let products: Vec<serde_json::Value> = client
//!     .load(&resource)
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod resource;
mod response;

pub use error::FetchError;
pub use request::RequestBuilder;
pub use resource::Resource;
pub use response::Response;

use std::time::Duration;

/// Client for loading remote and local JSON resources.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl FetchClient {
    /// Create a new client with no timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    /// Start configuring a client.
    pub fn builder() -> FetchClientBuilder {
        FetchClientBuilder::default()
    }

    /// Create a GET request for an absolute URL.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        let mut builder = RequestBuilder::new(self.client.clone(), url);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }

    /// Load a resource from wherever it lives.
    ///
    /// Remote responses are returned regardless of status; local read
    /// failures surface as [`FetchError::Io`].
    pub async fn load(&self, resource: &Resource) -> Result<Response, FetchError> {
        match resource {
            Resource::Remote(url) => self.get(url.as_str()).send().await,
            Resource::Local(path) => {
                let body = tokio::fs::read(path).await.map_err(|e| FetchError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                tracing::debug!(path = %path.display(), bytes = body.len(), "read local resource");
                Ok(Response::from_file(body))
            }
        }
    }
}

/// Builder for [`FetchClient`].
#[derive(Debug, Default)]
pub struct FetchClientBuilder {
    timeout: Option<Duration>,
}

impl FetchClientBuilder {
    /// Apply a timeout to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FetchClient, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quickshop/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(FetchClient {
            client,
            timeout: self.timeout,
        })
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Resource, Response};
}
