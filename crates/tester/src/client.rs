//! HTTP client for the products endpoint.

use catalogcheck_products::Product;
use thiserror::Error;

/// Default endpoint tested when no URL is configured.
pub const DEFAULT_PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// Fetch failure. Any variant is fatal to a run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to make request to {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("failed to read response body (status {status}): {source}")]
    Body { status: u16, source: reqwest::Error },

    #[error("failed to parse JSON (status {status}): {source}")]
    Decode { status: u16, source: serde_json::Error },
}

impl FetchError {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Client(_) | FetchError::Request { .. } => None,
            FetchError::Body { status, .. } | FetchError::Decode { status, .. } => Some(*status),
        }
    }
}

/// Products decoded from a response, with the status they arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedProducts {
    pub status: u16,
    pub products: Vec<Product>,
}

/// Fetches the product list from one endpoint.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: reqwest::Client,
    url: String,
}

impl ProductClient {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("api-tester/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::with_client(http, url))
    }

    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one GET and decode the body as a JSON array of products (`null` counts as
    /// an empty array).
    ///
    /// A non-200 status is not an error on its own; the caller records it. The body
    /// still has to decode, so an error page fails with [`FetchError::Decode`].
    pub async fn fetch_products(&self) -> Result<FetchedProducts, FetchError> {
        tracing::debug!(url = %self.url, "requesting products");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Body { status, source })?;

        let mut de = serde_json::Deserializer::from_slice(&body);
        let products = Product::list_from_json(&mut de)
            .and_then(|products| de.end().map(|()| products))
            .map_err(|source| FetchError::Decode { status, source })?;

        tracing::info!(status, count = products.len(), "fetched products");
        Ok(FetchedProducts { status, products })
    }
}
