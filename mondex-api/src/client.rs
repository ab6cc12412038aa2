use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{ListingPage, Pokemon};

const BASE_URL: &str = "https://pokeapi.co/api/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only access to the remote catalog: a paged listing of stubs and a
/// per-name detail lookup. Both operations are idempotent and have no side
/// effects on the remote system.
pub trait CatalogGateway: Send + Sync {
    /// Fetch one page of name/url stubs, `offset` entries into the listing.
    fn fetch_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<ListingPage, ApiError>> + Send;

    /// Fetch the full record for one named entry.
    fn fetch_detail(&self, name: &str) -> impl Future<Output = Result<Pokemon, ApiError>> + Send;
}

/// HTTP client for the PokeAPI catalog.
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client against the public PokeAPI endpoint.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client against an alternate endpoint (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl CatalogGateway for PokeApiClient {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<ListingPage, ApiError> {
        self.get_json(format!(
            "{}/pokemon?limit={limit}&offset={offset}",
            self.base_url
        ))
        .await
    }

    async fn fetch_detail(&self, name: &str) -> Result<Pokemon, ApiError> {
        self.get_json(format!("{}/pokemon/{name}", self.base_url)).await
    }
}
