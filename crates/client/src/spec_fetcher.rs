use std::time::Duration;

use async_trait::async_trait;
use botapi_docs_core::{ApiSpec, SPEC_FETCH_TIMEOUT_SECS, SPEC_URL, Snapshot};
use chrono::Utc;

use crate::error::FetchError;

/// Source of fresh documentation snapshots.
#[async_trait]
pub trait SpecSource: Send + Sync {
    /// Fetches and decodes one complete snapshot.
    async fn fetch(&self) -> Result<Snapshot, FetchError>;
}

/// Downloads the Bot API specification document.
///
/// Holds no data between calls; every [`fetch`](SpecSource::fetch) issues one GET.
#[derive(Debug, Clone)]
pub struct SpecFetcher {
    client: reqwest::Client,
    url: String,
}

impl SpecFetcher {
    /// Creates a fetcher for the upstream specification URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new() -> Result<Self, FetchError> {
        Self::with_url(SPEC_URL)
    }

    /// Creates a fetcher for another URL serving the same document shape.
    pub fn with_url(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(SPEC_FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::ClientInit(e.to_string()))?;
        Ok(Self { client, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SpecSource for SpecFetcher {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let started = std::time::Instant::now();
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { code: status.as_u16() });
        }

        let body = response.bytes().await?;
        let spec: ApiSpec = serde_json::from_slice(&body)?;

        tracing::debug!(
            url = %self.url,
            bytes = body.len(),
            methods = spec.methods.len(),
            types = spec.types.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "fetched API specification"
        );

        Ok(Snapshot::from_spec(spec, Utc::now()))
    }
}
