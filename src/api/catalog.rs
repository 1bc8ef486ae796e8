use crate::api::models::{Catalog, Track};
use crate::diagnostics::{log_perf, PerfTimer};
use once_cell::sync::Lazy;
use thiserror::Error;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog endpoint answered HTTP {0}")]
    Status(u16),

    #[error("catalog payload is not a track list: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Where the one-shot catalog load currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

pub struct CatalogClient {
    endpoint: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(endpoint, HTTP_CLIENT.clone())
    }

    pub fn with_http_client(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Single GET against the catalog endpoint. No retry, no timeout.
    pub async fn fetch_tracks(&self) -> Result<Vec<Track>> {
        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Run the session's catalog load and turn the outcome into what the UI
/// publishes. Failures are logged and leave an empty catalog behind.
pub async fn load_catalog(client: &CatalogClient) -> (Catalog, CatalogStatus) {
    let timer = PerfTimer::start();
    match client.fetch_tracks().await {
        Ok(tracks) => {
            let catalog = Catalog::new(tracks);
            log_perf(
                "catalog.fetch",
                &timer,
                &format!("{} tracks from {}", catalog.len(), client.endpoint()),
            );
            let duplicates = catalog.duplicate_sources();
            if !duplicates.is_empty() {
                tracing::warn!(
                    count = duplicates.len(),
                    "catalog has tracks sharing a source url; selection is ambiguous for them"
                );
            }
            (catalog, CatalogStatus::Loaded)
        }
        Err(err) => {
            tracing::error!(endpoint = client.endpoint(), error = %err, "Error fetching songs");
            (Catalog::default(), CatalogStatus::Failed(err.to_string()))
        }
    }
}
