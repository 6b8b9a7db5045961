//! Exit address listing fetcher
//!
//! One GET per run, no retries. Only HTTP 200 counts as success.

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::{create_client, FetchConfig, FetchError};

/// Raw listing returned by a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    /// HTTP status code (always 200)
    pub status: u16,
    /// Response text
    pub body: String,
}

/// Outcome of a single fetch
pub type FetchResult = Result<FetchedBody, FetchError>;

/// Fetch the listing from the configured endpoint
pub async fn fetch(config: &FetchConfig) -> FetchResult {
    let client = create_client(config)?;

    debug!("Fetching exit addresses from {}", config.endpoint);

    let response = client.get(&config.endpoint).send().await?;
    let status = response.status();

    debug!("Listing endpoint returned status: {}", status);

    if status.is_client_error() || status.is_server_error() {
        warn!("Listing endpoint returned status: {}", status);
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
            url: config.endpoint.clone(),
        });
    }

    if status != StatusCode::OK {
        warn!("Listing endpoint returned non-200 status: {}", status);
        return Err(FetchError::UnexpectedStatus {
            status: status.as_u16(),
            url: config.endpoint.clone(),
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Transport {
        source,
        status: Some(status.as_u16()),
    })?;

    debug!("Fetched {} bytes", body.len());

    Ok(FetchedBody {
        status: status.as_u16(),
        body,
    })
}
