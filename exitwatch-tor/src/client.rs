//! HTTP client for the exit address listing
//!
//! Creates a client with transport defaults, optionally routed through a proxy.

use reqwest::{Client, Proxy};
use std::time::Duration;
use thiserror::Error;

use exitwatch_core::{PipelineSettings, DEFAULT_TIMEOUT_SECS, EXIT_ADDRESSES_URL};

/// Fetch configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Listing endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Proxy address (e.g. socks5h://127.0.0.1:9050), direct when unset
    pub proxy: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: EXIT_ADDRESSES_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
        }
    }
}

impl From<&PipelineSettings> for FetchConfig {
    fn from(settings: &PipelineSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            timeout_secs: settings.timeout_secs,
            proxy: settings.proxy.clone(),
        }
    }
}

/// Errors from fetching the listing
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed")]
    Transport {
        #[source]
        source: reqwest::Error,
        status: Option<u16>,
    },

    #[error("HTTP status {status} returned by {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Unexpected HTTP status {status} returned by {url} (expected 200)")]
    UnexpectedStatus { status: u16, url: String },
}

impl FetchError {
    /// Last HTTP status observed before the failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ClientBuild(_) => None,
            Self::Transport { status, .. } => *status,
            Self::HttpStatus { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
        }
    }

    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(source: reqwest::Error) -> Self {
        let status = source.status().map(|s| s.as_u16());
        Self::Transport { source, status }
    }
}

/// Create the HTTP client used for a single fetch
pub fn create_client(config: &FetchConfig) -> Result<Client, FetchError> {
    let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));

    if let Some(addr) = &config.proxy {
        let proxy = Proxy::all(addr).map_err(|e| FetchError::ClientBuild(e.to_string()))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| FetchError::ClientBuild(e.to_string()))
}
