//! Run configuration and pipeline settings
//!
//! Both records are built once at process start and handed to each stage
//! explicitly.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{BAR_TEMPLATE, DEFAULT_TIMEOUT_SECS, EXIT_ADDRESSES_URL};

/// Behavioral flags supplied by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Write results to this file instead of stdout
    pub export_path: Option<PathBuf>,
    /// Print nothing but the final result
    pub silent: bool,
    /// Echo internal values to the console
    pub debug: bool,
}

impl RunConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_export(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = Some(path.into());
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn export_path(&self) -> Option<&Path> {
        self.export_path.as_deref()
    }
}

/// Constants of the pipeline, overridable for testing and proxying
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Exit address listing endpoint
    pub endpoint: String,
    /// Fetch timeout in seconds
    pub timeout_secs: u64,
    /// Optional proxy URL (e.g. socks5h://127.0.0.1:9050)
    pub proxy: Option<String>,
    /// Progress bar template shown during extraction
    pub bar_template: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            endpoint: EXIT_ADDRESSES_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            proxy: None,
            bar_template: BAR_TEMPLATE.to_string(),
        }
    }
}

impl PipelineSettings {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
