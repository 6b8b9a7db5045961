//! Exitwatch Runtime
//!
//! Drives the linear pipeline:
//! - Fetch the exit address listing
//! - Extract addresses in listing order
//! - Emit them to a file or stdout
//!
//! Console presentation is delegated to a [`Reporter`] supplied by the caller.

pub mod pipeline;
pub mod report;
pub mod sink;

pub use pipeline::*;
pub use report::*;
pub use sink::*;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use exitwatch_tor::FetchError;

/// Errors that end a run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to export results to {}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write results")]
    Output(#[from] io::Error),
}
