//! Pipeline Coordinator
//!
//! Runs the three stages strictly in sequence:
//! - Fetch the listing once, aborting the run on any failure
//! - Extract addresses into a fully materialized result set
//! - Emit the result set through the sink
//!
//! No stage is retried or revisited.

use std::error::Error;
use std::io::Write;
use tracing::{debug, info};

use exitwatch_core::{
    extract_with_progress, ExtractProgress, NoProgress, PipelineSettings, ResultSet,
    RunConfiguration,
};
use exitwatch_tor::{fetch, FetchConfig, FetchError};

use crate::{emit, OutputTarget, PipelineError, Reporter};

/// Pipeline states, in the only order they can be visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Fetching,
    FetchFailed,
    Fetched,
    Extracting,
    Extracted,
    Emitting,
    Done,
}

impl Stage {
    /// Whether `next` directly follows this stage
    pub fn can_advance_to(self, next: Stage) -> bool {
        matches!(
            (self, next),
            (Stage::Start, Stage::Fetching)
                | (Stage::Fetching, Stage::FetchFailed)
                | (Stage::Fetching, Stage::Fetched)
                | (Stage::Fetched, Stage::Extracting)
                | (Stage::Extracting, Stage::Extracted)
                | (Stage::Extracted, Stage::Emitting)
                | (Stage::Emitting, Stage::Done)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::FetchFailed | Stage::Done)
    }
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// HTTP status of the fetch
    pub status: u16,
    /// Number of addresses emitted
    pub address_count: usize,
    /// Where the addresses were written
    pub target: OutputTarget,
}

/// A single run of the exit address pipeline
pub struct Pipeline {
    settings: PipelineSettings,
    config: RunConfiguration,
    stage: Stage,
}

impl Pipeline {
    /// Create a pipeline for one run
    pub fn new(settings: PipelineSettings, config: RunConfiguration) -> Self {
        Self {
            settings,
            config,
            stage: Stage::Start,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn config(&self) -> &RunConfiguration {
        &self.config
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(
            self.stage.can_advance_to(next),
            "invalid transition {:?} -> {:?}",
            self.stage,
            next
        );
        debug!("Pipeline stage {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }

    /// Run fetch, extract and emit
    ///
    /// `progress` is only driven when the run is not silent. Results go to
    /// `out` unless an export path is configured.
    pub async fn run<W: Write>(
        &mut self,
        reporter: &mut dyn Reporter,
        progress: &mut dyn ExtractProgress,
        out: &mut W,
    ) -> Result<RunSummary, PipelineError> {
        if self.config.debug {
            self.echo_settings(reporter);
        }

        self.advance(Stage::Fetching);
        let fetched = match fetch(&FetchConfig::from(&self.settings)).await {
            Ok(fetched) => fetched,
            Err(e) => {
                self.advance(Stage::FetchFailed);
                self.report_fetch_failure(&e, reporter);
                return Err(e.into());
            }
        };
        self.advance(Stage::Fetched);

        if self.config.debug {
            reporter.info(&format!("Status code : {}", fetched.status));
            reporter.info(&format!(
                "All the data retrieved by the API GET call : {}",
                fetched.body
            ));
        }
        if !self.config.silent {
            reporter.success(&format!(
                "API request has succeeded (status code : {}).",
                fetched.status
            ));
        }

        self.advance(Stage::Extracting);
        let results = self.extract(&fetched.body, progress);
        self.advance(Stage::Extracted);
        info!("Extracted {} exit addresses", results.len());

        self.advance(Stage::Emitting);
        let target = emit(&results, &self.config, out, reporter)?;
        self.advance(Stage::Done);

        Ok(RunSummary {
            status: fetched.status,
            address_count: results.len(),
            target,
        })
    }

    fn extract(&self, body: &str, progress: &mut dyn ExtractProgress) -> ResultSet {
        if self.config.silent {
            extract_with_progress(body, &mut NoProgress)
        } else {
            extract_with_progress(body, progress)
        }
    }

    fn echo_settings(&self, reporter: &mut dyn Reporter) {
        reporter.info(&format!("Endpoint : {}", self.settings.endpoint));
        reporter.info(&format!("Timeout : {}s", self.settings.timeout_secs));
        if let Some(proxy) = &self.settings.proxy {
            reporter.info(&format!("Proxy : {}", proxy));
        }
        reporter.info(&format!("Bar template : {}", self.settings.bar_template));
        if self.config.silent {
            reporter.info("The option -s or --silent is On");
        }
        if self.config.export_path.is_some() {
            reporter.info("The option -E or --export is On");
        }
    }

    fn report_fetch_failure(&self, err: &FetchError, reporter: &mut dyn Reporter) {
        if self.config.debug {
            if let Some(status) = err.status() {
                reporter.info(&format!("Status code : {}", status));
            }
        }
        if self.config.silent {
            return;
        }

        reporter.error(&format!(
            "An error occurred while retrieving the data : {}.",
            error_chain(err)
        ));
        if let Some(status) = err.status() {
            reporter.error(&format!(
                "And the status code of the API request is : {}.",
                status
            ));
        }
    }
}

/// Error message followed by each of its sources, separated by `: `
fn error_chain(err: &dyn Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
