//! Exitwatch CLI
//!
//! Retrieves the current Tor exit relay addresses and prints or exports them.

mod progress;
mod reporter;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use exitwatch_core::{PipelineSettings, RunConfiguration, DEFAULT_TIMEOUT_SECS, EXIT_ADDRESSES_URL};
use exitwatch_runtime::{Pipeline, PipelineError, RunSummary};

use crate::progress::BarProgress;
use crate::reporter::ConsoleReporter;

#[derive(Parser)]
#[command(name = "exitwatch")]
#[command(author, version, about = "Retrieves Tor exit nodes ip address using the Tor exit address list", long_about = None)]
struct Cli {
    /// Export results in your file
    #[arg(short = 'E', long)]
    export: Option<PathBuf>,

    /// Display nothing but the result
    #[arg(short, long)]
    silent: bool,

    /// Get all info
    #[arg(long)]
    debug: bool,

    /// Exit address listing URL
    #[arg(long, env = "EXITWATCH_URL", default_value = EXIT_ADDRESSES_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Proxy to fetch through (e.g. socks5h://127.0.0.1:9050)
    #[arg(long, env = "EXITWATCH_PROXY")]
    proxy: Option<String>,
}

impl Cli {
    fn settings(&self) -> PipelineSettings {
        PipelineSettings::default()
            .with_endpoint(self.url.clone())
            .with_timeout_secs(self.timeout)
            .with_proxy(self.proxy.clone())
    }

    fn run_config(&self) -> RunConfiguration {
        RunConfiguration {
            export_path: self.export.clone(),
            silent: self.silent,
            debug: self.debug,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.debug {
        Level::DEBUG
    } else if cli.silent {
        Level::ERROR
    } else {
        Level::WARN
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let settings = cli.settings();
    let mut progress = BarProgress::new(&settings.bar_template);
    let mut pipeline = Pipeline::new(settings, cli.run_config());
    let mut reporter = ConsoleReporter;
    let mut stdout = io::stdout().lock();

    exit_code(pipeline.run(&mut reporter, &mut progress, &mut stdout).await)
}

/// Map the run outcome to the process exit
fn exit_code(outcome: Result<RunSummary, PipelineError>) -> Result<ExitCode> {
    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Already reported unless silent
        Err(PipelineError::Fetch(_)) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exitwatch_runtime::OutputTarget;
    use exitwatch_tor::FetchError;

    fn code(outcome: Result<RunSummary, PipelineError>) -> String {
        format!("{:?}", exit_code(outcome).unwrap())
    }

    #[test]
    fn test_exit_code_success() {
        let summary = RunSummary {
            status: 200,
            address_count: 2,
            target: OutputTarget::Stdout,
        };
        assert_eq!(code(Ok(summary)), format!("{:?}", ExitCode::SUCCESS));
    }

    #[test]
    fn test_exit_code_fetch_failure() {
        let err = FetchError::HttpStatus {
            status: 503,
            url: EXIT_ADDRESSES_URL.to_string(),
        };
        assert_eq!(code(Err(err.into())), format!("{:?}", ExitCode::FAILURE));
    }

    #[test]
    fn test_export_error_propagates() {
        let err = PipelineError::Export {
            path: PathBuf::from("/nonexistent/out.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        let err = exit_code(Err(err)).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Failed to export results to /nonexistent/out.txt: No such file or directory"
        );
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["exitwatch", "-E", "/tmp/out.txt", "-s", "--debug"]).unwrap();
        let config = cli.run_config();

        assert_eq!(config.export_path, Some(PathBuf::from("/tmp/out.txt")));
        assert!(config.silent);
        assert!(config.debug);
    }

    #[test]
    fn test_defaults_match_reference() {
        let cli = Cli::try_parse_from(["exitwatch"]).unwrap();
        let settings = cli.settings();

        assert_eq!(settings, PipelineSettings::default().with_endpoint(cli.url.clone()));
        assert_eq!(settings.timeout_secs, 300);
        assert_eq!(cli.run_config(), RunConfiguration::default());
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "exitwatch",
            "--export",
            "exits.txt",
            "--silent",
            "--timeout",
            "30",
            "--proxy",
            "socks5h://127.0.0.1:9050",
        ])
        .unwrap();
        let settings = cli.settings();

        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.proxy.as_deref(), Some("socks5h://127.0.0.1:9050"));
        assert!(cli.run_config().silent);
    }
}
