//! Result sink
//!
//! Writes the result set to the export file when one is configured, otherwise
//! renders it to the supplied stdout writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use exitwatch_core::{ResultSet, RunConfiguration};

use crate::{PipelineError, Reporter};

/// Where the results ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Emit results according to the run configuration
pub fn emit<W: Write>(
    results: &ResultSet,
    config: &RunConfiguration,
    out: &mut W,
    reporter: &mut dyn Reporter,
) -> Result<OutputTarget, PipelineError> {
    let target = match config.export_path() {
        Some(path) => {
            write_export(results, path).map_err(|source| PipelineError::Export {
                path: path.to_path_buf(),
                source,
            })?;
            debug!("Exported {} addresses to {}", results.len(), path.display());

            if !config.silent {
                reporter.success(&format!(
                    "Exported the exit-nodes IP to '{}'.",
                    path.display()
                ));
            }
            OutputTarget::File(path.to_path_buf())
        }
        None => {
            out.write_all(render(results, config.silent).as_bytes())?;
            out.flush()?;
            OutputTarget::Stdout
        }
    };

    if config.debug {
        reporter.info(&results.to_string());
    }

    Ok(target)
}

/// Write one address per line, creating or truncating the file
pub fn write_export(results: &ResultSet, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for address in results {
        writeln!(writer, "{}", address)?;
    }
    writer.flush()
}

/// Stdout rendering, padded with blank lines unless silent
pub fn render(results: &ResultSet, silent: bool) -> String {
    if silent {
        format!("{}\n", results)
    } else {
        format!("\n\n{}\n", results)
    }
}
