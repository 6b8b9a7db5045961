//! Colored glyph reporter for the terminal

use console::style;

use exitwatch_runtime::{ReportLevel, Reporter};

/// Prints `[i]`, `[+]`, `[w]` and `[-]` lines to stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, level: ReportLevel, msg: &str) {
        let line = format!("{} {}", level.glyph(), msg);
        let styled = match level {
            ReportLevel::Info => style(line).blue(),
            ReportLevel::Success => style(line).green(),
            ReportLevel::Warn => style(line).yellow(),
            ReportLevel::Error => style(line).red(),
        };
        println!("{}", styled);
    }
}
