//! Status reporting seam
//!
//! The pipeline decides *what* to say and whether the run is silent; the
//! reporter decides how it looks.

/// Kind of status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportLevel {
    /// `[i]` informational and debug echo
    Info,
    /// `[+]` success
    Success,
    /// `[w]` warning
    Warn,
    /// `[-]` error
    Error,
}

impl ReportLevel {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Info => "[i]",
            Self::Success => "[+]",
            Self::Warn => "[w]",
            Self::Error => "[-]",
        }
    }
}

/// Operator-facing status sink
pub trait Reporter {
    fn report(&mut self, level: ReportLevel, msg: &str);

    fn info(&mut self, msg: &str) {
        self.report(ReportLevel::Info, msg);
    }

    fn success(&mut self, msg: &str) {
        self.report(ReportLevel::Success, msg);
    }

    fn warn(&mut self, msg: &str) {
        self.report(ReportLevel::Warn, msg);
    }

    fn error(&mut self, msg: &str) {
        self.report(ReportLevel::Error, msg);
    }
}

/// Collects status lines in memory
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    pub lines: Vec<(ReportLevel, String)>,
}

#[cfg(any(test, feature = "test-util"))]
impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported at the given level, in order
    pub fn messages(&self, level: ReportLevel) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Reporter for MemoryReporter {
    fn report(&mut self, level: ReportLevel, msg: &str) {
        self.lines.push((level, msg.to_string()));
    }
}
