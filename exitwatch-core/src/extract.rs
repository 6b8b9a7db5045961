//! Exit address extraction
//!
//! Scans the listing for `ExitAddress <rest of line>` and keeps the first
//! whitespace-delimited token of each capture. Trailing tokens such as the
//! publication timestamp are dropped.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::{ExitNodeAddress, ResultSet, EXIT_ADDRESS_MARKER};

static EXIT_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{} (.+)", EXIT_ADDRESS_MARKER)).unwrap());

/// Observer notified while addresses are collected
///
/// Implementations are cosmetic: they cannot influence the extracted values.
pub trait ExtractProgress {
    /// Called once with the number of marker matches before any address is taken
    fn start(&mut self, total: u64);

    /// Called after each match has been handled
    fn advance(&mut self);

    /// Called once when extraction is complete
    fn finish(&mut self);
}

/// Progress observer that reports nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ExtractProgress for NoProgress {
    fn start(&mut self, _total: u64) {}
    fn advance(&mut self) {}
    fn finish(&mut self) {}
}

/// Extract exit addresses from a listing body
pub fn extract(body: &str) -> ResultSet {
    extract_with_progress(body, &mut NoProgress)
}

/// Extract exit addresses, reporting progress over the total match count
pub fn extract_with_progress(body: &str, progress: &mut dyn ExtractProgress) -> ResultSet {
    let captures: Vec<&str> = EXIT_ADDRESS_REGEX
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    progress.start(captures.len() as u64);

    let mut results = ResultSet::with_capacity(captures.len());
    for rest in captures {
        match first_token(rest) {
            Some(token) => results.push(ExitNodeAddress::new(token)),
            None => debug!("Skipping ExitAddress line without an address: {:?}", rest),
        }
        progress.advance();
    }

    progress.finish();
    results
}

/// First whitespace-delimited token of a capture, if any
fn first_token(rest: &str) -> Option<&str> {
    rest.split_whitespace().next()
}
