//! Exitwatch Core - Domain model and extraction for Tor exit relay listings
//!
//! This crate provides the pure half of the pipeline:
//! - Exit node addresses and the ordered result set
//! - Run configuration and pipeline settings
//! - Marker-based extraction from the exit address listing

pub mod address;
pub mod config;
pub mod extract;

pub use address::*;
pub use config::*;
pub use extract::*;

/// Public listing of exit relays published by the Tor Project
pub const EXIT_ADDRESSES_URL: &str = "https://check.torproject.org/exit-addresses";

/// Default fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Keyword that prefixes every address line in the listing
pub const EXIT_ADDRESS_MARKER: &str = "ExitAddress";

/// Progress bar template used while extracting
pub const BAR_TEMPLATE: &str =
    "\x1b[34m[i] Retrieved exit-nodes IP from Tor API\x1b[0m {bar:40.magenta} {percent:>3}% |{pos}/{len} [{elapsed}<{eta}, {per_sec}]";
