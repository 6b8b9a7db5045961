//! Exitwatch Tor Layer
//!
//! Retrieves the exit address listing:
//! - HTTP client construction (optionally through a Tor SOCKS5h proxy)
//! - Single-shot GET with a bounded timeout
//! - Classification of transport and status failures

pub mod client;
pub mod fetch;

pub use client::*;
pub use fetch::*;
