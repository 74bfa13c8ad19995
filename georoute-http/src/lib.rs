//! Shared HTTP client for georoute provider adapters.
//!
//! [`HttpClient`] implements [`georoute_core::HttpTransport`] on top of
//! `reqwest`. It owns everything adapters should not care about: the base
//! URL, user agent, custom headers, timeout, and the retry policy for
//! query-limit responses.
#![forbid(unsafe_code)]

mod client;
mod config;
mod retry;

pub use client::{ClientBuildError, HttpClient};
pub use config::{ClientConfig, DEFAULT_CLIENT_USER_AGENT, DEFAULT_MAX_RETRIES};
