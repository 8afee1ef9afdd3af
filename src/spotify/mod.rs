//! # Spotify Integration Module
//!
//! The thin HTTP layer between spotyears and the Spotify Web API. It covers
//! exactly two endpoints:
//!
//! ```text
//! Grouping pipeline / credential cache
//!          ↓
//! Spotify Integration Layer
//!     ├── auth    POST {token_url}          client-credentials grant
//!     └── tracks  GET  {api_url}/tracks/id  release date lookup
//!          ↓
//! HTTP Layer (reqwest)
//! ```
//!
//! Both endpoints share one [`reqwest::Client`] built by [`http_client`] with
//! the configured request timeout. Requests are sent one at a time and are
//! never retried; callers decide whether a failure is fatal.
//!
//! Response bodies are read as text and the few fields needed are pulled
//! out with [`crate::utils::extract_field`] instead of deserializing the
//! full Spotify object model.

pub mod auth;
pub mod tracks;

use std::time::Duration;

use reqwest::Client;

/// Builds the shared HTTP client with a bounded per-request timeout.
pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}
