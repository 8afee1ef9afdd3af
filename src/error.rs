//! Error types for spotyears.
//!
//! Each stage of a run has its own error enum so the CLI can decide what is
//! fatal: configuration, authentication and bucket I/O abort the run, while
//! a [`FetchError`] only skips the offending track.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Startup configuration problems. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),

    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },

    #[error("cannot read input listing {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of the client-credentials token exchange. Never retried.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("token endpoint rejected the client credentials (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("token response is missing `{0}`")]
    MissingField(&'static str),

    #[error("token response has an unusable `expires_in`: {0:?}")]
    InvalidExpiry(String),
}

/// Per-track metadata failures. The pipeline logs these and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("track reference does not contain a track id")]
    EmptyTrackId,

    #[error("track lookup failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("track lookup returned HTTP {status}")]
    Status { status: u16 },

    #[error("track lookup response has no `release_date`")]
    MissingReleaseDate,

    #[error("release date {0:?} does not start with a four digit year")]
    InvalidReleaseDate(String),
}

/// Problems reading or writing the persisted credential record.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("credential file i/o: {0}")]
    Io(#[from] io::Error),

    #[error("credential file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// I/O failures on the `songs-<year>.txt` bucket files. Fatal.
#[derive(Debug, Error)]
#[error("cannot access {}: {source}", .path.display())]
pub struct BucketError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl BucketError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}
