//! Configuration management for spotyears.
//!
//! Configuration is read once at startup into a [`Config`] and handed to the
//! components that need it. Values come from, in order of priority:
//! 1. Command-line flags (applied by `main` on top of the loaded config)
//! 2. Environment variables
//! 3. A `.env` file in the local data directory
//! 4. Built-in defaults

use std::{env, path::PathBuf, time::Duration};

use crate::error::ConfigError;

pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const ENV_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
pub const ENV_API_URL: &str = "SPOTIFY_API_URL";
pub const ENV_CREDS_FILE: &str = "SPOTIFY_CREDS_FILE";
pub const ENV_TIMEOUT_SECS: &str = "SPOTIFY_TIMEOUT_SECS";
pub const ENV_OUTPUT_DIR: &str = "SPOTYEARS_OUTPUT_DIR";

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_CREDS_FILE: &str = "spotify.creds";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives at:
/// - Linux: `~/.local/share/spotyears/.env`
/// - macOS: `~/Library/Application Support/spotyears/.env`
/// - Windows: `%LOCALAPPDATA%/spotyears/.env`
///
/// Variables already present in the process environment win. A missing file
/// is not an error; credentials may come straight from the environment.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotyears/.env");
    path
}

/// Everything a run needs to know, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub api_url: String,
    pub creds_path: PathBuf,
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let client_id = get(ENV_CLIENT_ID).ok_or(ConfigError::MissingEnv(ENV_CLIENT_ID))?;
        let client_secret =
            get(ENV_CLIENT_SECRET).ok_or(ConfigError::MissingEnv(ENV_CLIENT_SECRET))?;

        let timeout = match get(ENV_TIMEOUT_SECS) {
            Some(value) => parse_timeout(&value).ok_or(ConfigError::InvalidValue {
                name: ENV_TIMEOUT_SECS,
                value,
            })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            client_id,
            client_secret,
            token_url: get(ENV_TOKEN_URL).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            api_url: get(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            creds_path: get(ENV_CREDS_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDS_FILE)),
            output_dir: get(ENV_OUTPUT_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            timeout,
        })
    }
}

fn parse_timeout(value: &str) -> Option<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
