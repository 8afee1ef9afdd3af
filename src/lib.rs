//! spotyears library
//!
//! Sorts a listing of Spotify track references into one file per release
//! year. Tokens come from the client-credentials grant and are cached in a
//! local credential file between runs.
//!
//! # Modules
//!
//! - `cli` - Command-line entry points
//! - `config` - Configuration from environment variables and `.env` files
//! - `error` - Error types for each stage of a run
//! - `management` - Credential cache and year bucket files
//! - `pipeline` - The fetch-group-sort pipeline
//! - `spotify` - Spotify Web API client
//! - `types` - Data structures
//! - `utils` - JSON field lookup, track id and bucket name helpers
//!
//! # Limitations
//!
//! Runs are strictly sequential. Two runs sharing a working directory race
//! on bucket truncation and on the credential file, so don't do that.

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod pipeline;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error so the CLI can propagate any stage's error
/// with `?` and report it once at the top.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Fetching {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing, so it is
/// only used for fatal errors at the top of the binary.
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems such as a skipped track or an unreadable
/// credential file.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
