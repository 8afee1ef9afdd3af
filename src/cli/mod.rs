//! # CLI Module
//!
//! User-facing command implementations. The CLI layer sits on top of the
//! rest of the crate:
//!
//! ```text
//! CLI Layer (argument handling, progress, summary table)
//!     ↓
//! Pipeline + Management Layer (buckets, credential cache)
//!     ↓
//! Spotify Layer (token exchange, track lookup)
//! ```
//!
//! ## Commands
//!
//! - [`sort`] reads a track listing, authenticates, fetches release dates and
//!   writes one `songs-<year>.txt` file per release year.
//!
//! ## Usage
//!
//! ```bash
//! spotyears liked-songs.txt
//! spotyears --output-dir by-year --timeout 10 liked-songs.txt
//! ```

mod sort;

pub use sort::sort;
