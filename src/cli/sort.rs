use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res,
    config::Config,
    error::ConfigError,
    info,
    management::{BucketStore, CredentialCache},
    pipeline::{self, GroupReport},
    spotify::{self, auth::ClientCredentials, tracks::TrackLookup},
    success,
    types::BucketTableRow,
    utils, warning,
};

/// Sorts the tracks listed in `input` into `songs-<year>.txt` files.
///
/// The token is obtained before any bucket file is touched, so a failed
/// authentication leaves the previous run's output in place.
pub async fn sort(config: &Config, input: &Path) -> Res<()> {
    let content = async_fs::read_to_string(input)
        .await
        .map_err(|source| ConfigError::Input {
            path: input.to_path_buf(),
            source,
        })?;
    let tracks = utils::parse_listing(&content);
    if tracks.is_empty() {
        warning!("No track references found in {}", input.display());
    }

    let client = spotify::http_client(config.timeout)?;
    let cache = CredentialCache::new(&config.creds_path);
    let token = cache
        .get_valid_token(&ClientCredentials::new(client.clone(), config))
        .await?;

    info!(
        "Fetching release dates for {} tracks from {}",
        tracks.len(),
        input.display()
    );

    let lookup = TrackLookup::new(client, config);
    let mut store = BucketStore::new(&config.output_dir);
    let pb = progress_bar();
    let report = pipeline::group_by_year(&tracks, &token, &lookup, &mut store, &pb).await;
    pb.finish_and_clear();
    let report = report?;

    print_summary(&store, &report);
    Ok(())
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_summary(store: &BucketStore, report: &GroupReport) {
    if !report.buckets.is_empty() {
        let rows: Vec<BucketTableRow> = report
            .buckets
            .iter()
            .map(|(year, count)| BucketTableRow {
                year: year.clone(),
                file: store.path_for(year).display().to_string(),
                tracks: *count,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    success!(
        "Sorted {} tracks into {} year files.",
        report.total_tracks(),
        report.buckets.len()
    );

    if !report.skipped.is_empty() {
        warning!(
            "Skipped {} tracks without a usable release date.",
            report.skipped.len()
        );
    }
}
