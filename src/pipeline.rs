//! Fetch-group-sort pipeline.
//!
//! A run moves through three linear phases:
//!
//! 1. **Init**: every `songs-<YYYY>.txt` file (and the legacy `songs-.txt`)
//!    in the output directory is removed.
//! 2. **Fetch loop**: for each track reference, in input order, the bare id
//!    is derived, its release date fetched, and `date\ttrack` appended to
//!    the bucket of the date's year. A track whose lookup fails is skipped
//!    and recorded in [`GroupReport::skipped`]; it never lands in a bucket.
//! 3. **Finalize**: each bucket is stable-sorted by release date and
//!    rewritten with the track references only.
//!
//! Nothing runs concurrently. An interrupted run can leave buckets that
//! still carry the date column; the next run truncates them anyway.

use std::{collections::BTreeMap, future::Future};

use indicatif::ProgressBar;

use crate::{
    error::{BucketError, FetchError},
    management::BucketStore,
    types::TrackRecord,
    utils, warning,
};

/// Source of per-track release dates.
pub trait ReleaseDateSource {
    fn release_date(
        &self,
        track_id: &str,
        access_token: &str,
    ) -> impl Future<Output = Result<String, FetchError>>;
}

#[derive(Debug)]
pub struct SkippedTrack {
    pub track: String,
    pub error: FetchError,
}

#[derive(Debug, Default)]
pub struct GroupReport {
    /// Track count per year, keyed by the four digit year.
    pub buckets: BTreeMap<String, usize>,
    pub skipped: Vec<SkippedTrack>,
}

impl GroupReport {
    pub fn total_tracks(&self) -> usize {
        self.buckets.values().sum()
    }
}

/// Runs the full pipeline over `tracks` and returns what was written.
///
/// Only bucket I/O aborts the run; lookup failures are reported per track.
pub async fn group_by_year<S: ReleaseDateSource>(
    tracks: &[String],
    access_token: &str,
    source: &S,
    store: &mut BucketStore,
    progress: &ProgressBar,
) -> Result<GroupReport, BucketError> {
    store.clear().await?;

    let mut report = GroupReport::default();
    progress.set_length(tracks.len() as u64);

    for track in tracks {
        progress.set_message(track.clone());

        match fetch_record(track, access_token, source).await {
            Ok((year, record)) => store.append(&year, &record).await?,
            Err(error) => {
                progress.suspend(|| warning!("Skipping {}: {}", track, error));
                report.skipped.push(SkippedTrack {
                    track: track.clone(),
                    error,
                });
            }
        }

        progress.inc(1);
    }

    report.buckets = store.finalize().await?;
    Ok(report)
}

async fn fetch_record<S: ReleaseDateSource>(
    track: &str,
    access_token: &str,
    source: &S,
) -> Result<(String, TrackRecord), FetchError> {
    let id = utils::track_id(track);
    if id.is_empty() {
        return Err(FetchError::EmptyTrackId);
    }

    let release_date = source.release_date(id, access_token).await?;
    let year = utils::release_year(&release_date)
        .ok_or_else(|| FetchError::InvalidReleaseDate(release_date.clone()))?
        .to_string();

    Ok((year, TrackRecord::new(release_date, track)))
}
