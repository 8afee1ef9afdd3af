use std::path::Path;

use serde_json::Value;

use crate::types::TrackRecord;

pub const BUCKET_PREFIX: &str = "songs-";
pub const BUCKET_SUFFIX: &str = ".txt";

/// Looks up the first string or numeric value stored under `key`.
///
/// The Spotify payloads this tool reads have a fixed, mostly flat shape, so
/// the lookup walks the decoded document depth-first in document order and
/// returns the first scalar match. Strings come back unquoted, numbers as
/// their literal text. Text that is not JSON yields `None`.
pub fn extract_field(json_text: &str, key: &str) -> Option<String> {
    let value: Value = serde_json::from_str(json_text).ok()?;
    find_field(&value, key)
}

fn find_field(value: &Value, key: &str) -> Option<String> {
    match value {
        Value::Object(map) => map.iter().find_map(|(k, v)| {
            if k == key {
                match v {
                    Value::String(s) => return Some(s.clone()),
                    Value::Number(n) => return Some(n.to_string()),
                    _ => {}
                }
            }
            find_field(v, key)
        }),
        Value::Array(items) => items.iter().find_map(|v| find_field(v, key)),
        _ => None,
    }
}

/// Reduces a track reference to the bare Spotify id.
///
/// Accepts `https://open.spotify.com/track/<id>` (optionally with a query
/// string or locale segment before `track`), a relative `track/<id>`,
/// `spotify:track:<id>` and the bare id itself.
pub fn track_id(reference: &str) -> &str {
    let reference = reference.trim();
    let id = if let Some((_, rest)) = reference.rsplit_once("/track/") {
        rest
    } else if let Some(rest) = reference.strip_prefix("track/") {
        rest
    } else if let Some(rest) = reference.strip_prefix("spotify:track:") {
        rest
    } else {
        reference
    };

    id.split(['?', '#', '/']).next().unwrap_or(id)
}

/// Four digit year prefix of a `YYYY` or `YYYY-MM-DD` release date.
pub fn release_year(release_date: &str) -> Option<&str> {
    release_date
        .get(..4)
        .filter(|year| year.bytes().all(|b| b.is_ascii_digit()))
}

pub fn bucket_file_name(year: &str) -> String {
    format!("{BUCKET_PREFIX}{year}{BUCKET_SUFFIX}")
}

/// Matches `songs-<YYYY>.txt` and the empty-year `songs-.txt`. Other
/// `songs-*.txt` files are left alone.
pub fn is_bucket_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_prefix(BUCKET_PREFIX))
        .and_then(|rest| rest.strip_suffix(BUCKET_SUFFIX))
        .is_some_and(|year| {
            year.is_empty() || (year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
        })
}

/// Splits an input listing into track references, skipping blank lines.
pub fn parse_listing(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Orders records by release date. `sort_by` is stable, so equal dates keep
/// their fetch order.
pub fn sort_records_by_date(records: &mut [TrackRecord]) {
    records.sort_by(|a, b| a.release_date.cmp(&b.release_date));
}
