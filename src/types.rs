use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// An access token together with the absolute Unix time it stops working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    pub expires_at: i64,
}

impl Credential {
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expires_at > now
    }
}

/// One fetched track waiting in its year bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub release_date: String,
    pub track: String,
}

impl TrackRecord {
    pub fn new(release_date: impl Into<String>, track: impl Into<String>) -> Self {
        Self {
            release_date: release_date.into(),
            track: track.into(),
        }
    }

    pub fn year(&self) -> Option<&str> {
        utils::release_year(&self.release_date)
    }

    /// Bucket line as written during the fetch loop: `<release_date>\t<track>\n`.
    pub fn to_line(&self) -> String {
        format!("{}\t{}\n", self.release_date, self.track)
    }

    pub fn from_line(line: &str) -> Option<Self> {
        let (release_date, track) = line.split_once('\t')?;
        let track = track.trim_end_matches(['\r', '\n']);
        if track.is_empty() {
            return None;
        }
        Some(Self::new(release_date, track))
    }
}

#[derive(Tabled)]
pub struct BucketTableRow {
    pub year: String,
    pub file: String,
    pub tracks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_is_only_valid_before_expiry() {
        let credential = Credential {
            access_token: "abc".to_string(),
            expires_at: 1_000,
        };

        assert!(credential.is_valid_at(999));
        assert!(!credential.is_valid_at(1_000));
        assert!(!credential.is_valid_at(1_001));
    }

    #[test]
    fn credential_round_trips_through_json() {
        let credential = Credential {
            access_token: "BQC-token".to_string(),
            expires_at: 1_700_000_000,
        };

        let json = serde_json::to_string(&credential).unwrap();
        let parsed: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, credential);
    }

    #[test]
    fn track_record_line_keeps_full_reference() {
        let record = TrackRecord::new("2015-05-01", "https://open.spotify.com/track/A?si=x");
        let line = record.to_line();
        assert_eq!(line, "2015-05-01\thttps://open.spotify.com/track/A?si=x\n");
        assert_eq!(TrackRecord::from_line(&line), Some(record));
    }

    #[test]
    fn track_record_rejects_lines_without_track() {
        assert_eq!(TrackRecord::from_line("2015-05-01"), None);
        assert_eq!(TrackRecord::from_line("2015-05-01\t"), None);
    }

    #[test]
    fn track_record_year_uses_date_prefix() {
        assert_eq!(TrackRecord::new("2007", "t").year(), Some("2007"));
        assert_eq!(TrackRecord::new("2007-03-01", "t").year(), Some("2007"));
        assert_eq!(TrackRecord::new("", "t").year(), None);
    }
}
