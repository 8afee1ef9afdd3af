use std::path::Path;

use spotyears::types::TrackRecord;
use spotyears::utils::*;

// Helper function to create a test record
fn record(date: &str, track: &str) -> TrackRecord {
    TrackRecord::new(date, track)
}

#[test]
fn test_extract_field_string_value() {
    let json = r#"{"access_token":"BQC123","token_type":"Bearer"}"#;
    assert_eq!(extract_field(json, "access_token"), Some("BQC123".to_string()));
    assert_eq!(extract_field(json, "token_type"), Some("Bearer".to_string()));
}

#[test]
fn test_extract_field_numeric_value() {
    let json = r#"{"access_token":"BQC123","expires_in":3600}"#;
    assert_eq!(extract_field(json, "expires_in"), Some("3600".to_string()));
}

#[test]
fn test_extract_field_tolerates_whitespace() {
    let json = "{ \"expires_in\" :\n 3600 , \"access_token\"  :  \"abc\" }";
    assert_eq!(extract_field(json, "expires_in"), Some("3600".to_string()));
    assert_eq!(extract_field(json, "access_token"), Some("abc".to_string()));
}

#[test]
fn test_extract_field_absent_key() {
    let json = r#"{"access_token":"BQC123"}"#;
    assert_eq!(extract_field(json, "expires_in"), None);
    // a key that only appears as a value does not count
    assert_eq!(extract_field(r#"{"name":"expires_in"}"#, "expires_in"), None);
}

#[test]
fn test_extract_field_not_json() {
    assert_eq!(extract_field("<html>502 Bad Gateway</html>", "release_date"), None);
    assert_eq!(extract_field("", "release_date"), None);
}

#[test]
fn test_extract_field_first_occurrence_wins() {
    // album comes first in the document, so its release date is the one found
    let json = r#"{
        "album": {"name": "Currents", "release_date": "2015-07-17"},
        "artists": [{"name": "Tame Impala"}],
        "release_date": "1999-01-01"
    }"#;
    assert_eq!(extract_field(json, "release_date"), Some("2015-07-17".to_string()));
}

#[test]
fn test_extract_field_skips_non_scalar_match() {
    let json = r#"{"album":{"album":"Currents"}}"#;
    assert_eq!(extract_field(json, "album"), Some("Currents".to_string()));
}

#[test]
fn test_track_id_from_url_and_bare_id() {
    assert_eq!(track_id("https://open.spotify.com/track/XYZ"), "XYZ");
    assert_eq!(track_id("XYZ"), "XYZ");
    assert_eq!(
        track_id("https://open.spotify.com/track/XYZ"),
        track_id("XYZ")
    );
}

#[test]
fn test_track_id_variants() {
    assert_eq!(
        track_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=a1b2c3"),
        "4uLU6hMCjMI75M1A2tKUQC"
    );
    assert_eq!(
        track_id("https://open.spotify.com/intl-de/track/4uLU6hMCjMI75M1A2tKUQC"),
        "4uLU6hMCjMI75M1A2tKUQC"
    );
    assert_eq!(track_id("spotify:track:4uLU6hMCjMI75M1A2tKUQC"), "4uLU6hMCjMI75M1A2tKUQC");
    assert_eq!(track_id("track/A"), "A");
    assert_eq!(track_id("  XYZ \r"), "XYZ");
    assert_eq!(track_id("https://open.spotify.com/track/"), "");
}

#[test]
fn test_release_year() {
    assert_eq!(release_year("2015-05-01"), Some("2015"));
    assert_eq!(release_year("2007"), Some("2007"));
    assert_eq!(release_year("1987-03"), Some("1987"));
    assert_eq!(release_year(""), None);
    assert_eq!(release_year("201"), None);
    assert_eq!(release_year("0000-00-00"), Some("0000"));
    assert_eq!(release_year("n/a"), None);
    assert_eq!(release_year("20x5-01-01"), None);
}

#[test]
fn test_bucket_file_names() {
    assert_eq!(bucket_file_name("2015"), "songs-2015.txt");
    assert!(is_bucket_file(Path::new("songs-2015.txt")));
    assert!(is_bucket_file(Path::new("out/songs-1999.txt")));
    assert!(is_bucket_file(Path::new("songs-.txt")));
    assert!(!is_bucket_file(Path::new("songs.txt")));
    assert!(!is_bucket_file(Path::new("songs-2015.txt.bak")));
    assert!(!is_bucket_file(Path::new("tracks.txt")));
    assert!(!is_bucket_file(Path::new("spotify.creds")));
    assert!(!is_bucket_file(Path::new("songs-favorites.txt")));
    assert!(!is_bucket_file(Path::new("songs-19999.txt")));
    assert!(!is_bucket_file(Path::new("songs-199.txt")));
}

#[test]
fn test_parse_listing() {
    let content = "https://open.spotify.com/track/A\n\n  track/B  \r\nC\n";
    assert_eq!(
        parse_listing(content),
        vec!["https://open.spotify.com/track/A", "track/B", "C"]
    );
    assert!(parse_listing("\n \n").is_empty());
}

#[test]
fn test_sort_records_by_date() {
    let mut records = vec![
        record("2015-05-01", "track/A"),
        record("2015-01-01", "track/C"),
        record("2015", "track/D"),
    ];

    sort_records_by_date(&mut records);

    let tracks: Vec<&str> = records.iter().map(|r| r.track.as_str()).collect();
    // "2015" sorts before any full date of the same year
    assert_eq!(tracks, vec!["track/D", "track/C", "track/A"]);
}

#[test]
fn test_sort_records_by_date_is_stable() {
    let mut records = vec![
        record("2001-09-11", "first"),
        record("2001-01-01", "early"),
        record("2001-09-11", "second"),
        record("2001-09-11", "third"),
    ];

    sort_records_by_date(&mut records);

    let tracks: Vec<&str> = records.iter().map(|r| r.track.as_str()).collect();
    assert_eq!(tracks, vec!["early", "first", "second", "third"]);
}
