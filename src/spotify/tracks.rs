use reqwest::Client;

use crate::{config::Config, error::FetchError, pipeline::ReleaseDateSource, utils};

/// Looks up single tracks through `GET /tracks/{id}`.
pub struct TrackLookup {
    client: Client,
    api_url: String,
}

impl TrackLookup {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn track_url(&self, track_id: &str) -> String {
        format!("{url}/tracks/{id}", url = self.api_url, id = track_id)
    }

    /// Fetches the release date of the album a track belongs to, as
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD` depending on Spotify's precision.
    pub async fn fetch_release_date(
        &self,
        track_id: &str,
        access_token: &str,
    ) -> Result<String, FetchError> {
        let response = self
            .client
            .get(self.track_url(track_id))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        release_date_from_response(&body)
    }
}

impl ReleaseDateSource for TrackLookup {
    async fn release_date(
        &self,
        track_id: &str,
        access_token: &str,
    ) -> Result<String, FetchError> {
        self.fetch_release_date(track_id, access_token).await
    }
}

pub fn release_date_from_response(body: &str) -> Result<String, FetchError> {
    utils::extract_field(body, "release_date")
        .filter(|date| !date.is_empty())
        .ok_or(FetchError::MissingReleaseDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_date_from_track_response() {
        let body = r#"{
            "album": {
                "album_type": "album",
                "name": "Currents",
                "release_date": "2015-07-17",
                "release_date_precision": "day"
            },
            "id": "6K4t31amVTZDgR3sKmwUJJ",
            "name": "The Less I Know The Better",
            "popularity": 80
        }"#;

        assert_eq!(release_date_from_response(body).unwrap(), "2015-07-17");
    }

    #[test]
    fn test_release_date_missing() {
        let body = r#"{"error":{"status":404,"message":"Non existing id"}}"#;
        assert!(matches!(
            release_date_from_response(body),
            Err(FetchError::MissingReleaseDate)
        ));
    }

    #[test]
    fn test_release_date_empty() {
        let body = r#"{"album":{"release_date":""}}"#;
        assert!(matches!(
            release_date_from_response(body),
            Err(FetchError::MissingReleaseDate)
        ));
    }
}
