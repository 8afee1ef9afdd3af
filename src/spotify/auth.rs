use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config::Config, error::AuthError, management::TokenSource, types::Credential, utils,
};

/// Client-credentials grant against the Spotify accounts service.
///
/// The application authenticates with its own client id and secret; no user
/// is involved, so the resulting token can only read public catalog data
/// such as track metadata.
pub struct ClientCredentials {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }

    /// `Basic base64(client_id:client_secret)`
    pub fn authorization_header(&self) -> String {
        basic_auth_header(&self.client_id, &self.client_secret)
    }

    /// Exchanges the client credentials for a fresh access token.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Request`] on network failure or timeout
    /// - [`AuthError::Rejected`] on any non-2xx status
    /// - [`AuthError::MissingField`] / [`AuthError::InvalidExpiry`] when the
    ///   body lacks a usable `access_token` or `expires_in`
    pub async fn exchange(&self) -> Result<Credential, AuthError> {
        let response = self
            .client
            .post(&self.token_url)
            .header(AUTHORIZATION, self.authorization_header())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        credential_from_response(&body, Utc::now().timestamp())
    }
}

impl TokenSource for ClientCredentials {
    async fn request_token(&self) -> Result<Credential, AuthError> {
        self.exchange().await
    }
}

pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

/// Turns a token endpoint body into a [`Credential`] expiring `expires_in`
/// seconds after `now`.
pub fn credential_from_response(body: &str, now: i64) -> Result<Credential, AuthError> {
    let access_token = utils::extract_field(body, "access_token")
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingField("access_token"))?;
    let expires_in = utils::extract_field(body, "expires_in")
        .ok_or(AuthError::MissingField("expires_in"))?;
    let expires_at = expires_in
        .parse::<i64>()
        .ok()
        .filter(|secs| *secs >= 0)
        .and_then(|secs| now.checked_add(secs))
        .ok_or_else(|| AuthError::InvalidExpiry(expires_in.clone()))?;

    Ok(Credential {
        access_token,
        expires_at,
    })
}
