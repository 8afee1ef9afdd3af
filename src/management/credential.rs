use std::{future::Future, io::ErrorKind, path::PathBuf};

use chrono::Utc;

use crate::{
    error::{AuthError, CacheError},
    types::Credential,
    warning,
};

/// Anything that can mint a fresh [`Credential`].
pub trait TokenSource {
    fn request_token(&self) -> impl Future<Output = Result<Credential, AuthError>>;
}

/// Single-record credential store with an expiry check.
///
/// The record is a small JSON file that is re-read on every run and
/// overwritten whenever a new token is minted. There is no locking: two runs
/// sharing the same file may both refresh and the last writer wins.
pub struct CredentialCache {
    path: PathBuf,
}

impl CredentialCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CredentialCache { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Reads the persisted record. A missing file is `Ok(None)`.
    pub async fn load(&self) -> Result<Option<Credential>, CacheError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::Io(e)),
        };
        let credential: Credential = serde_json::from_str(&content)?;
        Ok(Some(credential))
    }

    pub async fn persist(&self, credential: &Credential) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(credential)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Returns a usable access token, minting and persisting a new one when
    /// the stored record is missing, unreadable or expired.
    pub async fn get_valid_token<S: TokenSource>(&self, source: &S) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        match self.load().await {
            Ok(Some(credential)) if credential.is_valid_at(now) => {
                return Ok(credential.access_token);
            }
            Ok(_) => {}
            Err(e) => warning!(
                "Ignoring unreadable credential file {}: {}",
                self.path.display(),
                e
            ),
        }

        let credential = source.request_token().await?;
        if let Err(e) = self.persist(&credential).await {
            warning!(
                "Failed to save credential to {}: {}",
                self.path.display(),
                e
            );
        }

        Ok(credential.access_token)
    }
}
