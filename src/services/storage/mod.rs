//! Object storage collaborator.
//!
//! The one real I/O boundary in the application: the memories template
//! stores photos through an opaque "put blob, get URL" capability. The
//! trait keeps the rest of the app independent of the concrete store.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub mod uploader;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("network error during blob upload: {0}")]
    Network(#[from] reqwest::Error),
    #[error("blob upload rejected with HTTP status {0}")]
    UnexpectedStatus(StatusCode),
}

/// Opaque object-storage capability: store bytes under a key, get back a
/// publicly fetchable URL.
#[cfg_attr(test, mockall::automock)]
pub trait BlobStore: Send + Sync {
    fn put_blob(&self, key: &str, bytes: &[u8]) -> Result<String, StorageError>;
}

/// HTTP-backed blob store: PUTs the bytes to `{base_url}/{key}`.
pub struct HttpBlobStore {
    base_url: String,
    client: Client,
}

impl HttpBlobStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build blob store HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}

/// Stores may echo a canonical URL in a JSON body; when present it wins
/// over the constructed object URL.
#[derive(Debug, Deserialize)]
struct PutBlobResponse {
    url: Option<String>,
}

impl BlobStore for HttpBlobStore {
    fn put_blob(&self, key: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let url = self.object_url(key);
        let response = self.client.put(&url).body(bytes.to_vec()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::UnexpectedStatus(status));
        }

        let body = response.bytes()?;
        match serde_json::from_slice::<PutBlobResponse>(&body) {
            Ok(PutBlobResponse { url: Some(canonical) }) => Ok(canonical),
            _ => Ok(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_urls_join_without_doubled_slashes() {
        let store = HttpBlobStore::new("https://storage.example.com/planner/").unwrap();
        assert_eq!(
            store.object_url("memories/2024/slot-0.png"),
            "https://storage.example.com/planner/memories/2024/slot-0.png"
        );
    }

    #[test]
    fn canonical_url_is_read_from_the_response_body() {
        let parsed: PutBlobResponse =
            serde_json::from_slice(br#"{"url": "https://cdn.example.com/abc.png"}"#).unwrap();
        assert_eq!(parsed.url.as_deref(), Some("https://cdn.example.com/abc.png"));
    }

    #[test]
    fn body_without_a_url_field_still_parses() {
        let parsed: PutBlobResponse = serde_json::from_slice(br#"{"etag": "xyz"}"#).unwrap();
        assert_eq!(parsed.url, None);
    }

    #[test]
    fn non_json_body_is_rejected_by_the_parser() {
        assert!(serde_json::from_slice::<PutBlobResponse>(b"created").is_err());
    }
}
