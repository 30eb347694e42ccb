//! Remote locator parsing
//!
//! Splits an `s3://bucket/key-path` URL into its bucket and key components.

use thiserror::Error;
use url::Url;

/// Errors that can occur when parsing a remote URL
#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Failed to parse URL: {0}")]
    ParseError(#[from] url::ParseError),

    #[error("Unsupported scheme '{0}' (expected s3)")]
    UnsupportedScheme(String),

    #[error("URL has no bucket")]
    MissingBucket,

    #[error("URL has no object key")]
    MissingKey,
}

/// The (bucket, key) pair an environment's remote URL points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocator {
    pub bucket: String,
    pub key: String,
}

impl RemoteLocator {
    /// Parse an `s3://bucket/key` URL.
    pub fn parse(raw: &str) -> Result<Self, LocatorError> {
        let url = Url::parse(raw)?;

        if url.scheme() != "s3" {
            return Err(LocatorError::UnsupportedScheme(url.scheme().to_string()));
        }

        let bucket = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or(LocatorError::MissingBucket)?
            .to_string();

        let key = url.path().trim_start_matches('/').to_string();
        if key.is_empty() {
            return Err(LocatorError::MissingKey);
        }

        Ok(Self { bucket, key })
    }

    /// Render back as an `s3://` URL for display.
    pub fn to_url(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

impl std::fmt::Display for RemoteLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_url())
    }
}
