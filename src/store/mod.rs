//! Object store trait definition

use async_trait::async_trait;
use thiserror::Error;

use crate::core::locator::RemoteLocator;

pub mod aws_cli;

pub use aws_cli::AwsCliStore;

/// Errors that can occur during store operations.
///
/// Absence of an object is not an error: `fetch` reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Transfer failed for {locator}: {message}")]
    Transport { locator: String, message: String },
}

/// Interface to the remote blob store
///
/// Injectable so command orchestration can be exercised against an
/// in-memory store in tests.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Retrieve an object's content.
    ///
    /// Returns `Ok(None)` when the object does not exist. Any other failure
    /// (permissions, connectivity, malformed locator) is a `StoreError`.
    async fn fetch(
        &self,
        locator: &RemoteLocator,
        region: &str,
    ) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write an object's content with server-side KMS encryption.
    async fn store(
        &self,
        locator: &RemoteLocator,
        region: &str,
        kms_key_id: &str,
        data: &[u8],
    ) -> Result<(), StoreError>;
}
