//! Object store backed by the `aws` CLI.
//!
//! Objects are streamed through `aws s3 cp` with `-` as the local side, so
//! no temporary files are involved. Pushes request `aws:kms` server-side
//! encryption with the environment's key id.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::core::locator::RemoteLocator;
use crate::util::log_cmd;

use super::{ObjectStore, StoreError};

/// Store implementation shelling out to the AWS CLI
#[derive(Debug, Default)]
pub struct AwsCliStore;

impl AwsCliStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ObjectStore for AwsCliStore {
    async fn fetch(
        &self,
        locator: &RemoteLocator,
        region: &str,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        let mut cmd = Command::new("aws");
        cmd.arg("s3")
            .arg("cp")
            .arg(locator.to_url())
            .arg("-")
            .arg("--region")
            .arg(region)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        log_cmd(&cmd);

        let output = cmd.output().await.map_err(|source| StoreError::Spawn {
            program: "aws".to_string(),
            source,
        })?;

        if output.status.success() {
            return Ok(Some(output.stdout));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if is_not_found_text(&stderr) {
            return Ok(None);
        }

        Err(StoreError::Transport {
            locator: locator.to_url(),
            message: stderr.trim().to_string(),
        })
    }

    async fn store(
        &self,
        locator: &RemoteLocator,
        region: &str,
        kms_key_id: &str,
        data: &[u8],
    ) -> Result<(), StoreError> {
        let mut cmd = Command::new("aws");
        cmd.arg("s3")
            .arg("cp")
            .arg("-")
            .arg(locator.to_url())
            .arg("--region")
            .arg(region)
            .arg("--sse")
            .arg("aws:kms")
            .arg("--sse-kms-key-id")
            .arg(kms_key_id)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        log_cmd(&cmd);

        let mut child = cmd.spawn().map_err(|source| StoreError::Spawn {
            program: "aws".to_string(),
            source,
        })?;

        let mut stdin = child.stdin.take().ok_or_else(|| StoreError::Transport {
            locator: locator.to_url(),
            message: "could not open stdin to aws CLI".to_string(),
        })?;
        stdin
            .write_all(data)
            .await
            .map_err(|err| StoreError::Transport {
                locator: locator.to_url(),
                message: format!("failed writing object body: {err}"),
            })?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| StoreError::Spawn {
                program: "aws".to_string(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(StoreError::Transport {
            locator: locator.to_url(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Classify CLI stderr as the missing-object condition.
///
/// The AWS CLI reports a missing key as a 404/NoSuchKey for `get-object`
/// and "Not Found" for head/cp. Everything else (403, connection errors,
/// invalid bucket) stays a transport failure.
fn is_not_found_text(stderr: &str) -> bool {
    stderr.contains("NoSuchKey")
        || stderr.contains("Not Found")
        || stderr.contains("(404)")
        || stderr.contains("status code: 404")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(is_not_found_text(
            "fatal error: An error occurred (404) when calling the HeadObject operation: Not Found"
        ));
        assert!(is_not_found_text(
            "An error occurred (NoSuchKey) when calling the GetObject operation"
        ));
    }

    #[test]
    fn test_other_failures_are_not_not_found() {
        assert!(!is_not_found_text(
            "fatal error: An error occurred (403) when calling the HeadObject operation: Forbidden"
        ));
        assert!(!is_not_found_text(
            "Could not connect to the endpoint URL: \"https://s3.eu-west-1.amazonaws.com/\""
        ));
        assert!(!is_not_found_text(""));
    }
}
