//! Shared test doubles for command orchestration tests.
//!
//! `MemoryStore` stands in for S3 and records every write together with the
//! KMS key that was requested; `ScriptedConfirm` answers prompts without a
//! terminal.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use s3env::cli::prompt::ConfirmPrompt;
use s3env::core::locator::RemoteLocator;
use s3env::store::{ObjectStore, StoreError};

/// One recorded object in the in-memory store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub kms_key_id: String,
}

/// In-memory object store keyed by `bucket/key`
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an object, bypassing the trait.
    pub fn insert(&self, locator: &RemoteLocator, data: &[u8]) {
        self.objects.lock().unwrap().insert(
            object_key(locator),
            StoredObject {
                data: data.to_vec(),
                kms_key_id: String::new(),
            },
        );
    }

    pub fn get(&self, locator: &RemoteLocator) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(&object_key(locator)).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

fn object_key(locator: &RemoteLocator) -> String {
    format!("{}/{}", locator.bucket, locator.key)
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn fetch(
        &self,
        locator: &RemoteLocator,
        _region: &str,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.get(locator).map(|obj| obj.data))
    }

    async fn store(
        &self,
        locator: &RemoteLocator,
        _region: &str,
        kms_key_id: &str,
        data: &[u8],
    ) -> Result<(), StoreError> {
        self.objects.lock().unwrap().insert(
            object_key(locator),
            StoredObject {
                data: data.to_vec(),
                kms_key_id: kms_key_id.to_string(),
            },
        );
        Ok(())
    }
}

/// Store whose every call fails like a permission/connectivity problem
#[derive(Debug, Default)]
pub struct BrokenStore;

#[async_trait]
impl ObjectStore for BrokenStore {
    async fn fetch(
        &self,
        locator: &RemoteLocator,
        _region: &str,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        Err(StoreError::Transport {
            locator: locator.to_url(),
            message: "An error occurred (403): Forbidden".to_string(),
        })
    }

    async fn store(
        &self,
        locator: &RemoteLocator,
        _region: &str,
        _kms_key_id: &str,
        _data: &[u8],
    ) -> Result<(), StoreError> {
        Err(StoreError::Transport {
            locator: locator.to_url(),
            message: "An error occurred (403): Forbidden".to_string(),
        })
    }
}

/// Prompt that answers with a fixed value and counts invocations
#[derive(Debug)]
pub struct ScriptedConfirm {
    answer: bool,
    asked: Mutex<usize>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        *self.asked.lock().unwrap()
    }
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, _prompt: &str, _default: bool) -> anyhow::Result<bool> {
        *self.asked.lock().unwrap() += 1;
        Ok(self.answer)
    }
}
