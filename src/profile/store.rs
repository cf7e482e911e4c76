use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use super::types::MedicalProfile;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store request failed: {0}")]
    Backend(String),

    #[error("document could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `None` when no record exists for the identifier.
    async fn fetch(&self, uid: &str) -> Result<Option<MedicalProfile>, StoreError>;

    /// Creates or fully replaces the record for the identifier.
    async fn save(&self, uid: &str, profile: &MedicalProfile) -> Result<(), StoreError>;
}

/// Keeps every record in process memory. Used when no document-store
/// credentials are configured, and by tests.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, MedicalProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn fetch(&self, uid: &str) -> Result<Option<MedicalProfile>, StoreError> {
        Ok(self.records.read().await.get(uid).cloned())
    }

    async fn save(&self, uid: &str, profile: &MedicalProfile) -> Result<(), StoreError> {
        self.records
            .write()
            .await
            .insert(uid.to_string(), profile.clone());
        Ok(())
    }
}
