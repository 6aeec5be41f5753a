//! Whole-collection persistence for saved plans.
//!
//! The collection is one JSON document, rewritten in full on every
//! mutation. There is no incremental persistence and no conflict detection;
//! a single writer is assumed. Multi-writer deployments would need each
//! mutation upgraded to an atomic read-modify-write transaction.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use wayfare_core::TravelData;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("archive I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("no saved plan with id {0}")]
    NotFound(String),
}

/// Persistence backend for the saved-plan collection.
#[async_trait]
pub trait PlanArchive: Send + Sync {
    async fn load(&self) -> Result<Vec<TravelData>, StoreError>;
    async fn store(&self, plans: &[TravelData]) -> Result<(), StoreError>;
}

/// Plan collection persisted as a single JSON document on disk.
pub struct JsonFileArchive {
    path: PathBuf,
    legacy_path: Option<PathBuf>,
}

impl JsonFileArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            legacy_path: None,
        }
    }

    /// Also read `legacy` when the primary document does not exist yet, so
    /// collections written under the old name migrate on first load.
    /// Writes always go to the primary path.
    pub fn with_legacy(mut self, legacy: impl Into<PathBuf>) -> Self {
        self.legacy_path = Some(legacy.into());
        self
    }

    async fn read_document(path: &Path) -> Result<Option<Vec<TravelData>>, StoreError> {
        match fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl PlanArchive for JsonFileArchive {
    async fn load(&self) -> Result<Vec<TravelData>, StoreError> {
        if let Some(plans) = Self::read_document(&self.path).await? {
            return Ok(plans);
        }
        if let Some(legacy) = &self.legacy_path {
            if let Some(plans) = Self::read_document(legacy).await? {
                debug!(path = %legacy.display(), "loaded plans from legacy archive");
                return Ok(plans);
            }
        }
        Ok(Vec::new())
    }

    async fn store(&self, plans: &[TravelData]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let document = serde_json::to_vec_pretty(plans)?;
        fs::write(&self.path, document).await?;
        Ok(())
    }
}

/// In-memory archive for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryArchive {
    plans: tokio::sync::Mutex<Vec<TravelData>>,
}

#[async_trait]
impl PlanArchive for MemoryArchive {
    async fn load(&self) -> Result<Vec<TravelData>, StoreError> {
        Ok(self.plans.lock().await.clone())
    }

    async fn store(&self, plans: &[TravelData]) -> Result<(), StoreError> {
        *self.plans.lock().await = plans.to_vec();
        Ok(())
    }
}
