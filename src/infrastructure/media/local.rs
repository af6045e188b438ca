use crate::core::errors::TiffinError;
use crate::infrastructure::media::MediaStore;
use async_trait::async_trait;
use std::path::PathBuf;

/// Writes image assets under a root directory, creating it on demand.
#[derive(Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalMediaStore { root: root.into() }
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), TiffinError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| TiffinError::MediaError(format!("Failed to create upload dir: {}", e)))?;
        tokio::fs::write(self.root.join(name), bytes)
            .await
            .map_err(|e| TiffinError::MediaError(format!("Failed to write {}: {}", name, e)))
    }

    async fn delete(&self, name: &str) -> Result<(), TiffinError> {
        tokio::fs::remove_file(self.root.join(name))
            .await
            .map_err(|e| TiffinError::MediaError(format!("Failed to delete {}: {}", name, e)))
    }
}
