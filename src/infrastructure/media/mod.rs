use crate::core::errors::TiffinError;
use async_trait::async_trait;

/// File-volume seam for uploaded food images.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), TiffinError>;
    async fn delete(&self, name: &str) -> Result<(), TiffinError>;
}

pub mod in_memory;
pub mod local;
