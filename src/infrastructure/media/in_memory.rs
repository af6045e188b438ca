use crate::core::errors::TiffinError;
use crate::infrastructure::media::MediaStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryMediaStore {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        InMemoryMediaStore {
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn contains(&self, name: &str) -> bool {
        let files = self.files.read().await;
        files.contains_key(name)
    }

    pub async fn len(&self) -> usize {
        let files = self.files.read().await;
        files.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn save(&self, name: &str, bytes: &[u8]) -> Result<(), TiffinError> {
        let mut files = self.files.write().await;
        files.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), TiffinError> {
        let mut files = self.files.write().await;
        files
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| TiffinError::MediaError(format!("No such asset: {}", name)))
    }
}
