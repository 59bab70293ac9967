use super::SnapshotRepository;
use crate::error::DataError;
use async_trait::async_trait;
use looplab_domain::value_objects::SavedSnapshot;
use tokio::sync::RwLock;

/// Process-local store, mostly useful in tests.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    snapshot: RwLock<SavedSnapshot>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: SavedSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }
}

#[async_trait]
impl SnapshotRepository for InMemoryRepository {
    async fn load(&self) -> Result<SavedSnapshot, DataError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &SavedSnapshot) -> Result<(), DataError> {
        *self.snapshot.write().await = snapshot.clone();
        Ok(())
    }
}
