//! Task store abstraction.
//!
//! The orchestrator is the single writer for any given task id; pollers are
//! concurrent readers. Reads return cloned snapshots, so a poller can never
//! observe a half-applied mutation. "Not found" is a legitimate terminal
//! signal (unknown or expired id), not an error of a live task.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::task::SearchTask;

/// Storage seam for search tasks. The in-memory implementation below is the
/// default; a distributed cache or database can replace it without touching
/// the orchestrator.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts or overwrites the task snapshot under its id.
    async fn put(&self, task: SearchTask);
    /// A cloned snapshot of the task, if it exists.
    async fn get(&self, id: Uuid) -> Option<SearchTask>;
    /// Removes the task. Returns false when the id was already gone.
    async fn remove(&self, id: Uuid) -> bool;
}

/// Process-local task registry.
#[derive(Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<HashMap<Uuid, SearchTask>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn put(&self, task: SearchTask) {
        self.tasks.write().await.insert(task.id, task);
    }

    async fn get(&self, id: Uuid) -> Option<SearchTask> {
        self.tasks.read().await.get(&id).cloned()
    }

    async fn remove(&self, id: Uuid) -> bool {
        self.tasks.write().await.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = InMemoryTaskStore::new();
        let task = SearchTask::new(Uuid::new_v4());
        let id = task.id;
        store.put(task).await;
        assert!(store.get(id).await.is_some());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = InMemoryTaskStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_snapshot() {
        let store = InMemoryTaskStore::new();
        let mut task = SearchTask::new(Uuid::new_v4());
        let id = task.id;
        store.put(task.clone()).await;
        task.progress = 60;
        store.put(task).await;
        assert_eq!(store.get(id).await.unwrap().progress, 60);
    }

    #[tokio::test]
    async fn test_remove_reports_prior_existence() {
        let store = InMemoryTaskStore::new();
        let task = SearchTask::new(Uuid::new_v4());
        let id = task.id;
        store.put(task).await;
        assert!(store.remove(id).await);
        assert!(!store.remove(id).await);
        assert!(store.get(id).await.is_none());
    }
}
