//! In-memory note repository for deterministic testing.
//!
//! Implements [`NoteRepository`] over a mutex-guarded map so tests can
//! exercise the full request path without a live database. A failure
//! switch simulates a storage outage for error-path coverage.
//!
//! ## Usage
//!
//! ```rust
//! use memopad_db::MemoryNoteRepository;
//!
//! let repo = MemoryNoteRepository::new();
//! assert!(repo.is_empty());
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use memopad_core::{
    new_v7, CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest,
};

/// In-memory implementation of NoteRepository.
///
/// Clones share the same underlying map, so a test can keep one handle
/// for inspection while the server owns another.
#[derive(Clone, Default)]
pub struct MemoryNoteRepository {
    notes: Arc<Mutex<HashMap<Uuid, Note>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryNoteRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as if storage were down.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.lock().unwrap().len()
    }

    /// Whether the repository holds no notes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_failure(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        self.check_failure()?;
        let notes = self.notes.lock().unwrap();
        let mut all: Vec<Note> = notes.values().cloned().collect();
        // Same ordering as the SQL implementation: timestamp desc, id desc.
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(all)
    }

    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        self.check_failure()?;
        let note = Note {
            id: new_v7(),
            title: req.title,
            content: req.content,
            timestamp: Utc::now(),
        };
        self.notes.lock().unwrap().insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<()> {
        self.check_failure()?;
        let mut notes = self.notes.lock().unwrap();
        match notes.get_mut(&id) {
            Some(note) => {
                note.title = req.title;
                note.content = req.content;
                note.timestamp = Utc::now();
                Ok(())
            }
            None => Err(Error::NoteNotFound(id)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.check_failure()?;
        match self.notes.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::NoteNotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memopad_core::is_v7;
    use std::collections::HashSet;
    use std::time::Duration;

    fn create_req(title: &str, content: &str) -> CreateNoteRequest {
        CreateNoteRequest {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let repo = MemoryNoteRepository::new();
        let before = Utc::now();

        let note = repo.insert(create_req("A", "a")).await.unwrap();

        assert!(is_v7(&note.id));
        assert!(note.timestamp >= before);
        assert_eq!(note.title, "A");
        assert_eq!(note.content, "a");

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, note.id);
    }

    #[tokio::test]
    async fn test_insert_generates_unique_ids() {
        let repo = MemoryNoteRepository::new();
        let mut ids = HashSet::new();

        for i in 0..50 {
            let note = repo.insert(create_req(&format!("n{}", i), "x")).await.unwrap();
            ids.insert(note.id);
        }

        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let repo = MemoryNoteRepository::new();

        let first = repo.insert(create_req("first", "1")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = repo.insert(create_req("second", "2")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let third = repo.insert(create_req("third", "3")).await.unwrap();

        let listed = repo.list().await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
        assert!(listed[0].timestamp > listed[1].timestamp);
        assert!(listed[1].timestamp > listed[2].timestamp);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_bumps_timestamp() {
        let repo = MemoryNoteRepository::new();
        let note = repo.insert(create_req("A", "a")).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let req = UpdateNoteRequest {
            title: "B".to_string(),
            content: "b".to_string(),
        };
        repo.update(note.id, req).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, note.id);
        assert_eq!(listed[0].title, "B");
        assert_eq!(listed[0].content, "b");
        assert!(listed[0].timestamp > note.timestamp);
    }

    #[tokio::test]
    async fn test_update_leaves_other_notes_untouched() {
        let repo = MemoryNoteRepository::new();
        let target = repo.insert(create_req("target", "t")).await.unwrap();
        let other = repo.insert(create_req("other", "o")).await.unwrap();

        let req = UpdateNoteRequest {
            title: "changed".to_string(),
            content: "c".to_string(),
        };
        repo.update(target.id, req).await.unwrap();

        let listed = repo.list().await.unwrap();
        let untouched = listed.iter().find(|n| n.id == other.id).unwrap();
        assert_eq!(untouched.title, "other");
        assert_eq!(untouched.content, "o");
        assert_eq!(untouched.timestamp, other.timestamp);
    }

    #[tokio::test]
    async fn test_update_missing_returns_not_found() {
        let repo = MemoryNoteRepository::new();
        let existing = repo.insert(create_req("keep", "k")).await.unwrap();

        let missing = Uuid::new_v4();
        let req = UpdateNoteRequest {
            title: "x".to_string(),
            content: "y".to_string(),
        };
        let err = repo.update(missing, req).await.unwrap_err();
        assert!(matches!(err, Error::NoteNotFound(id) if id == missing));

        // Collection unchanged.
        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "keep");
        assert_eq!(listed[0].timestamp, existing.timestamp);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = MemoryNoteRepository::new();
        let doomed = repo.insert(create_req("doomed", "d")).await.unwrap();
        let survivor = repo.insert(create_req("survivor", "s")).await.unwrap();

        repo.delete(doomed.id).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, survivor.id);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_not_found() {
        let repo = MemoryNoteRepository::new();
        repo.insert(create_req("keep", "k")).await.unwrap();

        let missing = Uuid::new_v4();
        let err = repo.delete(missing).await.unwrap_err();
        assert!(matches!(err, Error::NoteNotFound(id) if id == missing));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_second_delete_returns_not_found() {
        let repo = MemoryNoteRepository::new();
        let note = repo.insert(create_req("once", "1")).await.unwrap();

        repo.delete(note.id).await.unwrap();
        let err = repo.delete(note.id).await.unwrap_err();
        assert!(matches!(err, Error::NoteNotFound(_)));
    }

    #[tokio::test]
    async fn test_failing_repository_surfaces_database_error() {
        let repo = MemoryNoteRepository::new();
        repo.set_failing(true);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, Error::Database(_)));

        repo.set_failing(false);
        assert!(repo.list().await.is_ok());
    }
}
