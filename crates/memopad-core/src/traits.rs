//! Repository traits for storage backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::models::Note;

/// Request to create a new note.
///
/// Both fields are required; deserialization rejects bodies that omit
/// either one. No other validation is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

/// Request to replace an existing note's title and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: String,
    pub content: String,
}

/// Storage operations over the notes collection.
///
/// Handlers hold this as `Arc<dyn NoteRepository>` so tests can swap in
/// the in-memory backend.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List all notes, newest first.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Insert a new note, assigning its id and timestamp.
    ///
    /// Returns the stored note so callers see the assigned fields without
    /// a second read.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note>;

    /// Replace the title and content of the note with the given id,
    /// reassigning its timestamp.
    ///
    /// Returns `Error::NoteNotFound` if no such note exists.
    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<()>;

    /// Delete the note with the given id.
    ///
    /// Returns `Error::NoteNotFound` if no such note exists.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
