//! # memopad-core
//!
//! Core types for memopad: the note data model, the shared error type,
//! and the [`NoteRepository`] trait that storage backends implement.
//!
//! Handlers and tests depend on the trait, not on a concrete backend, so
//! the PostgreSQL repository and the in-memory test repository are
//! interchangeable.

pub mod error;
pub mod models;
pub mod traits;
pub mod uuid_utils;

pub use error::{Error, Result};
pub use models::Note;
pub use traits::{CreateNoteRequest, NoteRepository, UpdateNoteRequest};
pub use uuid_utils::{is_v7, new_v7};
