//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use memopad_core::{
    new_v7, CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest,
};

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn note_from_row(row: &PgRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        timestamp: row.get("updated_at_utc"),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, title, content, updated_at_utc
             FROM note
             ORDER BY updated_at_utc DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        // Id and timestamp are assigned here, never taken from the client.
        let note = Note {
            id: new_v7(),
            title: req.title,
            content: req.content,
            timestamp: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO note (id, title, content, updated_at_utc)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(note.id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.timestamp)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(note)
    }

    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<()> {
        let result = sqlx::query(
            "UPDATE note
             SET title = $1, content = $2, updated_at_utc = $3
             WHERE id = $4",
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }

        Ok(())
    }
}
