//! PostgreSQL-backed [`NoteRepository`].

use async_trait::async_trait;
use sqlx::PgPool;

use super::{NoteRepository, StoreError};
use crate::models::{Note, NoteDraft, NoteId};

/// Note storage over a shared connection pool. Cloning is cheap: the pool is a
/// handle, and each query checks a connection out and returns it when done.
#[derive(Clone, Debug)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as("SELECT * FROM note ORDER BY updated_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(notes)
    }

    async fn get(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as("SELECT * FROM note WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(note)
    }

    async fn create(&self, draft: &NoteDraft) -> Result<Note, StoreError> {
        let note = sqlx::query_as("INSERT INTO note (title, content) VALUES ($1, $2) RETURNING *")
            .bind(&draft.title)
            .bind(&draft.content)
            .fetch_one(&self.pool)
            .await?;
        Ok(note)
    }

    async fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as(
            "UPDATE note SET title = $1, content = $2, updated_at = NOW() WHERE id = $3 RETURNING *",
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn delete(&self, id: NoteId) -> Result<bool, StoreError> {
        let deleted: Option<(NoteId,)> = sqlx::query_as("DELETE FROM note WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted.is_some())
    }
}
