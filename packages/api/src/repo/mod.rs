//! # Repository: note storage behind an async trait
//!
//! Handlers never talk to the database directly. They hold an
//! `Arc<dyn NoteRepository>` and issue exactly one call per request, so the same
//! routing code runs against PostgreSQL in production and an in-memory map in
//! tests.
//!
//! | Method | Missing row |
//! |--------|-------------|
//! | [`list`](NoteRepository::list) | n/a, returns an empty `Vec` |
//! | [`get`](NoteRepository::get) | `Ok(None)` |
//! | [`create`](NoteRepository::create) | n/a |
//! | [`update`](NoteRepository::update) | `Ok(None)` |
//! | [`delete`](NoteRepository::delete) | `Ok(false)` |
//!
//! Any failure of the backend itself is a [`StoreError`].

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Note, NoteDraft, NoteId};

mod memory;
mod postgres;

pub use memory::MemoryNoteRepository;
pub use postgres::PgNoteRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// All notes, most recently updated first. Ties go to the higher id.
    async fn list(&self) -> Result<Vec<Note>, StoreError>;

    async fn get(&self, id: NoteId) -> Result<Option<Note>, StoreError>;

    /// Insert a note and return it with its assigned id and timestamps.
    async fn create(&self, draft: &NoteDraft) -> Result<Note, StoreError>;

    /// Replace title and content, refreshing `updated_at`.
    async fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Option<Note>, StoreError>;

    /// Remove a note. Returns whether a row existed.
    async fn delete(&self, id: NoteId) -> Result<bool, StoreError>;
}
