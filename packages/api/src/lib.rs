//! # API crate: the notes REST service
//!
//! Everything the `server` binary needs to answer requests under `/api/notes` lives
//! here. The binary only wires these pieces together at startup.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`settings`] | Layered configuration (defaults, `config.toml`, environment) |
//! | [`db`] | PostgreSQL pool construction and embedded migrations |
//! | [`models`] | The [`Note`] row and validation of incoming payloads into a [`NoteDraft`] |
//! | [`repo`] | The [`NoteRepository`] storage trait with PostgreSQL and in-memory backends |
//! | [`routes`] | axum handlers and the [`router`] that mounts them |
//! | [`error`] | [`ApiError`], the mapping from failures to JSON error responses |
//!
//! ## Endpoints
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/api/notes` | `200` list, most recently updated first |
//! | `GET` | `/api/notes/{id}` | `200` note |
//! | `POST` | `/api/notes` | `201` created note |
//! | `PUT` | `/api/notes/{id}` | `200` updated note |
//! | `DELETE` | `/api/notes/{id}` | `200` confirmation message |

pub mod db;
pub mod error;
pub mod models;
pub mod repo;
pub mod routes;
pub mod settings;

pub use error::ApiError;
pub use models::{Note, NoteDraft, NoteId, NotePayload};
pub use repo::{MemoryNoteRepository, NoteRepository, PgNoteRepository, StoreError};
pub use routes::{router, AppState};
pub use settings::Settings;
