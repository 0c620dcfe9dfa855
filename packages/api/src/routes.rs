//! HTTP routes for `/api/notes`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::models::{Note, NoteDraft, NoteId, NotePayload};
use crate::repo::NoteRepository;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    notes: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn new(notes: impl NoteRepository + 'static) -> Self {
        Self {
            notes: Arc::new(notes),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Build the application router: note routes, a JSON 404 fallback, request
/// tracing and CORS open to any origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// An id that does not parse can't match any row.
fn parse_id(raw: &str) -> Result<NoteId, ApiError> {
    raw.parse().map_err(|_| ApiError::NoteNotFound)
}

fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<NoteDraft, ApiError> {
    let payload = match body {
        Ok(Json(body)) => NotePayload::from_json(body)?,
        // No JSON content type means no parsed body at all.
        Err(JsonRejection::MissingJsonContentType(_)) => NotePayload::default(),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected request body");
            return Err(ApiError::InvalidBody);
        }
    };
    payload.into_draft()
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.notes.list().await?;
    Ok(Json(notes))
}

async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_id(&id)?;
    let note = state.notes.get(id).await?.ok_or(ApiError::NoteNotFound)?;
    Ok(Json(note))
}

async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let draft = parse_body(body)?;
    let note = state.notes.create(&draft).await?;
    tracing::debug!(id = note.id, "note created");
    Ok((StatusCode::CREATED, Json(note)))
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    // Validation comes before the id lookup.
    let draft = parse_body(body)?;
    let id = parse_id(&id)?;
    let note = state
        .notes
        .update(id, &draft)
        .await?
        .ok_or(ApiError::NoteNotFound)?;
    tracing::debug!(id, "note updated");
    Ok(Json(note))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    if !state.notes.delete(id).await? {
        return Err(ApiError::NoteNotFound);
    }
    tracing::debug!(id, "note deleted");
    Ok(Json(MessageResponse {
        message: "Nota eliminada correctamente".to_string(),
    }))
}

async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}
