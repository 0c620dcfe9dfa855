//! # Note model and request payload validation
//!
//! [`Note`] is the full row from the `note` table and is what every endpoint
//! serializes back to the caller, with no projection.
//!
//! Incoming bodies are read as a JSON object into [`NotePayload`] (any JSON value
//! for either field) and then turned into a [`NoteDraft`] by
//! [`NotePayload::into_draft`]. A draft is the only thing a repository accepts, so
//! a note can never reach storage without a usable title.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::error::ApiError;

/// Primary key of the `note` table (`SERIAL`).
pub type NoteId = i32;

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a create or update request, before validation.
#[derive(Debug, Default)]
pub struct NotePayload {
    pub title: Option<Value>,
    pub content: Option<Value>,
}

/// Validated title and content, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl NotePayload {
    /// Pick `title` and `content` out of a request body.
    ///
    /// An array has no keys, so it yields an empty payload and fails title
    /// validation later. Any other non-object value is not a usable body.
    pub fn from_json(body: Value) -> Result<Self, ApiError> {
        match body {
            Value::Object(mut fields) => Ok(Self {
                title: fields.remove("title"),
                content: fields.remove("content"),
            }),
            Value::Array(_) => Ok(Self::default()),
            _ => Err(ApiError::InvalidBody),
        }
    }

    /// Check the title and normalise the content.
    ///
    /// The title must be a string with at least one non-whitespace character and
    /// is kept exactly as sent. Content is never rejected: missing, `null`,
    /// `false` and numeric zero become `""`, strings pass through, anything else
    /// is stored as its JSON text.
    pub fn into_draft(self) -> Result<NoteDraft, ApiError> {
        let title = match self.title {
            Some(Value::String(title)) if !title.trim().is_empty() => title,
            _ => return Err(ApiError::TitleRequired),
        };

        let content = match self.content {
            None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
            Some(Value::String(content)) => content,
            Some(other) => other.to_string(),
        };

        Ok(NoteDraft { title, content })
    }
}
