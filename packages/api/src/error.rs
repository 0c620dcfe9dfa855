//! Request-level failures and their JSON responses.
//!
//! Every error body has the shape `{ "error": "<message>" }`. Storage failures
//! are logged in full and answered with a fixed message so driver details never
//! reach the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::repo::StoreError;

/// Fixed message for every 500 response.
pub const INTERNAL_ERROR: &str = "Error interno del servidor";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("El título es requerido")]
    TitleRequired,

    #[error("El cuerpo de la solicitud no es JSON válido")]
    InvalidBody,

    #[error("Nota no encontrada")]
    NoteNotFound,

    #[error("Ruta no encontrada")]
    RouteNotFound,

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::TitleRequired | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::NoteNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage call failed");
                INTERNAL_ERROR.to_string()
            }
            other => other.to_string(),
        };
        (self.status(), Json(ErrorResponse { error: message })).into_response()
    }
}
