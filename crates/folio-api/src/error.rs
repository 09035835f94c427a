//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Store failures and internal inconsistencies are logged here, once, and
//! reach the client only as a generic 500 message.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use folio_core::FieldError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("validation failed")]
  Validation(Vec<FieldError>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("internal error: {0}")]
  Internal(String),
}

impl From<folio_core::Error> for ApiError {
  fn from(e: folio_core::Error) -> Self {
    match e {
      folio_core::Error::Validation(fields) => ApiError::Validation(fields),
      other => ApiError::Internal(other.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    if matches!(self, ApiError::Store(_) | ApiError::Internal(_)) {
      tracing::error!(error = %self, "request failed");
    }

    let (status, body) = match self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, json!({ "error": m })),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, json!({ "error": m })),
      ApiError::Validation(fields) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({ "error": "validation failed", "fields": fields }),
      ),
      ApiError::Store(_) | ApiError::Internal(_) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "internal server error" }),
      ),
    };
    (status, Json(body)).into_response()
  }
}
