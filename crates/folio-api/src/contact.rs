//! Handler for `POST /contact`.
//!
//! Body: [`ContactSubmission`]. The submission is validated before the store
//! is touched. On success the message is written, then read back, and the
//! stored record is returned.

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use folio_core::{
  Record,
  contact::{ContactMessage, ContactSubmission},
  store::PortfolioStore,
};

use crate::error::ApiError;

/// `POST /contact` returns 200 with the stored message.
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<Record<ContactMessage>>, ApiError>
where
  S: PortfolioStore,
{
  let Json(submission) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let record = Record::new(submission.validate()?);
  let id = record.id;

  store
    .insert_contact_message(record)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let stored = store
    .get_contact_message(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::Internal(format!("contact message {id} missing after write"))
    })?;

  tracing::info!(%id, "stored contact message");
  Ok(Json(stored))
}
