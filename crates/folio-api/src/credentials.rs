//! Handlers for certifications and languages.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/certifications` | Ascending `order` |
//! | `GET`  | `/languages`      | Storage order |

use std::sync::Arc;

use axum::{Json, extract::State};
use folio_core::{
  Record,
  resource::{Certification, Language},
  store::PortfolioStore,
};

use crate::error::ApiError;

/// `GET /certifications`
pub async fn certifications<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Record<Certification>>>, ApiError>
where
  S: PortfolioStore,
{
  let certs = store
    .certifications()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(certs))
}

/// `GET /languages`
pub async fn languages<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Record<Language>>>, ApiError>
where
  S: PortfolioStore,
{
  let languages = store
    .languages()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(languages))
}
