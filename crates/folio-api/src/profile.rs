//! Handlers for the singleton resources.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/personal`  | 404 if nothing is stored |
//! | `GET`  | `/education` | 404 if nothing is stored |

use std::sync::Arc;

use axum::{Json, extract::State};
use folio_core::{
  Record,
  resource::{Education, PersonalInfo},
  store::PortfolioStore,
};

use crate::error::ApiError;

/// `GET /personal`
pub async fn personal<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Record<PersonalInfo>>, ApiError>
where
  S: PortfolioStore,
{
  let info = store
    .personal_info()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("personal information not found".into()))?;
  Ok(Json(info))
}

/// `GET /education`
pub async fn education<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Record<Education>>, ApiError>
where
  S: PortfolioStore,
{
  let education = store
    .education()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("education information not found".into()))?;
  Ok(Json(education))
}
