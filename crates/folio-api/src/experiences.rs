//! Handlers for work and organisation experience.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/experiences`  | Active only, ascending `order` |
//! | `GET`  | `/organizations` | Storage order |

use std::sync::Arc;

use axum::{Json, extract::State};
use folio_core::{
  Record,
  resource::{Experience, OrganizationExperience},
  store::PortfolioStore,
};

use crate::error::ApiError;

/// `GET /experiences`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Record<Experience>>>, ApiError>
where
  S: PortfolioStore,
{
  let experiences = store
    .active_experiences()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(experiences))
}

/// `GET /organizations`
pub async fn organizations<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Record<OrganizationExperience>>>, ApiError>
where
  S: PortfolioStore,
{
  let orgs = store
    .organization_experiences()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(orgs))
}
