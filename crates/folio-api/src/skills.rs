//! Handler for `GET /skills`.
//!
//! Stored skill sets are folded into [`SkillGroups`]; every category key is
//! present in the response even when nothing is stored for it.

use std::sync::Arc;

use axum::{Json, extract::State};
use folio_core::{skills::SkillGroups, store::PortfolioStore};

use crate::error::ApiError;

/// `GET /skills`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<SkillGroups>, ApiError>
where
  S: PortfolioStore,
{
  let sets = store
    .skill_sets()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(SkillGroups::from_sets(sets.into_iter().map(|r| r.data))))
}
