//! JSON REST API for the folio portfolio backend.
//!
//! Exposes an axum [`Router`] backed by any
//! [`folio_core::store::PortfolioStore`]. CORS, tracing, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folio_api::api_router(store.clone()))
//! ```

pub mod contact;
pub mod credentials;
pub mod error;
pub mod experiences;
pub mod profile;
pub mod skills;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use folio_core::store::PortfolioStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PortfolioStore + 'static,
{
  Router::new()
    // Singletons
    .route("/personal", get(profile::personal::<S>))
    .route("/education", get(profile::education::<S>))
    // Collections
    .route("/experiences", get(experiences::list::<S>))
    .route("/organizations", get(experiences::organizations::<S>))
    .route("/skills", get(skills::handler::<S>))
    .route("/certifications", get(credentials::certifications::<S>))
    .route("/languages", get(credentials::languages::<S>))
    // Visitor input
    .route("/contact", post(contact::submit::<S>))
    .with_state(store)
}

#[cfg(test)]
mod tests;
