//! HTTP wiring for the folio portfolio backend.
//!
//! Nests [`folio_api::api_router`] under the configured prefix and adds the
//! transport layers: permissive CORS and per-request tracing.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use folio_core::{seed::PortfolioSeed, store::PortfolioStore};
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FOLIO_*` environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Path prefix all API routes are mounted under.
  pub api_prefix: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "0.0.0.0".to_string(),
      port:       8001,
      store_path: PathBuf::from("portfolio.db"),
      api_prefix: "/api".to_string(),
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `FOLIO_*` env vars.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("FOLIO"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application: API routes under `api_prefix`, CORS open
/// to any origin, and a tracing span per request.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: PortfolioStore + 'static,
{
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);

  let api = folio_api::api_router(store);
  let prefix = config.api_prefix.trim_end_matches('/');
  let router = if prefix.is_empty() {
    Router::new().merge(api)
  } else if prefix.starts_with('/') {
    Router::new().nest(prefix, api)
  } else {
    Router::new().nest(&format!("/{prefix}"), api)
  };

  router.layer(cors).layer(TraceLayer::new_for_http())
}

// ─── Seeding ──────────────────────────────────────────────────────────────────

/// Read a [`PortfolioSeed`] JSON document from disk.
pub fn read_seed(path: &Path) -> anyhow::Result<PortfolioSeed> {
  let text = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read seed file {path:?}"))?;
  serde_json::from_str(&text)
    .with_context(|| format!("failed to parse seed file {path:?}"))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Integration tests ────────────────────────────────────────────────────────
