//! folio server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the portfolio JSON API over HTTP.
//!
//! # Seeding
//!
//! To replace the stored portfolio content with a JSON seed document:
//!
//! ```sh
//! cargo run -p folio-server --bin server -- --seed data/seed.json
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use folio_core::store::PortfolioStore as _;
use folio_server::{ServerConfig, app, expand_tilde, read_seed};
use folio_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Portfolio content API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Replace all portfolio content with this JSON seed document and exit.
  #[arg(long, value_name = "FILE")]
  seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // Helper mode: load a seed and exit.
  if let Some(seed_path) = cli.seed {
    let seed = read_seed(&seed_path)?;
    let count = seed.document_count();
    store
      .seed(seed)
      .await
      .with_context(|| format!("failed to seed store at {store_path:?}"))?;
    tracing::info!(documents = count, "seeded {store_path:?} from {seed_path:?}");
    return Ok(());
  }

  let app = app(Arc::new(store), &server_cfg);
  let address = server_cfg.address();

  tracing::info!(
    "Listening on http://{address}{}",
    server_cfg.api_prefix.trim_end_matches('/')
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("shut down");
  Ok(())
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!("failed to listen for shutdown signal: {e}");
    std::future::pending::<()>().await;
  }
}
