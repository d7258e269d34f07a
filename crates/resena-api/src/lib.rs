//! JSON REST API for Resena.
//!
//! Exposes an axum [`Router`] backed by any
//! [`resena_core::store::ReviewStore`]. Auth, TLS, and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(resena_api::router(store.clone()))
//! ```

pub mod error;
pub mod reviews;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use resena_core::store::ReviewStore;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Permissive cross-origin policy for browser frontends during
  /// development. Infrastructure config, not part of the service contract.
  #[serde(default)]
  pub permissive_cors: bool,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: ReviewStore + 'static,
{
  Router::new()
    .route(
      "/reviews/",
      get(reviews::list::<S>).post(reviews::create::<S>),
    )
    .with_state(store)
}
