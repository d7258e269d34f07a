//! Handlers for `/reviews/` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/reviews/` | 404 when the store holds zero reviews |
//! | `POST` | `/reviews/` | Body: [`CreateBody`]; returns 201 + the stored view |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use resena_core::{
  review::{NewReview, ReviewView},
  service::ReviewService,
  store::ReviewStore,
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /reviews/` — every review joined with its user and product summary.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ReviewView>>, ApiError>
where
  S: ReviewStore,
{
  let views = ReviewService::new(store.as_ref()).list().await?;
  Ok(Json(views))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /reviews/`.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub comment:    Option<String>,
  pub rating:     i32,
  pub user_id:    i64,
  pub product_id: i64,
}

impl From<CreateBody> for NewReview {
  fn from(b: CreateBody) -> Self {
    NewReview {
      comment:    b.comment,
      rating:     b.rating,
      user_id:    b.user_id,
      product_id: b.product_id,
    }
  }
}

/// `POST /reviews/` — returns 201 + the stored [`ReviewView`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ReviewStore,
{
  let view = ReviewService::new(store.as_ref())
    .create(NewReview::from(body))
    .await?;
  Ok((StatusCode::CREATED, Json(view)))
}
