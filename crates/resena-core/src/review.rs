//! Review types — the write model, the eager-join row, and the read view.
//!
//! A review is write-once: it is created by
//! [`ReviewService::create`](crate::service::ReviewService::create) and never
//! updated or deleted afterwards.

use serde::{Deserialize, Serialize};

use crate::{
  product::{Product, ProductSummary},
  user::{User, UserSummary},
};

// ─── Write model ─────────────────────────────────────────────────────────────

/// A persisted review row. `user_id` and `product_id` reference existing
/// entities at write time; the store enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
  pub id:         i64,
  pub comment:    Option<String>,
  pub rating:     i32,
  pub user_id:    i64,
  pub product_id: i64,
}

/// Input for
/// [`ReviewStore::insert_review`](crate::store::ReviewStore::insert_review);
/// the id is store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
  pub comment:    Option<String>,
  pub rating:     i32,
  pub user_id:    i64,
  pub product_id: i64,
}

// ─── Eager-join row ──────────────────────────────────────────────────────────

/// A review fetched together with its referenced user and product in a single
/// round trip. Either side may be absent if referential integrity was
/// violated out-of-band.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedReview {
  pub review:  Review,
  pub user:    Option<User>,
  pub product: Option<Product>,
}

// ─── Read view ───────────────────────────────────────────────────────────────

/// The read-time projection of a review — never stored, always derived.
///
/// Summaries are `None` when the referenced entity cannot be resolved;
/// assembly degrades gracefully rather than failing the whole read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewView {
  pub id:         i64,
  pub comment:    Option<String>,
  pub rating:     i32,
  pub user_id:    i64,
  pub product_id: i64,
  pub user:       Option<UserSummary>,
  pub product:    Option<ProductSummary>,
}

impl ReviewView {
  /// Build a view from a persisted review and its resolved references.
  ///
  /// Every field is listed by name; nothing is spread through from
  /// unvalidated input.
  pub fn from_parts(
    review: Review,
    user: Option<&User>,
    product: Option<&Product>,
  ) -> Self {
    Self {
      id:         review.id,
      comment:    review.comment,
      rating:     review.rating,
      user_id:    review.user_id,
      product_id: review.product_id,
      user:       user.map(UserSummary::from),
      product:    product.map(ProductSummary::from),
    }
  }
}

impl From<JoinedReview> for ReviewView {
  fn from(joined: JoinedReview) -> Self {
    Self::from_parts(
      joined.review,
      joined.user.as_ref(),
      joined.product.as_ref(),
    )
  }
}
