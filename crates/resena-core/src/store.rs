//! The `ReviewStore` trait and the `EntityLookup` capability.
//!
//! The traits are implemented by storage backends (e.g.
//! `resena-store-sqlite`). Higher layers (`resena-api`) depend on these
//! abstractions, not on any concrete backend.

use std::future::Future;

use crate::{
  product::{NewProduct, Product},
  review::{JoinedReview, NewReview, Review},
  user::{NewUser, User},
};

// ─── Lookup capability ───────────────────────────────────────────────────────

/// Resolve the entities a review references.
///
/// The interface is join-shaped: both references are resolved in a single
/// round trip, so assembling one view never costs two store calls.
pub trait EntityLookup: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch the referenced user and product. A side that does not resolve is
  /// returned as `None`, never as an error.
  fn resolve_refs(
    &self,
    user_id: i64,
    product_id: i64,
  ) -> impl Future<Output = Result<(Option<User>, Option<Product>), Self::Error>>
  + Send
  + '_;
}

// ─── Store trait ─────────────────────────────────────────────────────────────

/// Abstraction over the persistence boundary for users, products and reviews.
///
/// Reviews are write-once: the trait deliberately has no update or delete
/// operation for them. Referential integrity of `user_id` / `product_id` is
/// enforced by the implementation at write time.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ReviewStore: EntityLookup {
  // ── Reviews ───────────────────────────────────────────────────────────

  /// Persist a new review and return it with its store-assigned id.
  ///
  /// Fails if `user_id` or `product_id` does not reference an existing
  /// entity.
  fn insert_review(
    &self,
    input: NewReview,
  ) -> impl Future<Output = Result<Review, Self::Error>> + Send + '_;

  /// Retrieve a review by id. Returns `None` if not found.
  fn get_review(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Review>, Self::Error>> + Send + '_;

  /// All reviews, each eagerly joined with its user and product — one
  /// logical fetch, not one lookup per row. Order is whatever the store
  /// yields, and is stable between calls with no intervening writes.
  fn all_reviews(
    &self,
  ) -> impl Future<Output = Result<Vec<JoinedReview>, Self::Error>> + Send + '_;

  // ── Referenced entities ───────────────────────────────────────────────

  /// Create and persist a new user with a store-assigned id.
  fn add_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Retrieve a user by id. Returns `None` if not found.
  fn get_user(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Create and persist a new product with a store-assigned id.
  fn add_product(
    &self,
    input: NewProduct,
  ) -> impl Future<Output = Result<Product, Self::Error>> + Send + '_;

  /// Retrieve a product by id. Returns `None` if not found.
  fn get_product(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Product>, Self::Error>> + Send + '_;
}
