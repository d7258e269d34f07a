//! [`ReviewService`] — orchestrates validate → persist → assemble.
//!
//! The service is request-scoped: construct one per operation over a borrowed
//! store. It holds no state of its own between calls.

use crate::{
  assemble::assemble,
  error::ServiceError,
  review::{NewReview, ReviewView},
  store::ReviewStore,
  validate::validate_rating,
};

pub struct ReviewService<'a, S> {
  store: &'a S,
}

impl<'a, S> ReviewService<'a, S>
where
  S: ReviewStore,
{
  pub fn new(store: &'a S) -> Self { Self { store } }

  /// Validate, persist and return the read view of a new review.
  ///
  /// The persisted row is re-read by its generated id before assembly, so
  /// the returned view reflects exactly what was stored — not merely the
  /// input. On validation failure nothing is written.
  pub async fn create(
    &self,
    input: NewReview,
  ) -> Result<ReviewView, ServiceError> {
    validate_rating(input.rating)?;

    let inserted = self
      .store
      .insert_review(input)
      .await
      .map_err(store_err)?;

    let persisted = self
      .store
      .get_review(inserted.id)
      .await
      .map_err(store_err)?
      .ok_or(ServiceError::ReadBack(inserted.id))?;

    assemble(persisted, self.store).await.map_err(store_err)
  }

  /// Return the read views of all reviews, in store iteration order.
  ///
  /// The rows arrive eagerly joined, so no per-row lookups happen here. An
  /// empty store is reported as [`ServiceError::NoReviews`] — absence is
  /// deliberately an error on this operation, not an empty sequence.
  pub async fn list(&self) -> Result<Vec<ReviewView>, ServiceError> {
    let joined = self.store.all_reviews().await.map_err(store_err)?;

    if joined.is_empty() {
      return Err(ServiceError::NoReviews);
    }

    Ok(joined.into_iter().map(ReviewView::from).collect())
  }
}

fn store_err<E>(e: E) -> ServiceError
where
  E: std::error::Error + Send + Sync + 'static,
{
  ServiceError::Store(Box::new(e))
}
