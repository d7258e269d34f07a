//! Error types for `resena-core`.

use thiserror::Error;

/// A domain-rule violation detected before any write is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  /// The rating falls outside the accepted 1..=5 range.
  #[error("rating must be between 1 and 5")]
  OutOfRange { rating: i32 },
}

/// An error returned by [`ReviewService`](crate::service::ReviewService).
#[derive(Debug, Error)]
pub enum ServiceError {
  #[error(transparent)]
  InvalidRating(#[from] ValidationError),

  #[error("no reviews registered")]
  NoReviews,

  /// The row written by `create` could not be read back.
  #[error("review {0} vanished between insert and read-back")]
  ReadBack(i64),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}
