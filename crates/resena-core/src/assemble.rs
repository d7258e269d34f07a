//! View assembly — joins a review with summaries of its referenced entities.

use crate::{
  review::{Review, ReviewView},
  store::EntityLookup,
};

/// Assemble the read view for a persisted review.
///
/// Resolves both references in one round trip via `lookup`. A reference that
/// no longer resolves (referential integrity violated out-of-band) yields a
/// `None` summary rather than an error. No side effects beyond reads.
pub async fn assemble<L>(
  review: Review,
  lookup: &L,
) -> Result<ReviewView, L::Error>
where
  L: EntityLookup,
{
  let (user, product) = lookup
    .resolve_refs(review.user_id, review.product_id)
    .await?;
  Ok(ReviewView::from_parts(review, user.as_ref(), product.as_ref()))
}
