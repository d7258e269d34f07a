//! Rating validation — runs strictly before any persistence attempt.

use crate::error::ValidationError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Accept a rating iff it lies in `MIN_RATING..=MAX_RATING`. No side effects.
pub fn validate_rating(rating: i32) -> Result<(), ValidationError> {
  if (MIN_RATING..=MAX_RATING).contains(&rating) {
    Ok(())
  } else {
    Err(ValidationError::OutOfRange { rating })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_full_range() {
    for rating in 1..=5 {
      assert!(validate_rating(rating).is_ok());
    }
  }

  #[test]
  fn rejects_out_of_range() {
    for rating in [0, 6, -1, 100] {
      assert_eq!(
        validate_rating(rating),
        Err(ValidationError::OutOfRange { rating }),
      );
    }
  }
}
