//! Decoding helpers between SQLite rows and Rust domain types.
//!
//! Integer ids and text columns map directly; the only column needing
//! translation is the user role, stored as plain text.

use resena_core::{
  product::Product,
  review::{JoinedReview, Review},
  user::{User, UserRole},
};

use crate::{Error, Result};

// ─── UserRole ────────────────────────────────────────────────────────────────

pub fn encode_role(role: UserRole) -> &'static str {
  match role {
    UserRole::Admin => "admin",
    UserRole::User => "user",
  }
}

pub fn decode_role(s: &str) -> Result<UserRole> {
  match s {
    "admin" => Ok(UserRole::Admin),
    "user" => Ok(UserRole::User),
    other => Err(Error::UnknownRole(other.to_owned())),
  }
}

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// A `users` row before the role column is decoded.
pub struct RawUser {
  pub id:       i64,
  pub username: String,
  pub email:    String,
  pub role:     String,
}

impl RawUser {
  pub fn into_user(self) -> Result<User> {
    Ok(User {
      id:       self.id,
      username: self.username,
      email:    self.email,
      role:     decode_role(&self.role)?,
    })
  }
}

/// One row of the eager-join query, user side still raw.
pub struct RawJoinedReview {
  pub review:  Review,
  pub user:    Option<RawUser>,
  pub product: Option<Product>,
}

impl RawJoinedReview {
  pub fn into_joined(self) -> Result<JoinedReview> {
    Ok(JoinedReview {
      review:  self.review,
      user:    self.user.map(RawUser::into_user).transpose()?,
      product: self.product,
    })
  }
}
