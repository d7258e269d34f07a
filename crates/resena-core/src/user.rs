//! User — owned by the user subsystem, referenced (never owned) by reviews.

use serde::{Deserialize, Serialize};

/// Access level of a user account.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
  Admin,
  #[default]
  User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:       i64,
  pub username: String,
  pub email:    String,
  pub role:     UserRole,
}

/// Input for [`ReviewStore::add_user`](crate::store::ReviewStore::add_user);
/// the id is store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
  pub username: String,
  pub email:    String,
  #[serde(default)]
  pub role:     UserRole,
}

/// The slice of a user embedded in a
/// [`ReviewView`](crate::review::ReviewView).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
  pub id:       i64,
  pub username: String,
}

impl From<&User> for UserSummary {
  fn from(user: &User) -> Self {
    Self {
      id:       user.id,
      username: user.username.clone(),
    }
  }
}
