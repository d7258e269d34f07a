//! Product — owned by the catalog subsystem, referenced (never owned) by
//! reviews.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id:          i64,
  pub name:        String,
  pub description: Option<String>,
  pub price:       f64,
}

/// Input for
/// [`ReviewStore::add_product`](crate::store::ReviewStore::add_product); the
/// id is store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
  pub name:        String,
  pub description: Option<String>,
  pub price:       f64,
}

/// The slice of a product embedded in a
/// [`ReviewView`](crate::review::ReviewView).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
  pub id:   i64,
  pub name: String,
}

impl From<&Product> for ProductSummary {
  fn from(product: &Product) -> Self {
    Self {
      id:   product.id,
      name: product.name.clone(),
    }
  }
}
