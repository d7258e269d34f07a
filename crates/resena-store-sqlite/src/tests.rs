//! Integration tests for `SqliteStore` against an in-memory database.

use resena_core::{
  error::ServiceError,
  product::{NewProduct, Product},
  review::{NewReview, Review},
  service::ReviewService,
  store::{EntityLookup, ReviewStore},
  user::{NewUser, User, UserRole},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

async fn seed_user(s: &SqliteStore, username: &str) -> User {
  s.add_user(NewUser {
    username: username.into(),
    email:    format!("{username}@example.com"),
    role:     UserRole::User,
  })
  .await
  .unwrap()
}

async fn seed_product(s: &SqliteStore, name: &str) -> Product {
  s.add_product(NewProduct {
    name:        name.into(),
    description: None,
    price:       9.99,
  })
  .await
  .unwrap()
}

fn review_input(
  user: &User,
  product: &Product,
  rating: i32,
  comment: Option<&str>,
) -> NewReview {
  NewReview {
    comment: comment.map(str::to_owned),
    rating,
    user_id: user.id,
    product_id: product.id,
  }
}

// ─── Referenced entities ─────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_user() {
  let s = store().await;

  let user = seed_user(&s, "alice").await;
  assert_eq!(user.username, "alice");
  assert_eq!(user.role, UserRole::User);

  let fetched = s.get_user(user.id).await.unwrap();
  assert_eq!(fetched, Some(user));
}

#[tokio::test]
async fn get_user_missing_returns_none() {
  let s = store().await;
  let result = s.get_user(42).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn add_and_get_product() {
  let s = store().await;

  let product = seed_product(&s, "widget").await;
  assert_eq!(product.name, "widget");

  let fetched = s.get_product(product.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, product.id);
  assert_eq!(fetched.name, "widget");
}

#[tokio::test]
async fn resolve_refs_returns_both_sides() {
  let s = store().await;
  let user = seed_user(&s, "alice").await;
  let product = seed_product(&s, "widget").await;

  let (u, p) = s.resolve_refs(user.id, product.id).await.unwrap();
  assert_eq!(u.unwrap().username, "alice");
  assert_eq!(p.unwrap().name, "widget");
}

#[tokio::test]
async fn resolve_refs_missing_sides_are_none() {
  let s = store().await;
  let user = seed_user(&s, "alice").await;

  let (u, p) = s.resolve_refs(user.id, 999).await.unwrap();
  assert!(u.is_some());
  assert!(p.is_none());

  let (u, p) = s.resolve_refs(998, 999).await.unwrap();
  assert!(u.is_none());
  assert!(p.is_none());
}

// ─── Review writes ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_review_roundtrips_fields() {
  let s = store().await;
  let user = seed_user(&s, "alice").await;
  let product = seed_product(&s, "widget").await;

  let review = s
    .insert_review(review_input(&user, &product, 4, Some("solid")))
    .await
    .unwrap();

  assert_eq!(review.comment.as_deref(), Some("solid"));
  assert_eq!(review.rating, 4);
  assert_eq!(review.user_id, user.id);
  assert_eq!(review.product_id, product.id);

  let fetched = s.get_review(review.id).await.unwrap();
  assert_eq!(fetched, Some(review));
}

#[tokio::test]
async fn insert_review_unknown_user_fails() {
  let s = store().await;
  let product = seed_product(&s, "widget").await;

  let err = s
    .insert_review(NewReview {
      comment:    None,
      rating:     3,
      user_id:    999,
      product_id: product.id,
    })
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));
}

#[tokio::test]
async fn insert_review_unknown_product_fails() {
  let s = store().await;
  let user = seed_user(&s, "alice").await;

  let result = s
    .insert_review(NewReview {
      comment:    None,
      rating:     3,
      user_id:    user.id,
      product_id: 999,
    })
    .await;
  assert!(result.is_err());
}

#[tokio::test]
async fn get_review_missing_returns_none() {
  let s = store().await;
  let result = s.get_review(7).await.unwrap();
  assert!(result.is_none());
}

// ─── Eager-join reads ────────────────────────────────────────────────────────

#[tokio::test]
async fn all_reviews_empty_store() {
  let s = store().await;
  let rows = s.all_reviews().await.unwrap();
  assert!(rows.is_empty());
}

#[tokio::test]
async fn all_reviews_joins_user_and_product() {
  let s = store().await;
  let alice = seed_user(&s, "alice").await;
  let widget = seed_product(&s, "widget").await;

  s.insert_review(review_input(&alice, &widget, 5, Some("great")))
    .await
    .unwrap();

  let rows = s.all_reviews().await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].user.as_ref().unwrap().username, "alice");
  assert_eq!(rows[0].product.as_ref().unwrap().name, "widget");
}

#[tokio::test]
async fn all_reviews_preserves_insertion_order() {
  let s = store().await;
  let alice = seed_user(&s, "alice").await;
  let widget = seed_product(&s, "widget").await;

  let mut ids = Vec::new();
  for rating in [1, 3, 5] {
    let review = s
      .insert_review(review_input(&alice, &widget, rating, None))
      .await
      .unwrap();
    ids.push(review.id);
  }

  let first: Vec<i64> = s
    .all_reviews()
    .await
    .unwrap()
    .iter()
    .map(|j| j.review.id)
    .collect();
  let second: Vec<i64> = s
    .all_reviews()
    .await
    .unwrap()
    .iter()
    .map(|j| j.review.id)
    .collect();

  assert_eq!(first, ids);
  assert_eq!(first, second);
}

// ─── Service orchestration ───────────────────────────────────────────────────

#[tokio::test]
async fn service_create_returns_assembled_view() {
  let s = store().await;
  let bob = seed_user(&s, "bob").await;
  let pen = seed_product(&s, "pen").await;

  let view = ReviewService::new(&s)
    .create(review_input(&bob, &pen, 5, Some("great")))
    .await
    .unwrap();

  assert_eq!(view.comment.as_deref(), Some("great"));
  assert_eq!(view.rating, 5);
  assert_eq!(view.user_id, bob.id);
  assert_eq!(view.product_id, pen.id);
  assert_eq!(view.user.as_ref().unwrap().username, "bob");
  assert_eq!(view.product.as_ref().unwrap().name, "pen");
}

#[tokio::test]
async fn service_create_rejects_out_of_range_ratings() {
  let s = store().await;
  let alice = seed_user(&s, "alice").await;
  let widget = seed_product(&s, "widget").await;
  let service = ReviewService::new(&s);

  for rating in [0, 6, -1] {
    let err = service
      .create(review_input(&alice, &widget, rating, None))
      .await
      .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidRating(_)));
  }

  // Nothing was persisted by the rejected calls.
  assert!(s.all_reviews().await.unwrap().is_empty());
}

#[tokio::test]
async fn service_list_on_empty_store_is_no_reviews() {
  let s = store().await;

  let err = ReviewService::new(&s).list().await.unwrap_err();
  assert!(matches!(err, ServiceError::NoReviews));
}

#[tokio::test]
async fn service_list_returns_views_in_store_order() {
  let s = store().await;
  let alice = seed_user(&s, "alice").await;
  let widget = seed_product(&s, "widget").await;
  let service = ReviewService::new(&s);

  let a = service
    .create(review_input(&alice, &widget, 2, None))
    .await
    .unwrap();
  let b = service
    .create(review_input(&alice, &widget, 4, None))
    .await
    .unwrap();

  let views = service.list().await.unwrap();
  let ids: Vec<i64> = views.iter().map(|v| v.id).collect();
  assert_eq!(ids, vec![a.id, b.id]);
}

// ─── Assembly degradation ────────────────────────────────────────────────────

#[tokio::test]
async fn assemble_degrades_when_references_missing() {
  let s = store().await;

  // A review value whose references were never persisted — as if integrity
  // had been violated out-of-band.
  let orphan = Review {
    id:         99,
    comment:    None,
    rating:     3,
    user_id:    500,
    product_id: 501,
  };

  let view = resena_core::assemble::assemble(orphan, &s).await.unwrap();
  assert!(view.user.is_none());
  assert!(view.product.is_none());
  assert_eq!(view.rating, 3);
}
