//! [`SqliteStore`] — the SQLite implementation of [`ReviewStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use resena_core::{
  product::{NewProduct, Product},
  review::{JoinedReview, NewReview, Review},
  store::{EntityLookup, ReviewStore},
  user::{NewUser, User},
};

use crate::{
  Error, Result,
  encode::{RawJoinedReview, RawUser, encode_role},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A review store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Referential
/// integrity of review references is enforced by the schema's FOREIGN KEY
/// constraints (`PRAGMA foreign_keys = ON`).
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── EntityLookup impl ───────────────────────────────────────────────────────

impl EntityLookup for SqliteStore {
  type Error = Error;

  async fn resolve_refs(
    &self,
    user_id: i64,
    product_id: i64,
  ) -> Result<(Option<User>, Option<Product>)> {
    // Both lookups run inside one connection call — a single round trip.
    let (raw_user, product) = self
      .conn
      .call(move |conn| {
        let user: Option<RawUser> = conn
          .query_row(
            "SELECT user_id, username, email, role FROM users WHERE user_id = ?1",
            rusqlite::params![user_id],
            |row| {
              Ok(RawUser {
                id:       row.get(0)?,
                username: row.get(1)?,
                email:    row.get(2)?,
                role:     row.get(3)?,
              })
            },
          )
          .optional()?;

        let product: Option<Product> = conn
          .query_row(
            "SELECT product_id, name, description, price FROM products
             WHERE product_id = ?1",
            rusqlite::params![product_id],
            |row| {
              Ok(Product {
                id:          row.get(0)?,
                name:        row.get(1)?,
                description: row.get(2)?,
                price:       row.get(3)?,
              })
            },
          )
          .optional()?;

        Ok((user, product))
      })
      .await?;

    let user = raw_user.map(RawUser::into_user).transpose()?;
    Ok((user, product))
  }
}

// ─── ReviewStore impl ────────────────────────────────────────────────────────

impl ReviewStore for SqliteStore {
  // ── Reviews ───────────────────────────────────────────────────────────────

  async fn insert_review(&self, input: NewReview) -> Result<Review> {
    let NewReview {
      comment,
      rating,
      user_id,
      product_id,
    } = input;

    let review = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO reviews (comment, rating, user_id, product_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![comment, rating, user_id, product_id],
        )?;
        Ok(Review {
          id: conn.last_insert_rowid(),
          comment,
          rating,
          user_id,
          product_id,
        })
      })
      .await?;

    Ok(review)
  }

  async fn get_review(&self, id: i64) -> Result<Option<Review>> {
    let review = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT review_id, comment, rating, user_id, product_id
               FROM reviews WHERE review_id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(Review {
                  id:         row.get(0)?,
                  comment:    row.get(1)?,
                  rating:     row.get(2)?,
                  user_id:    row.get(3)?,
                  product_id: row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    Ok(review)
  }

  async fn all_reviews(&self) -> Result<Vec<JoinedReview>> {
    let raws: Vec<RawJoinedReview> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT r.review_id, r.comment, r.rating, r.user_id, r.product_id,
                  u.user_id, u.username, u.email, u.role,
                  p.product_id, p.name, p.description, p.price
           FROM reviews r
           LEFT JOIN users u    ON u.user_id    = r.user_id
           LEFT JOIN products p ON p.product_id = r.product_id",
        )?;
        let rows = stmt
          .query_map([], |row| {
            let user = match row.get::<_, Option<i64>>(5)? {
              Some(id) => Some(RawUser {
                id,
                username: row.get(6)?,
                email:    row.get(7)?,
                role:     row.get(8)?,
              }),
              None => None,
            };
            let product = match row.get::<_, Option<i64>>(9)? {
              Some(id) => Some(Product {
                id,
                name:        row.get(10)?,
                description: row.get(11)?,
                price:       row.get(12)?,
              }),
              None => None,
            };
            Ok(RawJoinedReview {
              review: Review {
                id:         row.get(0)?,
                comment:    row.get(1)?,
                rating:     row.get(2)?,
                user_id:    row.get(3)?,
                product_id: row.get(4)?,
              },
              user,
              product,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawJoinedReview::into_joined).collect()
  }

  // ── Referenced entities ───────────────────────────────────────────────────

  async fn add_user(&self, input: NewUser) -> Result<User> {
    let NewUser {
      username,
      email,
      role,
    } = input;
    let role_str = encode_role(role).to_owned();

    let user = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (username, email, role) VALUES (?1, ?2, ?3)",
          rusqlite::params![username, email, role_str],
        )?;
        Ok(User {
          id: conn.last_insert_rowid(),
          username,
          email,
          role,
        })
      })
      .await?;

    Ok(user)
  }

  async fn get_user(&self, id: i64) -> Result<Option<User>> {
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT user_id, username, email, role FROM users
               WHERE user_id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(RawUser {
                  id:       row.get(0)?,
                  username: row.get(1)?,
                  email:    row.get(2)?,
                  role:     row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn add_product(&self, input: NewProduct) -> Result<Product> {
    let NewProduct {
      name,
      description,
      price,
    } = input;

    let product = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO products (name, description, price)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![name, description, price],
        )?;
        Ok(Product {
          id: conn.last_insert_rowid(),
          name,
          description,
          price,
        })
      })
      .await?;

    Ok(product)
  }

  async fn get_product(&self, id: i64) -> Result<Option<Product>> {
    let product = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT product_id, name, description, price FROM products
               WHERE product_id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(Product {
                  id:          row.get(0)?,
                  name:        row.get(1)?,
                  description: row.get(2)?,
                  price:       row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    Ok(product)
  }
}
