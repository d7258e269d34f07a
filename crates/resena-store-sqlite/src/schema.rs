//! SQL schema for the Resena SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id  INTEGER PRIMARY KEY,
    username TEXT NOT NULL,
    email    TEXT NOT NULL,
    role     TEXT NOT NULL DEFAULT 'user'   -- 'admin' | 'user'
);

CREATE TABLE IF NOT EXISTS products (
    product_id  INTEGER PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT,
    price       REAL NOT NULL DEFAULT 0
);

-- Reviews are write-once.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS reviews (
    review_id  INTEGER PRIMARY KEY,
    comment    TEXT,
    rating     INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    user_id    INTEGER NOT NULL REFERENCES users(user_id),
    product_id INTEGER NOT NULL REFERENCES products(product_id)
);

CREATE INDEX IF NOT EXISTS reviews_user_idx    ON reviews(user_id);
CREATE INDEX IF NOT EXISTS reviews_product_idx ON reviews(product_id);

PRAGMA user_version = 1;
";
