//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern: each entity has a repository struct in
//! [`handlers`] that owns all SQL for its table, maps rows to the record
//! types in [`models`], and returns [`errors::DbError`] on failure.
//!
//! Repositories wrap a `&mut PgConnection`, so they work equally over a
//! pooled connection (single-statement reads) or a transaction
//! (multi-statement writes):
//!
//! ```ignore
//! let mut tx = pool.begin().await?;
//! let mut repo = Employees::new(&mut tx);
//! let employee = repo.create(&create_request).await?;
//! tx.commit().await?;
//! ```
//!
//! Migrations live in `migrations/` and are embedded via [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;
