//! Repository implementations for database access.
//!
//! This module provides repository structs for each major entity in the system.
//! Repositories follow a consistent pattern and implement the [`Repository`] trait.
//!
//! # Design Pattern
//!
//! Each repository:
//! - Wraps a SQLx connection or transaction
//! - Provides strongly-typed CRUD operations
//! - Handles query construction and parameter binding
//! - Returns record types from [`crate::db::models`]
//!
//! # Available Repositories
//!
//! - [`Clients`]: Client accounts, lookup by email
//! - [`Employees`]: Employee records with their role joined in
//! - [`Roles`]: Employee role definitions, lookup by name
//! - [`Products`]: Product catalog and product types
//! - [`Reports`]: Read-only purchase/stock/statistics queries

pub mod clients;
pub mod employees;
pub mod products;
pub mod reports;
pub mod repository;
pub mod roles;

pub use clients::Clients;
pub use employees::Employees;
pub use products::Products;
pub use reports::Reports;
pub use repository::Repository;
pub use roles::Roles;
