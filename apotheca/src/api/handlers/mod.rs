//! HTTP request handlers for all API endpoints.
//!
//! Each handler is responsible for:
//! - Request validation and deserialization
//! - Authentication and authorization checks
//! - Business logic execution via database repositories
//! - Response serialization
//!
//! # Handler Modules
//!
//! - [`auth`]: Token issuance, refresh, and client registration
//! - [`clients`]: Client record CRUD
//! - [`employees`]: Employee record CRUD
//! - [`roles`]: Employee role CRUD
//! - [`products`]: Product catalog CRUD and product types
//! - [`reports`]: Purchase and stock reporting
//!
//! Handlers return [`crate::errors::Error`] which converts to the
//! appropriate HTTP status code and user-safe message.

pub mod auth;
pub mod clients;
pub mod employees;
pub mod products;
pub mod reports;
pub mod roles;
