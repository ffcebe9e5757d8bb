//! API request and response data models.
//!
//! These models define the public API contract and are distinct from the
//! database models in [`crate::db::models`], so the wire format and storage
//! format can evolve independently. All models are annotated with `utoipa`
//! for the generated OpenAPI document; responses never carry password
//! hashes.

pub mod auth;
pub mod clients;
pub mod employees;
pub mod pagination;
pub mod products;
pub mod reports;
pub mod roles;
