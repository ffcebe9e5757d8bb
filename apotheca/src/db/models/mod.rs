//! Database record models matching table schemas.
//!
//! Each entity has three shapes: a `*CreateDBRequest` accepted by
//! `Repository::create`, a `*UpdateDBRequest` whose `Option` fields mean
//! "leave unchanged", and a `*DBResponse` returned by queries. Database
//! models are distinct from the API models in [`crate::api::models`] so the
//! storage and wire representations can evolve independently; conversions
//! live next to the API types.

pub mod clients;
pub mod employees;
pub mod products;
pub mod reports;
pub mod roles;
