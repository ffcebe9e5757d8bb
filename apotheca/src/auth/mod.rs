//! Authentication and authorization.
//!
//! Authentication is token-based: `/users/token` exchanges email/password
//! credentials for a signed access/refresh token pair, and protected
//! endpoints read the access token from the `Authorization: Bearer` header
//! via the [`current_user`] extractor.
//!
//! Identity is two-sided: a subject is either a client (self-registered via
//! `/users/register`, role "client") or an employee (created by an admin,
//! role taken from the role table). The role travels in the token, so
//! authorization checks in [`permissions`] never hit the database.
//!
//! # Modules
//!
//! - [`current_user`]: Extractor for getting the authenticated user in handlers
//! - [`password`]: Password hashing and verification using Argon2
//! - [`permissions`]: Role checks for staff- and admin-only endpoints
//! - [`token`]: JWT access/refresh token issuance and verification

pub mod current_user;
pub mod password;
pub mod permissions;
pub mod token;
