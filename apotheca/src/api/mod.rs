//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! - **Authentication** (`/users/*`): token issuance, refresh, client registration
//! - **Clients** (`/api/v1/clients/*`): client record management
//! - **Employees** (`/api/v1/employees/*`): employee record management
//! - **Roles** (`/api/v1/roles/*`): employee role management
//! - **Products** (`/api/v1/products/*`, `/api/v1/product-types`): catalog management
//! - **Reports** (`/api/v1/reports/*`): purchase and stock reporting
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`;
//! the rendered documentation is served at `/docs`.

pub mod handlers;
pub mod models;
