//! API request/response models for employees.

use super::pagination::Pagination;
use super::roles::RoleResponse;
use crate::db::models::employees::EmployeeDBResponse;
use crate::types::EmployeeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Employee creation request. `role` is the role name and must reference an
/// existing role.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Partial employee update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

/// Employee record with its role embedded (never includes the password hash)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: EmployeeId,
    pub role: RoleResponse,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EmployeeDBResponse> for EmployeeResponse {
    fn from(db: EmployeeDBResponse) -> Self {
        Self {
            id: db.id,
            role: RoleResponse::from(db.role),
            first_name: db.first_name,
            last_name: db.last_name,
            phone: db.phone,
            email: db.email,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Query parameters for listing employees
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListEmployeesQuery {
    /// Pagination parameters
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: Pagination,

    /// Filter by name or email (case-insensitive substring match)
    pub search: Option<String>,
}
