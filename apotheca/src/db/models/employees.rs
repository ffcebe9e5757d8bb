//! Database models for employees.

use crate::db::models::roles::RoleDBResponse;
use crate::types::EmployeeId;
use chrono::{DateTime, Utc};

/// Database request for creating a new employee.
///
/// `role` is the role *name*; the repository resolves it to a role row and
/// fails when no such role exists.
#[derive(Debug, Clone)]
pub struct EmployeeCreateDBRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Database request for updating an employee
///
/// `None` fields are left unchanged. `role`, when set, is a role name and is
/// resolved the same way as on create.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdateDBRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub password_hash: Option<String>,
}

/// Database response for an employee, role embedded
#[derive(Debug, Clone)]
pub struct EmployeeDBResponse {
    pub id: EmployeeId,
    pub role: RoleDBResponse,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
