//! Database repository for employees.
//!
//! Employee reads join the role table so responses embed the full role;
//! writes accept a role *name* and resolve it to a role row, failing when
//! the name does not exist.

use crate::db::{
    errors::{DbError, Result},
    handlers::{
        repository::{self, Repository},
        roles::Roles,
    },
    models::{
        employees::{EmployeeCreateDBRequest, EmployeeDBResponse, EmployeeUpdateDBRequest},
        roles::RoleDBResponse,
    },
};
use crate::types::{EmployeeId, RoleId, abbrev_uuid};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, QueryBuilder};
use tracing::instrument;

/// Filter for listing employees
#[derive(Debug, Clone)]
pub struct EmployeeFilter {
    pub skip: i64,
    pub limit: i64,
    pub search: Option<String>, // Case-insensitive substring search on name and email
}

impl EmployeeFilter {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit, search: None }
    }

    pub fn with_search(mut self, search: String) -> Self {
        self.search = Some(search);
        self
    }
}

const EMPLOYEE_WITH_ROLE: &str = r#"
    SELECT e.id, e.first_name, e.last_name, e.phone, e.email, e.password_hash,
           e.created_at, e.updated_at,
           r.id AS role_id, r.name AS role_name, r.description AS role_description
    FROM employee e
    JOIN role r ON e.role_id = r.id
"#;

// Database entity model, role columns joined in
#[derive(Debug, Clone, FromRow)]
struct EmployeeWithRole {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub role_id: RoleId,
    pub role_name: String,
    pub role_description: Option<String>,
}

pub struct Employees<'c> {
    db: &'c mut PgConnection,
}

impl From<EmployeeWithRole> for EmployeeDBResponse {
    fn from(row: EmployeeWithRole) -> Self {
        Self {
            id: row.id,
            role: RoleDBResponse {
                id: row.role_id,
                name: row.role_name,
                description: row.role_description,
            },
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Employees<'c> {
    type CreateRequest = EmployeeCreateDBRequest;
    type UpdateRequest = EmployeeUpdateDBRequest;
    type Response = EmployeeDBResponse;
    type Id = EmployeeId;
    type Filter = EmployeeFilter;

    #[instrument(skip(self, request), fields(email = %request.email, role = %request.role), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let role = self.resolve_role(&request.role).await?;

        let employee = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employee (role_id, first_name, last_name, phone, email, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(role.id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.phone)
        .bind(&request.email)
        .bind(&request.password_hash)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(employee.with_role(role))
    }

    #[instrument(skip(self), fields(employee_id = %abbrev_uuid(&id)), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let mut query = QueryBuilder::new(EMPLOYEE_WITH_ROLE);
        query.push(" WHERE e.id = ");
        query.push_bind(id);

        let employee = query.build_query_as::<EmployeeWithRole>().fetch_optional(&mut *self.db).await?;

        Ok(employee.map(EmployeeDBResponse::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()), err)]
    async fn get_bulk(&mut self, ids: Vec<EmployeeId>) -> Result<std::collections::HashMap<EmployeeId, EmployeeDBResponse>> {
        if ids.is_empty() {
            return Ok(std::collections::HashMap::new());
        }

        let mut query = QueryBuilder::new(EMPLOYEE_WITH_ROLE);
        query.push(" WHERE e.id = ANY(");
        query.push_bind(&ids);
        query.push(")");

        let employees = query.build_query_as::<EmployeeWithRole>().fetch_all(&mut *self.db).await?;

        let mut result = std::collections::HashMap::new();
        for employee in employees {
            result.insert(employee.id, EmployeeDBResponse::from(employee));
        }

        Ok(result)
    }

    #[instrument(skip(self, filter), fields(limit = filter.limit, skip = filter.skip), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let mut query = QueryBuilder::new(EMPLOYEE_WITH_ROLE);
        query.push(" WHERE 1=1");

        // Case-insensitive substring match on name or email
        if let Some(ref search) = filter.search {
            let search_pattern = format!("%{}%", search.to_lowercase());
            query.push(" AND (LOWER(e.first_name) LIKE ");
            query.push_bind(search_pattern.clone());
            query.push(" OR LOWER(e.last_name) LIKE ");
            query.push_bind(search_pattern.clone());
            query.push(" OR LOWER(e.email) LIKE ");
            query.push_bind(search_pattern);
            query.push(")");
        }

        query.push(" ORDER BY e.created_at DESC LIMIT ");
        query.push_bind(filter.limit);
        query.push(" OFFSET ");
        query.push_bind(filter.skip);

        let employees = query.build_query_as::<EmployeeWithRole>().fetch_all(&mut *self.db).await?;

        Ok(employees.into_iter().map(EmployeeDBResponse::from).collect())
    }

    #[instrument(skip(self), fields(employee_id = %abbrev_uuid(&id)), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        repository::delete_from(self.db, "employee", id).await
    }

    #[instrument(skip(self, request), fields(employee_id = %abbrev_uuid(&id)), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Resolve the new role first so a bad role name fails before the row is touched
        let role_id = match &request.role {
            Some(role_name) => Some(self.resolve_role(role_name).await?.id),
            None => None,
        };

        // Atomic update with conditional field updates
        let employee = sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employee SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                phone = COALESCE($4, phone),
                role_id = COALESCE($5, role_id),
                password_hash = COALESCE($6, password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.phone)
        .bind(role_id)
        .bind(&request.password_hash)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        // Fetch the (possibly unchanged) role for the response
        let role = {
            let mut roles = Roles::new(&mut *self.db);
            roles.get_by_id(employee.role_id).await?.ok_or(DbError::NotFound)?
        };

        Ok(employee.with_role(role))
    }
}

// Bare employee row, used where the role is resolved separately
#[derive(Debug, Clone, FromRow)]
struct EmployeeRow {
    pub id: EmployeeId,
    pub role_id: RoleId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmployeeRow {
    fn with_role(self, role: RoleDBResponse) -> EmployeeDBResponse {
        EmployeeDBResponse {
            id: self.id,
            role,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<'c> Employees<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Lookup failures are logged and reported as "no row", matching the
    /// other by-unique-field lookups.
    #[instrument(skip(self, email))]
    pub async fn get_by_email(&mut self, email: &str) -> Result<Option<EmployeeDBResponse>> {
        let mut query = QueryBuilder::new(EMPLOYEE_WITH_ROLE);
        query.push(" WHERE e.email = ");
        query.push_bind(email.to_string());

        let employee = match query.build_query_as::<EmployeeWithRole>().fetch_optional(&mut *self.db).await {
            Ok(row) => row,
            Err(e) => {
                tracing::error!("Lookup on employee.email failed: {e}");
                None
            }
        };

        Ok(employee.map(EmployeeDBResponse::from))
    }

    /// Look up a role by name, failing with a reference error when it does not exist
    async fn resolve_role(&mut self, role_name: &str) -> Result<RoleDBResponse> {
        let mut roles = Roles::new(&mut *self.db);
        roles.get_by_name(role_name).await?.ok_or_else(|| DbError::ForeignKeyViolation {
            constraint: None,
            table: Some("role".to_string()),
            message: format!("role '{role_name}' does not exist"),
        })
    }
}
