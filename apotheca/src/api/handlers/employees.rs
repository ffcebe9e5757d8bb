use crate::api::handlers::clients::hash_password;
use crate::api::models::auth::CurrentUser;
use crate::api::models::employees::{EmployeeCreate, EmployeeResponse, EmployeeUpdate, ListEmployeesQuery};
use crate::auth::permissions::{require_admin, require_staff};
use crate::db::handlers::{Employees, Repository, employees::EmployeeFilter};
use crate::db::models::employees::{EmployeeCreateDBRequest, EmployeeUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::{EmployeeId, Operation, Resource};
use crate::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    summary = "List employees",
    params(ListEmployeesQuery),
    responses(
        (status = 200, description = "List of employees", body = Vec<EmployeeResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<ListEmployeesQuery>,
    user: CurrentUser,
) -> Result<Json<Vec<EmployeeResponse>>> {
    require_staff(&user, Resource::Employees, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut conn);

    let (skip, limit) = query.pagination.params();
    let mut filter = EmployeeFilter::new(skip, limit);
    if let Some(search) = query.search {
        filter = filter.with_search(search);
    }

    let employees = repo.list(&filter).await?;

    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/employees",
    tag = "employees",
    summary = "Create employee",
    request_body = EmployeeCreate,
    responses(
        (status = 201, description = "Employee created successfully", body = EmployeeResponse),
        (status = 400, description = "Invalid request or unknown role"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Email already in use"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_employee(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(create): Json<EmployeeCreate>,
) -> Result<(StatusCode, Json<EmployeeResponse>)> {
    require_admin(&user, Resource::Employees, Operation::CreateAll)?;

    // Employee passwords follow the same rules as client passwords
    let password_config = &state.config.auth.native.password;
    if create.password.len() < password_config.min_length {
        return Err(Error::BadRequest {
            message: format!("Password must be at least {} characters", password_config.min_length),
        });
    }

    let password_hash = hash_password(create.password).await?;

    // Role resolution and insert share a transaction
    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut tx);

    let request = EmployeeCreateDBRequest {
        first_name: create.first_name,
        last_name: create.last_name,
        phone: create.phone,
        email: create.email,
        password_hash,
        role: create.role,
    };

    let employee = repo.create(&request).await?;
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Get employee",
    params(("id" = uuid::Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = EmployeeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_employee(State(state): State<AppState>, Path(id): Path<EmployeeId>, user: CurrentUser) -> Result<Json<EmployeeResponse>> {
    require_staff(&user, Resource::Employees, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut conn);

    match repo.get_by_id(id).await? {
        Some(employee) => Ok(Json(EmployeeResponse::from(employee))),
        None => Err(Error::NotFound {
            resource: "Employee".to_string(),
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    patch,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Update employee",
    request_body = EmployeeUpdate,
    params(("id" = uuid::Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee updated successfully", body = EmployeeResponse),
        (status = 400, description = "Invalid request or unknown role"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    user: CurrentUser,
    Json(update): Json<EmployeeUpdate>,
) -> Result<Json<EmployeeResponse>> {
    require_admin(&user, Resource::Employees, Operation::UpdateAll)?;

    let password_hash = match update.password {
        Some(password) => Some(hash_password(password).await?),
        None => None,
    };

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut tx);

    let request = EmployeeUpdateDBRequest {
        first_name: update.first_name,
        last_name: update.last_name,
        phone: update.phone,
        role: update.role,
        password_hash,
    };

    let employee = repo.update(id, &request).await?;
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(Json(EmployeeResponse::from(employee)))
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tag = "employees",
    summary = "Delete employee",
    params(("id" = uuid::Uuid, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_employee(State(state): State<AppState>, Path(id): Path<EmployeeId>, user: CurrentUser) -> Result<StatusCode> {
    require_admin(&user, Resource::Employees, Operation::DeleteAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Employees::new(&mut conn);

    if repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound {
            resource: "Employee".to_string(),
            id: id.to_string(),
        })
    }
}
