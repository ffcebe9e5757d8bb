use crate::api::models::auth::CurrentUser;
use crate::api::models::roles::{RoleCreate, RoleResponse, RoleUpdate};
use crate::auth::permissions::{require_admin, require_staff};
use crate::db::handlers::{Repository, Roles, roles::RoleFilter};
use crate::db::models::roles::{RoleCreateDBRequest, RoleUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::{Operation, Resource, RoleId};
use crate::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for listing roles
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListRolesQuery {
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: crate::api::models::pagination::Pagination,
}

#[utoipa::path(
    get,
    path = "/roles",
    tag = "roles",
    summary = "List roles",
    params(ListRolesQuery),
    responses(
        (status = 200, description = "List of roles", body = Vec<RoleResponse>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_roles(
    State(state): State<AppState>,
    Query(query): Query<ListRolesQuery>,
    user: CurrentUser,
) -> Result<Json<Vec<RoleResponse>>> {
    require_staff(&user, Resource::Roles, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Roles::new(&mut conn);

    let (skip, limit) = query.pagination.params();
    let roles = repo.list(&RoleFilter::new(skip, limit)).await?;

    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/roles",
    tag = "roles",
    summary = "Create role",
    request_body = RoleCreate,
    responses(
        (status = 201, description = "Role created successfully", body = RoleResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Role name already in use"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_role(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(create): Json<RoleCreate>,
) -> Result<(StatusCode, Json<RoleResponse>)> {
    require_admin(&user, Resource::Roles, Operation::CreateAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Roles::new(&mut conn);

    let request = RoleCreateDBRequest {
        name: create.name,
        description: create.description,
    };

    let role = repo.create(&request).await?;
    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

#[utoipa::path(
    get,
    path = "/roles/{id}",
    tag = "roles",
    summary = "Get role",
    params(("id" = uuid::Uuid, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role details", body = RoleResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Role not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_role(State(state): State<AppState>, Path(id): Path<RoleId>, user: CurrentUser) -> Result<Json<RoleResponse>> {
    require_staff(&user, Resource::Roles, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Roles::new(&mut conn);

    match repo.get_by_id(id).await? {
        Some(role) => Ok(Json(RoleResponse::from(role))),
        None => Err(Error::NotFound {
            resource: "Role".to_string(),
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    patch,
    path = "/roles/{id}",
    tag = "roles",
    summary = "Update role",
    request_body = RoleUpdate,
    params(("id" = uuid::Uuid, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role updated successfully", body = RoleResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Role not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<RoleId>,
    user: CurrentUser,
    Json(update): Json<RoleUpdate>,
) -> Result<Json<RoleResponse>> {
    require_admin(&user, Resource::Roles, Operation::UpdateAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Roles::new(&mut conn);

    let request = RoleUpdateDBRequest {
        name: update.name,
        description: update.description,
    };

    let role = repo.update(id, &request).await?;
    Ok(Json(RoleResponse::from(role)))
}

#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = "roles",
    summary = "Delete role",
    params(("id" = uuid::Uuid, Path, description = "Role ID")),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden or protected role"),
        (status = 404, description = "Role not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_role(State(state): State<AppState>, Path(id): Path<RoleId>, user: CurrentUser) -> Result<StatusCode> {
    require_admin(&user, Resource::Roles, Operation::DeleteAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Roles::new(&mut conn);

    if repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound {
            resource: "Role".to_string(),
            id: id.to_string(),
        })
    }
}
