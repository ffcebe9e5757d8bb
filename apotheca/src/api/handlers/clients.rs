use crate::api::models::auth::CurrentUser;
use crate::api::models::clients::{ClientCreate, ClientResponse, ClientUpdate, ListClientsQuery};
use crate::api::models::pagination::PaginatedResponse;
use crate::auth::password;
use crate::auth::permissions::require_staff;
use crate::db::handlers::{Clients, Repository, clients::ClientFilter};
use crate::db::models::clients::{ClientCreateDBRequest, ClientUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::{ClientId, Operation, Resource};
use crate::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

/// Hash an optional plaintext password on a blocking thread
pub(crate) async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || password::hash_string(&password))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password hashing task: {e}"),
        })?
}

#[utoipa::path(
    get,
    path = "/clients",
    tag = "clients",
    summary = "List clients",
    params(ListClientsQuery),
    responses(
        (status = 200, description = "Paginated list of clients", body = PaginatedResponse<ClientResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ListClientsQuery>,
    user: CurrentUser,
) -> Result<Json<PaginatedResponse<ClientResponse>>> {
    require_staff(&user, Resource::Clients, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Clients::new(&mut conn);

    let (skip, limit) = query.pagination.params();
    let mut filter = ClientFilter::new(skip, limit);
    if let Some(search) = query.search {
        filter = filter.with_search(search);
    }

    let clients = repo.list(&filter).await?;
    let total_count = repo.count(&filter).await?;

    let data = clients.into_iter().map(ClientResponse::from).collect();
    Ok(Json(PaginatedResponse::new(data, total_count, skip, limit)))
}

#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    summary = "Create client",
    request_body = ClientCreate,
    responses(
        (status = 201, description = "Client created successfully", body = ClientResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Email already in use"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_client(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(create): Json<ClientCreate>,
) -> Result<(StatusCode, Json<ClientResponse>)> {
    require_staff(&user, Resource::Clients, Operation::CreateAll)?;

    let password_hash = hash_password(create.password).await?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Clients::new(&mut conn);

    let request = ClientCreateDBRequest {
        first_name: create.first_name,
        last_name: create.last_name,
        date_of_birth: create.date_of_birth,
        phone: create.phone,
        email: create.email,
        password_hash,
    };

    let client = repo.create(&request).await?;
    Ok((StatusCode::CREATED, Json(ClientResponse::from(client))))
}

#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "clients",
    summary = "Get client",
    params(("id" = uuid::Uuid, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ClientResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Client not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_client(State(state): State<AppState>, Path(id): Path<ClientId>, user: CurrentUser) -> Result<Json<ClientResponse>> {
    require_staff(&user, Resource::Clients, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Clients::new(&mut conn);

    match repo.get_by_id(id).await? {
        Some(client) => Ok(Json(ClientResponse::from(client))),
        None => Err(Error::NotFound {
            resource: "Client".to_string(),
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    patch,
    path = "/clients/{id}",
    tag = "clients",
    summary = "Update client",
    request_body = ClientUpdate,
    params(("id" = uuid::Uuid, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client updated successfully", body = ClientResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Client not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
    user: CurrentUser,
    Json(update): Json<ClientUpdate>,
) -> Result<Json<ClientResponse>> {
    require_staff(&user, Resource::Clients, Operation::UpdateAll)?;

    let password_hash = match update.password {
        Some(password) => Some(hash_password(password).await?),
        None => None,
    };

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Clients::new(&mut conn);

    let request = ClientUpdateDBRequest {
        first_name: update.first_name,
        last_name: update.last_name,
        date_of_birth: update.date_of_birth,
        phone: update.phone,
        password_hash,
    };

    let client = repo.update(id, &request).await?;
    Ok(Json(ClientResponse::from(client)))
}

#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "clients",
    summary = "Delete client",
    params(("id" = uuid::Uuid, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Client not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_client(State(state): State<AppState>, Path(id): Path<ClientId>, user: CurrentUser) -> Result<StatusCode> {
    require_staff(&user, Resource::Clients, Operation::DeleteAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Clients::new(&mut conn);

    if repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound {
            resource: "Client".to_string(),
            id: id.to_string(),
        })
    }
}
