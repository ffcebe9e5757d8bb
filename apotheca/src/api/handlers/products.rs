use crate::api::models::auth::CurrentUser;
use crate::api::models::products::{
    ListProductsQuery, ProductCreate, ProductInfoResponse, ProductResponse, ProductTypeResponse, ProductUpdate,
};
use crate::auth::permissions::require_staff;
use crate::db::handlers::{Products, Repository, products::ProductFilter};
use crate::db::models::products::{ProductCreateDBRequest, ProductUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::{Operation, ProductId, Resource};
use crate::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    summary = "List products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "List of products with resolved references", body = Vec<ProductInfoResponse>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
    _user: CurrentUser,
) -> Result<Json<Vec<ProductInfoResponse>>> {
    // Any authenticated user (clients included) may browse the catalog
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Products::new(&mut conn);

    let (skip, limit) = query.pagination.params();
    let filter = ProductFilter {
        skip,
        limit,
        search: query.search,
        min_price: query.min_price,
        max_price: query.max_price,
    };

    let products = repo.list_info(&filter).await?;

    Ok(Json(products.into_iter().map(ProductInfoResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    summary = "Create product",
    request_body = ProductCreate,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Invalid request or unknown reference"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(create): Json<ProductCreate>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    require_staff(&user, Resource::Products, Operation::CreateAll)?;
    create.validate()?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Products::new(&mut conn);

    let request = ProductCreateDBRequest {
        description_id: create.description_id,
        name: create.name,
        price: create.price,
        product_type_id: create.product_type_id,
        photo: create.photo,
        manufacturer_id: create.manufacturer_id,
        analog_code: create.analog_code,
    };

    let product = repo.create(&request).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    summary = "Get product",
    params(("id" = uuid::Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details with resolved references", body = ProductInfoResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    _user: CurrentUser,
) -> Result<Json<ProductInfoResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Products::new(&mut conn);

    match repo.get_info_by_id(id).await? {
        Some(product) => Ok(Json(ProductInfoResponse::from(product))),
        None => Err(Error::NotFound {
            resource: "Product".to_string(),
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = "products",
    summary = "Update product",
    request_body = ProductUpdate,
    params(("id" = uuid::Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, description = "Invalid request or unknown reference"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    user: CurrentUser,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<ProductResponse>> {
    require_staff(&user, Resource::Products, Operation::UpdateAll)?;
    update.validate()?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Products::new(&mut conn);

    let request = ProductUpdateDBRequest {
        description_id: update.description_id,
        name: update.name,
        price: update.price,
        product_type_id: update.product_type_id,
        photo: update.photo,
        manufacturer_id: update.manufacturer_id,
        analog_code: update.analog_code,
    };

    let product = repo.update(id, &request).await?;
    Ok(Json(ProductResponse::from(product)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    summary = "Delete product",
    params(("id" = uuid::Uuid, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<ProductId>, user: CurrentUser) -> Result<StatusCode> {
    require_staff(&user, Resource::Products, Operation::DeleteAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Products::new(&mut conn);

    if repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound {
            resource: "Product".to_string(),
            id: id.to_string(),
        })
    }
}

#[utoipa::path(
    get,
    path = "/product-types",
    tag = "products",
    summary = "List product types",
    responses(
        (status = 200, description = "List of product types", body = Vec<ProductTypeResponse>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_product_types(State(state): State<AppState>, _user: CurrentUser) -> Result<Json<Vec<ProductTypeResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Products::new(&mut conn);

    let types = repo.list_product_types().await?;

    Ok(Json(types.into_iter().map(ProductTypeResponse::from).collect()))
}
