use crate::api::models::auth::CurrentUser;
use crate::api::models::reports::{PurchaseInfo, PurchaseStatistics, PurchasesQuery, StockInfo, StockOverviewQuery, StockQuery};
use crate::auth::permissions::require_staff;
use crate::db::handlers::{Reports, reports::PriceFilter};
use crate::errors::{Error, Result};
use crate::types::{Operation, Resource};
use crate::AppState;
use axum::{
    Json,
    extract::{Query, State},
};

#[utoipa::path(
    get,
    path = "/reports/purchases",
    tag = "reports",
    summary = "Purchase report",
    params(PurchasesQuery),
    responses(
        (status = 200, description = "Purchased lines with order and pharmacy context", body = Vec<PurchaseInfo>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn purchase_report(
    State(state): State<AppState>,
    Query(query): Query<PurchasesQuery>,
    user: CurrentUser,
) -> Result<Json<Vec<PurchaseInfo>>> {
    require_staff(&user, Resource::Reports, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Reports::new(&mut conn);

    let purchases = repo.purchase_info(query.product_id).await?;

    Ok(Json(purchases.into_iter().map(PurchaseInfo::from).collect()))
}

#[utoipa::path(
    get,
    path = "/reports/stock",
    tag = "reports",
    summary = "Stock report for one product",
    params(StockQuery),
    responses(
        (status = 200, description = "Stock levels per pharmacy for the named product", body = Vec<StockInfo>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn stock_report(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
    user: CurrentUser,
) -> Result<Json<Vec<StockInfo>>> {
    require_staff(&user, Resource::Reports, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Reports::new(&mut conn);

    let stock = repo.stock_for_product(&query.product_name).await?;

    Ok(Json(stock.into_iter().map(StockInfo::from).collect()))
}

#[utoipa::path(
    get,
    path = "/reports/stock/all",
    tag = "reports",
    summary = "Stock overview",
    params(StockOverviewQuery),
    responses(
        (status = 200, description = "Stock levels for every product, optionally bounded by price", body = Vec<StockInfo>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn stock_overview(
    State(state): State<AppState>,
    Query(query): Query<StockOverviewQuery>,
    user: CurrentUser,
) -> Result<Json<Vec<StockInfo>>> {
    require_staff(&user, Resource::Reports, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Reports::new(&mut conn);

    let filter = PriceFilter {
        min_price: query.min_price,
        max_price: query.max_price,
    };

    let stock = repo.stock_overview(&filter).await?;

    Ok(Json(stock.into_iter().map(StockInfo::from).collect()))
}

#[utoipa::path(
    get,
    path = "/reports/statistics",
    tag = "reports",
    summary = "Purchase statistics",
    responses(
        (status = 200, description = "Purchase counts per client and product", body = Vec<PurchaseStatistics>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
    ),
    security(("BearerAuth" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn purchase_statistics(State(state): State<AppState>, user: CurrentUser) -> Result<Json<Vec<PurchaseStatistics>>> {
    require_staff(&user, Resource::Reports, Operation::ReadAll)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Reports::new(&mut conn);

    let statistics = repo.purchase_statistics().await?;

    Ok(Json(statistics.into_iter().map(PurchaseStatistics::from).collect()))
}
