//! API response models for purchase and stock reporting.

use crate::db::models::reports::{PurchaseInfoDBResponse, PurchaseStatisticsDBResponse, StockInfoDBResponse};
use crate::types::{OrderId, PharmacyId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One purchased line with its order, pharmacy, and catalog context
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PurchaseInfo {
    #[schema(value_type = String, format = "uuid")]
    pub order_id: OrderId,
    pub order_date: DateTime<Utc>,
    pub product_name: String,
    pub product_quantity: i32,
    pub street: String,
    pub building: i32,
    pub client_name: String,
    pub manufacturer_name: String,
    pub product_type: String,
}

/// Stock level for a product at one pharmacy; stock fields are absent for
/// products not stocked anywhere
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StockInfo {
    #[schema(value_type = String, format = "uuid")]
    pub id: ProductId,
    pub product_name: String,
    pub product_type: String,
    pub in_stock: Option<i32>,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub pharmacy_id: Option<PharmacyId>,
    pub pharmacy_street: Option<String>,
    pub pharmacy_building: Option<i32>,
    pub manufacturer_name: String,
    pub manufacturer_country: String,
}

/// Purchase count for one client/product pair
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PurchaseStatistics {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub product_name: String,
    pub purchase_count: i64,
}

impl From<PurchaseInfoDBResponse> for PurchaseInfo {
    fn from(db: PurchaseInfoDBResponse) -> Self {
        Self {
            order_id: db.order_id,
            order_date: db.order_date,
            product_name: db.product_name,
            product_quantity: db.product_quantity,
            street: db.street,
            building: db.building,
            client_name: db.client_name,
            manufacturer_name: db.manufacturer_name,
            product_type: db.product_type,
        }
    }
}

impl From<StockInfoDBResponse> for StockInfo {
    fn from(db: StockInfoDBResponse) -> Self {
        Self {
            id: db.id,
            product_name: db.product_name,
            product_type: db.product_type,
            in_stock: db.in_stock,
            price: db.price,
            pharmacy_id: db.pharmacy_id,
            pharmacy_street: db.pharmacy_street,
            pharmacy_building: db.pharmacy_building,
            manufacturer_name: db.manufacturer_name,
            manufacturer_country: db.manufacturer_country,
        }
    }
}

impl From<PurchaseStatisticsDBResponse> for PurchaseStatistics {
    fn from(db: PurchaseStatisticsDBResponse) -> Self {
        Self {
            first_name: db.first_name,
            last_name: db.last_name,
            email: db.email,
            product_name: db.product_name,
            purchase_count: db.purchase_count,
        }
    }
}

/// Query parameters for the purchases report
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PurchasesQuery {
    /// Restrict the report to one product
    #[param(value_type = Option<String>, format = "uuid")]
    #[schema(value_type = Option<String>, format = "uuid")]
    pub product_id: Option<ProductId>,
}

/// Query parameters for the per-product stock report
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct StockQuery {
    /// Exact product name to report on
    pub product_name: String,
}

/// Query parameters for the stock overview
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct StockOverviewQuery {
    /// Lowest price to include
    #[param(value_type = Option<f64>)]
    pub min_price: Option<Decimal>,

    /// Highest price to include
    #[param(value_type = Option<f64>)]
    pub max_price: Option<Decimal>,
}
