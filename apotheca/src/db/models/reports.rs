//! Database models for purchase and stock reporting.

use crate::types::{OrderId, PharmacyId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One purchased line with its order, pharmacy, and catalog context
#[derive(Debug, Clone)]
pub struct PurchaseInfoDBResponse {
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

/// Stock level for a product at one pharmacy.
///
/// Stock and pharmacy columns come from LEFT JOINs, so a product with no
/// stock rows still appears once with those fields unset.
#[derive(Debug, Clone)]
pub struct StockInfoDBResponse {
    pub id: ProductId,
    pub product_name: String,
    pub product_type: String,
    pub in_stock: Option<i32>,
    pub price: Decimal,
    pub pharmacy_id: Option<PharmacyId>,
    pub pharmacy_street: Option<String>,
    pub pharmacy_building: Option<i32>,
    pub manufacturer_name: String,
    pub manufacturer_country: String,
}

/// Purchase count for one client/product pair
#[derive(Debug, Clone)]
pub struct PurchaseStatisticsDBResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub product_name: String,
    pub purchase_count: i64,
}
