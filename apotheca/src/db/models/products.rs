//! Database models for the product catalog.

use crate::types::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Database request for creating a new product
#[derive(Debug, Clone)]
pub struct ProductCreateDBRequest {
    pub description_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub product_type_id: Uuid,
    pub photo: Option<String>,
    pub manufacturer_id: Uuid,
    pub analog_code: Option<i32>,
}

/// Database request for updating a product
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdateDBRequest {
    pub description_id: Option<Uuid>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub product_type_id: Option<Uuid>,
    pub photo: Option<String>,
    pub manufacturer_id: Option<Uuid>,
    pub analog_code: Option<i32>,
}

/// Database response for a product row (reference ids, not joined)
#[derive(Debug, Clone)]
pub struct ProductDBResponse {
    pub id: ProductId,
    pub description_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub product_type_id: Uuid,
    pub photo: Option<String>,
    pub manufacturer_id: Uuid,
    pub analog_code: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database response for a product with reference rows resolved to their
/// display values (description text, type name, manufacturer name)
#[derive(Debug, Clone)]
pub struct ProductInfoDBResponse {
    pub id: ProductId,
    pub description: String,
    pub name: String,
    pub price: Decimal,
    pub product_type: String,
    pub photo: Option<String>,
    pub manufacturer: String,
    pub analog_code: Option<i32>,
}

/// Database response for a product type
#[derive(Debug, Clone)]
pub struct ProductTypeDBResponse {
    pub id: Uuid,
    pub name: String,
}
