//! Database queries for purchase and stock reporting.
//!
//! Read-only aggregate queries over the purchasing tables. Unlike the entity
//! repositories these never mutate state, so [`Reports`] exposes plain query
//! methods instead of the [`crate::db::handlers::Repository`] trait.

use crate::db::{
    errors::Result,
    models::reports::{PurchaseInfoDBResponse, PurchaseStatisticsDBResponse, StockInfoDBResponse},
};
use crate::types::{OrderId, PharmacyId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, QueryBuilder};
use tracing::instrument;

/// Optional price bounds for the stock overview
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceFilter {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

#[derive(Debug, FromRow)]
struct PurchaseInfoRow {
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

#[derive(Debug, FromRow)]
struct StockInfoRow {
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

#[derive(Debug, FromRow)]
struct PurchaseStatisticsRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub product_name: String,
    pub purchase_count: i64,
}

const PURCHASE_INFO: &str = r#"
    SELECT o.id AS order_id, o.order_date, p.name AS product_name, oi.quantity AS product_quantity,
           ph.street, ph.building, c.first_name || ' ' || c.last_name AS client_name,
           m.name AS manufacturer_name, t.name AS product_type
    FROM purchase_order o
    JOIN order_item oi ON oi.order_id = o.id
    JOIN product p ON p.id = oi.product_id
    JOIN pharmacy ph ON ph.id = o.pharmacy_id
    JOIN client c ON c.id = o.client_id
    JOIN manufacturer m ON m.id = p.manufacturer_id
    JOIN product_type t ON t.id = p.product_type_id
"#;

// LEFT JOINs keep products with no stock rows in the result
const STOCK_INFO: &str = r#"
    SELECT p.id, p.name AS product_name, t.name AS product_type, s.in_stock, p.price,
           ph.id AS pharmacy_id, ph.street AS pharmacy_street, ph.building AS pharmacy_building,
           m.name AS manufacturer_name, m.country AS manufacturer_country
    FROM product p
    JOIN product_type t ON t.id = p.product_type_id
    JOIN manufacturer m ON m.id = p.manufacturer_id
    LEFT JOIN stock s ON s.product_id = p.id
    LEFT JOIN pharmacy ph ON ph.id = s.pharmacy_id
"#;

pub struct Reports<'c> {
    db: &'c mut PgConnection,
}

impl From<PurchaseInfoRow> for PurchaseInfoDBResponse {
    fn from(row: PurchaseInfoRow) -> Self {
        Self {
            order_id: row.order_id,
            order_date: row.order_date,
            product_name: row.product_name,
            product_quantity: row.product_quantity,
            street: row.street,
            building: row.building,
            client_name: row.client_name,
            manufacturer_name: row.manufacturer_name,
            product_type: row.product_type,
        }
    }
}

impl From<StockInfoRow> for StockInfoDBResponse {
    fn from(row: StockInfoRow) -> Self {
        Self {
            id: row.id,
            product_name: row.product_name,
            product_type: row.product_type,
            in_stock: row.in_stock,
            price: row.price,
            pharmacy_id: row.pharmacy_id,
            pharmacy_street: row.pharmacy_street,
            pharmacy_building: row.pharmacy_building,
            manufacturer_name: row.manufacturer_name,
            manufacturer_country: row.manufacturer_country,
        }
    }
}

impl From<PurchaseStatisticsRow> for PurchaseStatisticsDBResponse {
    fn from(row: PurchaseStatisticsRow) -> Self {
        Self {
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            product_name: row.product_name,
            purchase_count: row.purchase_count,
        }
    }
}

impl<'c> Reports<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Purchased lines with order, pharmacy, and catalog context, newest first.
    /// Optionally restricted to one product.
    #[instrument(skip(self), err)]
    pub async fn purchase_info(&mut self, product_id: Option<ProductId>) -> Result<Vec<PurchaseInfoDBResponse>> {
        let mut query = QueryBuilder::new(PURCHASE_INFO);

        if let Some(product_id) = product_id {
            query.push(" WHERE p.id = ");
            query.push_bind(product_id);
        }

        query.push(" ORDER BY o.order_date DESC");

        let rows = query.build_query_as::<PurchaseInfoRow>().fetch_all(&mut *self.db).await?;

        Ok(rows.into_iter().map(PurchaseInfoDBResponse::from).collect())
    }

    /// Stock levels per pharmacy for a named product
    #[instrument(skip(self), err)]
    pub async fn stock_for_product(&mut self, product_name: &str) -> Result<Vec<StockInfoDBResponse>> {
        let mut query = QueryBuilder::new(STOCK_INFO);
        query.push(" WHERE p.name = ");
        query.push_bind(product_name.to_string());
        query.push(" ORDER BY ph.street");

        let rows = query.build_query_as::<StockInfoRow>().fetch_all(&mut *self.db).await?;

        Ok(rows.into_iter().map(StockInfoDBResponse::from).collect())
    }

    /// Stock levels for every product, optionally bounded by price
    #[instrument(skip(self), err)]
    pub async fn stock_overview(&mut self, filter: &PriceFilter) -> Result<Vec<StockInfoDBResponse>> {
        let mut query = QueryBuilder::new(STOCK_INFO);
        query.push(" WHERE 1=1");

        if let Some(min_price) = filter.min_price {
            query.push(" AND p.price >= ");
            query.push_bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            query.push(" AND p.price <= ");
            query.push_bind(max_price);
        }

        query.push(" ORDER BY p.name");

        let rows = query.build_query_as::<StockInfoRow>().fetch_all(&mut *self.db).await?;

        Ok(rows.into_iter().map(StockInfoDBResponse::from).collect())
    }

    /// Purchase counts per client and product, most purchased first
    #[instrument(skip(self), err)]
    pub async fn purchase_statistics(&mut self) -> Result<Vec<PurchaseStatisticsDBResponse>> {
        let rows = sqlx::query_as::<_, PurchaseStatisticsRow>(
            r#"
            SELECT c.first_name, c.last_name, c.email, p.name AS product_name, COUNT(*) AS purchase_count
            FROM purchase_order o
            JOIN order_item oi ON oi.order_id = o.id
            JOIN product p ON p.id = oi.product_id
            JOIN client c ON c.id = o.client_id
            GROUP BY c.id, c.first_name, c.last_name, c.email, p.name
            ORDER BY purchase_count DESC, p.name
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows.into_iter().map(PurchaseStatisticsDBResponse::from).collect())
    }
}
