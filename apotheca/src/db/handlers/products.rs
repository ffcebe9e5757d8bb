//! Database repository for the product catalog.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::{self, Repository},
    models::products::{ProductCreateDBRequest, ProductDBResponse, ProductInfoDBResponse, ProductTypeDBResponse, ProductUpdateDBRequest},
};
use crate::types::{ProductId, abbrev_uuid};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

/// Filter for listing products
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub skip: i64,
    pub limit: i64,
    pub search: Option<String>, // Case-insensitive substring search on name
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl ProductFilter {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip,
            limit,
            ..Default::default()
        }
    }
}

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Product {
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

// Product row with reference tables resolved to display values
#[derive(Debug, Clone, FromRow)]
struct ProductInfo {
    pub id: ProductId,
    pub description: String,
    pub name: String,
    pub price: Decimal,
    pub product_type: String,
    pub photo: Option<String>,
    pub manufacturer: String,
    pub analog_code: Option<i32>,
}

#[derive(Debug, Clone, FromRow)]
struct ProductType {
    pub id: Uuid,
    pub name: String,
}

const PRODUCT_INFO: &str = r#"
    SELECT p.id, d.content AS description, p.name, p.price, t.name AS product_type,
           p.photo, m.name AS manufacturer, p.analog_code
    FROM product p
    JOIN description d ON p.description_id = d.id
    JOIN product_type t ON p.product_type_id = t.id
    JOIN manufacturer m ON p.manufacturer_id = m.id
"#;

pub struct Products<'c> {
    db: &'c mut PgConnection,
}

impl From<Product> for ProductDBResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            description_id: product.description_id,
            name: product.name,
            price: product.price,
            product_type_id: product.product_type_id,
            photo: product.photo,
            manufacturer_id: product.manufacturer_id,
            analog_code: product.analog_code,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<ProductInfo> for ProductInfoDBResponse {
    fn from(info: ProductInfo) -> Self {
        Self {
            id: info.id,
            description: info.description,
            name: info.name,
            price: info.price,
            product_type: info.product_type,
            photo: info.photo,
            manufacturer: info.manufacturer,
            analog_code: info.analog_code,
        }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Products<'c> {
    type CreateRequest = ProductCreateDBRequest;
    type UpdateRequest = ProductUpdateDBRequest;
    type Response = ProductDBResponse;
    type Id = ProductId;
    type Filter = ProductFilter;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO product (description_id, name, price, product_type_id, photo, manufacturer_id, analog_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(request.description_id)
        .bind(&request.name)
        .bind(request.price)
        .bind(request.product_type_id)
        .bind(&request.photo)
        .bind(request.manufacturer_id)
        .bind(request.analog_code)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(ProductDBResponse::from(product))
    }

    #[instrument(skip(self), fields(product_id = %abbrev_uuid(&id)), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM product WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(product.map(ProductDBResponse::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()), err)]
    async fn get_bulk(&mut self, ids: Vec<ProductId>) -> Result<std::collections::HashMap<ProductId, ProductDBResponse>> {
        if ids.is_empty() {
            return Ok(std::collections::HashMap::new());
        }

        let products = sqlx::query_as::<_, Product>("SELECT * FROM product WHERE id = ANY($1)")
            .bind(&ids)
            .fetch_all(&mut *self.db)
            .await?;

        let mut result = std::collections::HashMap::new();
        for product in products {
            result.insert(product.id, ProductDBResponse::from(product));
        }

        Ok(result)
    }

    #[instrument(skip(self, filter), fields(limit = filter.limit, skip = filter.skip), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let mut query = QueryBuilder::new("SELECT * FROM product WHERE 1=1");
        push_product_filters(&mut query, filter, "");

        query.push(" ORDER BY name LIMIT ");
        query.push_bind(filter.limit);
        query.push(" OFFSET ");
        query.push_bind(filter.skip);

        let products = query.build_query_as::<Product>().fetch_all(&mut *self.db).await?;

        Ok(products.into_iter().map(ProductDBResponse::from).collect())
    }

    #[instrument(skip(self), fields(product_id = %abbrev_uuid(&id)), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        repository::delete_from(self.db, "product", id).await
    }

    #[instrument(skip(self, request), fields(product_id = %abbrev_uuid(&id)), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Atomic update with conditional field updates
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE product SET
                description_id = COALESCE($2, description_id),
                name = COALESCE($3, name),
                price = COALESCE($4, price),
                product_type_id = COALESCE($5, product_type_id),
                photo = COALESCE($6, photo),
                manufacturer_id = COALESCE($7, manufacturer_id),
                analog_code = COALESCE($8, analog_code),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.description_id)
        .bind(&request.name)
        .bind(request.price)
        .bind(request.product_type_id)
        .bind(&request.photo)
        .bind(request.manufacturer_id)
        .bind(request.analog_code)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(ProductDBResponse::from(product))
    }
}

/// Append shared product filter clauses. `prefix` qualifies column names when
/// the query joins other tables (e.g. "p.").
fn push_product_filters(query: &mut QueryBuilder<'_, sqlx::Postgres>, filter: &ProductFilter, prefix: &str) {
    if let Some(ref search) = filter.search {
        let search_pattern = format!("%{}%", search.to_lowercase());
        query.push(format!(" AND LOWER({prefix}name) LIKE "));
        query.push_bind(search_pattern);
    }
    if let Some(min_price) = filter.min_price {
        query.push(format!(" AND {prefix}price >= "));
        query.push_bind(min_price);
    }
    if let Some(max_price) = filter.max_price {
        query.push(format!(" AND {prefix}price <= "));
        query.push_bind(max_price);
    }
}

impl<'c> Products<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// List products with reference rows resolved to their display values
    #[instrument(skip(self, filter), fields(limit = filter.limit, skip = filter.skip), err)]
    pub async fn list_info(&mut self, filter: &ProductFilter) -> Result<Vec<ProductInfoDBResponse>> {
        let mut query = QueryBuilder::new(PRODUCT_INFO);
        query.push(" WHERE 1=1");
        push_product_filters(&mut query, filter, "p.");

        query.push(" ORDER BY p.name LIMIT ");
        query.push_bind(filter.limit);
        query.push(" OFFSET ");
        query.push_bind(filter.skip);

        let products = query.build_query_as::<ProductInfo>().fetch_all(&mut *self.db).await?;

        Ok(products.into_iter().map(ProductInfoDBResponse::from).collect())
    }

    /// Get one product with reference rows resolved to their display values
    #[instrument(skip(self), fields(product_id = %abbrev_uuid(&id)), err)]
    pub async fn get_info_by_id(&mut self, id: ProductId) -> Result<Option<ProductInfoDBResponse>> {
        let mut query = QueryBuilder::new(PRODUCT_INFO);
        query.push(" WHERE p.id = ");
        query.push_bind(id);

        let product = query.build_query_as::<ProductInfo>().fetch_optional(&mut *self.db).await?;

        Ok(product.map(ProductInfoDBResponse::from))
    }

    /// List all product types
    #[instrument(skip(self), err)]
    pub async fn list_product_types(&mut self) -> Result<Vec<ProductTypeDBResponse>> {
        let types = repository::fetch_all_from::<ProductType>(self.db, "product_type", "name").await?;

        Ok(types
            .into_iter()
            .map(|t| ProductTypeDBResponse { id: t.id, name: t.name })
            .collect())
    }
}
