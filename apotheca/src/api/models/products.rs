//! API request/response models for the product catalog.

use super::pagination::Pagination;
use crate::db::models::products::{ProductDBResponse, ProductInfoDBResponse, ProductTypeDBResponse};
use crate::errors::Error;
use crate::types::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Product creation request. Reference ids must point at existing
/// description/type/manufacturer rows.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductCreate {
    #[schema(value_type = String, format = "uuid")]
    pub description_id: Uuid,
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[schema(value_type = String, format = "uuid")]
    pub product_type_id: Uuid,
    /// http(s) URL of a product photo (jpg/jpeg/png/gif)
    pub photo: Option<String>,
    #[schema(value_type = String, format = "uuid")]
    pub manufacturer_id: Uuid,
    /// Four-digit analog lookup code
    pub analog_code: Option<i32>,
}

impl ProductCreate {
    /// Validate field formats (photo URL, analog code, price sign)
    pub fn validate(&self) -> Result<(), Error> {
        validate_price(self.price)?;
        if let Some(ref photo) = self.photo {
            validate_photo_url(photo)?;
        }
        if let Some(code) = self.analog_code {
            validate_analog_code(code)?;
        }
        Ok(())
    }
}

/// Partial product update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductUpdate {
    #[schema(value_type = Option<String>, format = "uuid")]
    pub description_id: Option<Uuid>,
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub product_type_id: Option<Uuid>,
    /// http(s) URL of a product photo (jpg/jpeg/png/gif)
    pub photo: Option<String>,
    #[schema(value_type = Option<String>, format = "uuid")]
    pub manufacturer_id: Option<Uuid>,
    /// Four-digit analog lookup code
    pub analog_code: Option<i32>,
}

impl ProductUpdate {
    /// Validate field formats (photo URL, analog code, price sign)
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(ref photo) = self.photo {
            validate_photo_url(photo)?;
        }
        if let Some(code) = self.analog_code {
            validate_analog_code(code)?;
        }
        Ok(())
    }
}

/// Product row as stored, with reference ids
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: ProductId,
    #[schema(value_type = String, format = "uuid")]
    pub description_id: Uuid,
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[schema(value_type = String, format = "uuid")]
    pub product_type_id: Uuid,
    pub photo: Option<String>,
    #[schema(value_type = String, format = "uuid")]
    pub manufacturer_id: Uuid,
    pub analog_code: Option<i32>,
}

/// Product with reference rows resolved to their display values
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductInfoResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: ProductId,
    pub description: String,
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub product_type: String,
    pub photo: Option<String>,
    pub manufacturer: String,
    pub analog_code: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductTypeResponse {
    #[schema(value_type = String, format = "uuid")]
    pub id: Uuid,
    pub name: String,
}

impl From<ProductDBResponse> for ProductResponse {
    fn from(db: ProductDBResponse) -> Self {
        Self {
            id: db.id,
            description_id: db.description_id,
            name: db.name,
            price: db.price,
            product_type_id: db.product_type_id,
            photo: db.photo,
            manufacturer_id: db.manufacturer_id,
            analog_code: db.analog_code,
        }
    }
}

impl From<ProductInfoDBResponse> for ProductInfoResponse {
    fn from(db: ProductInfoDBResponse) -> Self {
        Self {
            id: db.id,
            description: db.description,
            name: db.name,
            price: db.price,
            product_type: db.product_type,
            photo: db.photo,
            manufacturer: db.manufacturer,
            analog_code: db.analog_code,
        }
    }
}

impl From<ProductTypeDBResponse> for ProductTypeResponse {
    fn from(db: ProductTypeDBResponse) -> Self {
        Self { id: db.id, name: db.name }
    }
}

/// Query parameters for listing products
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListProductsQuery {
    /// Pagination parameters
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: Pagination,

    /// Filter by product name (case-insensitive substring match)
    pub search: Option<String>,

    /// Lowest price to include
    #[param(value_type = Option<f64>)]
    pub min_price: Option<Decimal>,

    /// Highest price to include
    #[param(value_type = Option<f64>)]
    pub max_price: Option<Decimal>,
}

const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// A photo must be an http(s) URL pointing at a known image format.
pub fn validate_photo_url(url: &str) -> Result<(), Error> {
    let lowered = url.to_ascii_lowercase();
    let valid = (lowered.starts_with("http://") || lowered.starts_with("https://"))
        && PHOTO_EXTENSIONS.iter().any(|ext| lowered.ends_with(&format!(".{ext}")));

    if valid {
        Ok(())
    } else {
        Err(Error::BadRequest {
            message: "Invalid photo url".to_string(),
        })
    }
}

/// Analog codes are exactly four digits.
pub fn validate_analog_code(code: i32) -> Result<(), Error> {
    if (1000..=9999).contains(&code) {
        Ok(())
    } else {
        Err(Error::BadRequest {
            message: "Invalid analog code".to_string(),
        })
    }
}

/// Prices cannot be negative.
pub fn validate_price(price: Decimal) -> Result<(), Error> {
    if price < Decimal::ZERO {
        Err(Error::BadRequest {
            message: "Price cannot be negative".to_string(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_url_validation() {
        assert!(validate_photo_url("https://cdn.example.com/vitamin-c.jpg").is_ok());
        assert!(validate_photo_url("http://cdn.example.com/a.PNG").is_ok());
        assert!(validate_photo_url("https://cdn.example.com/pic.jpeg").is_ok());
        assert!(validate_photo_url("https://cdn.example.com/anim.gif").is_ok());

        // Wrong scheme
        assert!(validate_photo_url("ftp://cdn.example.com/a.jpg").is_err());
        // No extension
        assert!(validate_photo_url("https://cdn.example.com/photo").is_err());
        // Unsupported format
        assert!(validate_photo_url("https://cdn.example.com/doc.pdf").is_err());
        assert!(validate_photo_url("").is_err());
    }

    #[test]
    fn test_analog_code_validation() {
        assert!(validate_analog_code(1000).is_ok());
        assert!(validate_analog_code(9999).is_ok());
        assert!(validate_analog_code(4729).is_ok());

        assert!(validate_analog_code(999).is_err());
        assert!(validate_analog_code(10000).is_err());
        assert!(validate_analog_code(0).is_err());
        assert!(validate_analog_code(-1234).is_err());
    }

    #[test]
    fn test_price_validation() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::new(1050, 2)).is_ok());
        assert!(validate_price(Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn test_product_create_validate() {
        let mut create = ProductCreate {
            description_id: Uuid::new_v4(),
            name: "Vitamin C".to_string(),
            price: Decimal::new(1000, 2),
            product_type_id: Uuid::new_v4(),
            photo: Some("https://cdn.example.com/vitamin-c.jpg".to_string()),
            manufacturer_id: Uuid::new_v4(),
            analog_code: Some(4729),
        };
        assert!(create.validate().is_ok());

        create.photo = Some("not-a-url".to_string());
        assert!(create.validate().is_err());

        create.photo = None;
        create.analog_code = Some(99);
        assert!(create.validate().is_err());
    }
}
