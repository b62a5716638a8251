use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One gallery image; order in the vector is display order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductImage {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// One customer review; order in the vector is insertion/display order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductReview {
    pub author: String,
    /// Star rating, 1 to 5
    pub rating: i32,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Database model for a catalog product
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Decimal-as-text, e.g. "199.00"
    pub price: String,
    /// Presence implies the product is on sale
    pub original_price: Option<String>,
    pub currency_symbol: String,
    pub features: String,
    pub description: String,
    pub dimensions: Option<String>,
    pub materials: Option<String>,
    pub finish: Option<String>,
    pub designer: Option<String>,
    pub country_of_origin: Option<String>,
    pub importer_packer_marketer: Option<String>,
    /// External SKU, usable as an alternate lookup key
    pub article_number: Option<String>,
    pub images: Json<Vec<ProductImage>>,
    pub reviews: Json<Vec<ProductReview>>,
    /// Soft reference to a category slug
    pub category: String,
    /// Derived once from the name at creation when absent, never recomputed
    pub slug: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
