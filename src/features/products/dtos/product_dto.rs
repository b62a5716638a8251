use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::products::models::{Product, ProductImage, ProductReview};
use crate::shared::constants::DEFAULT_CURRENCY_SYMBOL;

/// Query params for listing products
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    /// Filter by visibility flag
    pub is_active: Option<bool>,
    /// Filter by category tag (case-sensitive exact match)
    pub category: Option<String>,
}

/// Review payload accepted on writes; `date` defaults to now
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReviewInputDto {
    #[validate(length(min = 1, message = "Review author is required"))]
    pub author: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(length(min = 1, message = "Review comment is required"))]
    pub comment: String,

    pub date: Option<DateTime<Utc>>,
}

impl From<ReviewInputDto> for ProductReview {
    fn from(dto: ReviewInputDto) -> Self {
        ProductReview {
            author: dto.author,
            rating: dto.rating,
            comment: dto.comment,
            date: dto.date.unwrap_or_else(Utc::now),
        }
    }
}

/// Request DTO for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,

    pub original_price: Option<String>,

    pub currency_symbol: Option<String>,

    #[validate(length(min = 1, message = "Features text is required"))]
    pub features: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub dimensions: Option<String>,
    pub materials: Option<String>,
    pub finish: Option<String>,
    pub designer: Option<String>,
    pub country_of_origin: Option<String>,
    pub importer_packer_marketer: Option<String>,
    pub article_number: Option<String>,

    #[serde(default)]
    pub images: Vec<ProductImage>,

    #[serde(default)]
    #[validate(nested)]
    pub reviews: Vec<ReviewInputDto>,

    pub category: Option<String>,

    /// Explicit slug; derived from the name when absent
    pub slug: Option<String>,

    pub is_active: Option<bool>,
}

impl CreateProductDto {
    pub fn currency_symbol_or_default(&self) -> String {
        self.currency_symbol
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string())
    }
}

/// Request DTO for updating a product; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Price must not be empty"))]
    pub price: Option<String>,

    pub original_price: Option<String>,
    pub currency_symbol: Option<String>,
    pub features: Option<String>,
    pub description: Option<String>,
    pub dimensions: Option<String>,
    pub materials: Option<String>,
    pub finish: Option<String>,
    pub designer: Option<String>,
    pub country_of_origin: Option<String>,
    pub importer_packer_marketer: Option<String>,
    pub article_number: Option<String>,

    /// Replaces the whole image list when present
    pub images: Option<Vec<ProductImage>>,

    /// Replaces the whole review list when present
    #[validate(nested)]
    pub reviews: Option<Vec<ReviewInputDto>>,

    pub category: Option<String>,

    /// Explicit slug change; the slug is never re-derived from the name
    pub slug: Option<String>,

    pub is_active: Option<bool>,
}

/// Response DTO for a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub currency_symbol: String,
    pub features: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importer_packer_marketer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_number: Option<String>,
    pub images: Vec<ProductImage>,
    pub reviews: Vec<ProductReview>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            original_price: p.original_price,
            currency_symbol: p.currency_symbol,
            features: p.features,
            description: p.description,
            dimensions: p.dimensions,
            materials: p.materials,
            finish: p.finish,
            designer: p.designer,
            country_of_origin: p.country_of_origin,
            importer_packer_marketer: p.importer_packer_marketer,
            article_number: p.article_number,
            images: p.images.0,
            reviews: p.reviews.0,
            category: p.category,
            slug: p.slug,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_create() -> CreateProductDto {
        CreateProductDto {
            name: "Tact Mirror".to_string(),
            price: "199.00".to_string(),
            original_price: None,
            currency_symbol: None,
            features: "Resin mirror with prismatic design.".to_string(),
            description: "Prismatic surfaces that reflect light.".to_string(),
            dimensions: None,
            materials: None,
            finish: None,
            designer: None,
            country_of_origin: None,
            importer_packer_marketer: None,
            article_number: None,
            images: vec![],
            reviews: vec![],
            category: None,
            slug: None,
            is_active: None,
        }
    }

    #[test]
    fn test_create_dto_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_dto_missing_name() {
        let mut dto = valid_create();
        dto.name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_review_rating_out_of_range() {
        let mut dto = valid_create();
        dto.reviews = vec![ReviewInputDto {
            author: "A".to_string(),
            rating: 6,
            comment: "too good".to_string(),
            date: None,
        }];
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_list_query_camel_case() {
        let q: ListProductsQuery =
            serde_json::from_str(r#"{"isActive": true, "category": "rugs"}"#).unwrap();
        assert_eq!(q.is_active, Some(true));
        assert_eq!(q.category.as_deref(), Some("rugs"));
    }

    #[test]
    fn test_response_wire_shape_is_camel_case() {
        let dto = ProductResponseDto {
            id: Uuid::nil(),
            name: "Tact Mirror".to_string(),
            price: "199.00".to_string(),
            original_price: Some("245.00".to_string()),
            currency_symbol: "$".to_string(),
            features: "f".to_string(),
            description: "d".to_string(),
            dimensions: None,
            materials: None,
            finish: None,
            designer: None,
            country_of_origin: None,
            importer_packer_marketer: None,
            article_number: Some("TAC-MIR-001".to_string()),
            images: vec![],
            reviews: vec![],
            category: "mirrors".to_string(),
            slug: Some("tact-mirror".to_string()),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["originalPrice"], "245.00");
        assert_eq!(value["articleNumber"], "TAC-MIR-001");
        assert_eq!(value["isActive"], true);
        assert!(value.get("dimensions").is_none());
    }
}
