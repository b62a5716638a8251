use sqlx::types::Json;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{CreateProductDto, ListProductsQuery, ProductResponseDto, UpdateProductDto};
use crate::features::products::models::{Product, ProductReview};
use crate::shared::constants::DEFAULT_CATEGORY;
use crate::shared::slug::slugify;

const PRODUCT_COLUMNS: &str = "id, name, price, original_price, currency_symbol, features, \
     description, dimensions, materials, finish, designer, country_of_origin, \
     importer_packer_marketer, article_number, images, reviews, category, slug, is_active, \
     created_at, updated_at";

/// Service for product catalog operations
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List products, optionally filtered by visibility and category.
    ///
    /// No pagination; order follows insertion order, which the page
    /// hydrator relies on for positional lookups.
    pub async fn list(&self, query: &ListProductsQuery) -> Result<Vec<ProductResponseDto>> {
        let products: Vec<Product> = Self::list_query(query)
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list products: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// Build the list query. The id tiebreaker keeps the order stable
    /// when several rows share a created_at timestamp (seeded data does),
    /// which positional lookups in the page hydrator depend on.
    fn list_query(query: &ListProductsQuery) -> QueryBuilder<'_, sqlx::Postgres> {
        let mut qb = QueryBuilder::new(format!("SELECT {} FROM products", PRODUCT_COLUMNS));
        qb.push(" WHERE 1=1");
        if let Some(is_active) = query.is_active {
            qb.push(" AND is_active = ").push_bind(is_active);
        }
        if let Some(category) = &query.category {
            qb.push(" AND category = ").push_bind(category);
        }
        qb.push(" ORDER BY created_at, id");
        qb
    }

    /// Get product by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product by id: {:?}", e);
            AppError::Database(e)
        })?;

        product
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Get product by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE slug = $1",
            PRODUCT_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product by slug: {:?}", e);
            AppError::Database(e)
        })?;

        product
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", slug)))
    }

    /// Get product by article number
    pub async fn get_by_article_number(&self, article_number: &str) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE article_number = $1",
            PRODUCT_COLUMNS
        ))
        .bind(article_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product by article number: {:?}", e);
            AppError::Database(e)
        })?;

        product.map(|p| p.into()).ok_or_else(|| {
            AppError::NotFound(format!(
                "Product with article number '{}' not found",
                article_number
            ))
        })
    }

    /// Create a product.
    ///
    /// The slug is derived from the name exactly once here when absent;
    /// unique collisions on slug or article number surface as duplicates.
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        let slug = dto.slug.clone().or_else(|| slugify(&dto.name));
        let currency_symbol = dto.currency_symbol_or_default();
        let category = dto
            .category
            .clone()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let reviews: Vec<ProductReview> = dto.reviews.into_iter().map(|r| r.into()).collect();

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (
                name, price, original_price, currency_symbol, features, description,
                dimensions, materials, finish, designer, country_of_origin,
                importer_packer_marketer, article_number, images, reviews, category,
                slug, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(&dto.name)
        .bind(&dto.price)
        .bind(&dto.original_price)
        .bind(&currency_symbol)
        .bind(&dto.features)
        .bind(&dto.description)
        .bind(&dto.dimensions)
        .bind(&dto.materials)
        .bind(&dto.finish)
        .bind(&dto.designer)
        .bind(&dto.country_of_origin)
        .bind(&dto.importer_packer_marketer)
        .bind(&dto.article_number)
        .bind(Json(&dto.images))
        .bind(Json(&reviews))
        .bind(&category)
        .bind(&slug)
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write_error)?;

        tracing::info!(
            "Product created: id={}, name={}, slug={:?}",
            product.id,
            product.name,
            product.slug
        );

        Ok(product.into())
    }

    /// Update a product. `updated_at` is refreshed unconditionally; the
    /// slug is never re-derived from a changed name.
    pub async fn update(&self, id: Uuid, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        let existing = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load product for update: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        let images = dto.images.map(Json).unwrap_or(existing.images);
        let reviews = dto
            .reviews
            .map(|rs| Json(rs.into_iter().map(ProductReview::from).collect::<Vec<_>>()))
            .unwrap_or(existing.reviews);

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products SET
                name = $2, price = $3, original_price = $4, currency_symbol = $5,
                features = $6, description = $7, dimensions = $8, materials = $9,
                finish = $10, designer = $11, country_of_origin = $12,
                importer_packer_marketer = $13, article_number = $14, images = $15,
                reviews = $16, category = $17, slug = $18, is_active = $19,
                updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.price.unwrap_or(existing.price))
        .bind(dto.original_price.or(existing.original_price))
        .bind(dto.currency_symbol.unwrap_or(existing.currency_symbol))
        .bind(dto.features.unwrap_or(existing.features))
        .bind(dto.description.unwrap_or(existing.description))
        .bind(dto.dimensions.or(existing.dimensions))
        .bind(dto.materials.or(existing.materials))
        .bind(dto.finish.or(existing.finish))
        .bind(dto.designer.or(existing.designer))
        .bind(dto.country_of_origin.or(existing.country_of_origin))
        .bind(dto.importer_packer_marketer.or(existing.importer_packer_marketer))
        .bind(dto.article_number.or(existing.article_number))
        .bind(images)
        .bind(reviews)
        .bind(dto.category.unwrap_or(existing.category))
        .bind(dto.slug.or(existing.slug))
        .bind(dto.is_active.unwrap_or(existing.is_active))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write_error)?;

        tracing::info!("Product updated: id={}", product.id);

        Ok(product.into())
    }

    /// Delete a product
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        tracing::info!("Product deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_orders_by_created_at_then_id() {
        let query = ListProductsQuery { is_active: None, category: None };
        let sql = ProductService::list_query(&query).into_sql();
        assert!(sql.ends_with("ORDER BY created_at, id"));
        assert!(!sql.contains("AND is_active"));
        assert!(!sql.contains("AND category"));
    }

    #[test]
    fn test_list_query_applies_filters() {
        let query = ListProductsQuery {
            is_active: Some(true),
            category: Some("mirrors".to_string()),
        };
        let sql = ProductService::list_query(&query).into_sql();
        assert!(sql.contains("AND is_active = $1"));
        assert!(sql.contains("AND category = $2"));
        assert!(sql.ends_with("ORDER BY created_at, id"));
    }
}
