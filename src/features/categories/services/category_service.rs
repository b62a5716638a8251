use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto};
use crate::features::categories::models::Category;
use crate::shared::slug::slugify;

const CATEGORY_COLUMNS: &str = "id, name, slug, description, is_active, created_at, updated_at";

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all active categories
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE is_active = TRUE ORDER BY created_at, id",
            CATEGORY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE slug = $1",
            CATEGORY_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by slug: {:?}", e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }

    /// Create a category; the slug is derived from the name when absent
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let slug = match dto.slug.clone().or_else(|| slugify(&dto.name)) {
            Some(slug) => slug,
            None => {
                return Err(AppError::Validation(vec![
                    "slug: could not derive a slug from the name".to_string(),
                ]))
            }
        };

        let category = sqlx::query_as::<_, Category>(&format!(
            r#"
            INSERT INTO categories (name, slug, description, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        ))
        .bind(&dto.name)
        .bind(&slug)
        .bind(&dto.description)
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write_error)?;

        tracing::info!("Category created: id={}, slug={}", category.id, category.slug);

        Ok(category.into())
    }

    /// Update a category; `updated_at` is refreshed unconditionally
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let existing = sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE id = $1",
            CATEGORY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load category for update: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let category = sqlx::query_as::<_, Category>(&format!(
            r#"
            UPDATE categories SET
                name = $2, slug = $3, description = $4, is_active = $5, updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        ))
        .bind(id)
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.slug.unwrap_or(existing.slug))
        .bind(dto.description.or(existing.description))
        .bind(dto.is_active.unwrap_or(existing.is_active))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write_error)?;

        tracing::info!("Category updated: id={}", category.id);

        Ok(category.into())
    }

    /// Delete a category
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}
