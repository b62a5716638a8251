use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{
    CreateProductDto, ListProductsQuery, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::services::ProductService;
use crate::shared::types::ErrorBody;

/// Parse a path id, keeping malformed ids distinct from "not found"
fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidId(format!("Invalid id: {}", id)))
}

/// List products
///
/// Returns a bare array; the page hydrator indexes into it positionally.
#[utoipa::path(
    get,
    path = "/api/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponseDto>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.list(&query).await?;
    Ok(Json(products))
}

/// Get product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product id (UUID)")),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.get_by_id(parse_id(&id)?).await?;
    Ok(Json(product))
}

/// Get product by slug
#[utoipa::path(
    get,
    path = "/api/products/slug/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn get_product_by_slug(
    State(service): State<Arc<ProductService>>,
    Path(slug): Path<String>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.get_by_slug(&slug).await?;
    Ok(Json(product))
}

/// Get product by article number
#[utoipa::path(
    get,
    path = "/api/products/article/{articleNumber}",
    params(("articleNumber" = String, Path, description = "External SKU")),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn get_product_by_article(
    State(service): State<Arc<ProductService>>,
    Path(article_number): Path<String>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.get_by_article_number(&article_number).await?;
    Ok(Json(product))
}

/// Create product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductResponseDto),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 409, description = "Duplicate slug or article number", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ProductResponseDto>)> {
    dto.validate()?;

    let product = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product id (UUID)")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductResponseDto),
        (status = 400, description = "Validation error or malformed id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 409, description = "Duplicate slug or article number", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ProductResponseDto>> {
    dto.validate()?;

    let product = service.update(parse_id(&id)?, dto).await?;
    Ok(Json(product))
}

/// Delete product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product id (UUID)")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    service.delete(parse_id(&id)?).await?;
    Ok(Json(
        serde_json::json!({ "message": "Product deleted successfully" }),
    ))
}
