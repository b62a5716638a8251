use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::meta::{dtos as meta_dtos, handlers as meta_handlers};
use crate::features::products::{
    dtos as products_dtos, handlers as products_handlers, models as products_models,
};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Meta
        meta_handlers::service_info,
        meta_handlers::health_check,
        // Products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::get_product_by_slug,
        products_handlers::get_product_by_article,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            // Meta
            meta_dtos::ServiceInfoDto,
            meta_dtos::HealthDto,
            // Products
            products_models::ProductImage,
            products_models::ProductReview,
            products_dtos::ReviewInputDto,
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::ProductResponseDto,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
        )
    ),
    tags(
        (name = "meta", description = "Service information and health"),
        (name = "products", description = "Product catalog management"),
        (name = "categories", description = "Product category management"),
    ),
    info(
        title = "Kalium Catalog API",
        version = "0.1.0",
        description = "API documentation for the Kalium furniture catalog",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
