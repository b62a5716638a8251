use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for the products feature
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/products",
            post(handlers::create_product).get(handlers::list_products),
        )
        .route("/api/products/slug/{slug}", get(handlers::get_product_by_slug))
        .route(
            "/api/products/article/{articleNumber}",
            get(handlers::get_product_by_article),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(service)
}
