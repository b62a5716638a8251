use axum::{routing::get, Router};
use sqlx::PgPool;

use crate::features::meta::handlers;

/// Create routes for the meta feature
pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/api/health", get(handlers::health_check))
        .with_state(pool)
}
