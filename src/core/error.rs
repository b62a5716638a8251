use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error")]
    Validation(Vec<String>),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Duplicate key on field: {0}")]
    Duplicate(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classify a write failure: unique-constraint violations become
    /// `Duplicate` with the colliding field named, everything else stays a
    /// database error.
    pub fn from_write_error(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = e {
            if db.is_unique_violation() {
                let field = duplicate_field_for_constraint(db.constraint().unwrap_or(""));
                return AppError::Duplicate(field.to_string());
            }
        }
        AppError::Database(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value for {}", field));
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        details.sort();
        AppError::Validation(details)
    }
}

/// Map a unique-index name to the wire-level field it guards.
fn duplicate_field_for_constraint(constraint: &str) -> &'static str {
    match constraint {
        "products_slug_key" | "categories_slug_key" => "slug",
        "products_article_number_key" => "articleNumber",
        _ => "unique field",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error", None),
                )
            }
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("Not found", Some(msg)),
            ),
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::with_details("Validation Error", details),
            ),
            AppError::InvalidId(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Invalid ID format", Some(msg)),
            ),
            AppError::Duplicate(field) => (
                StatusCode::CONFLICT,
                ErrorBody::new("Duplicate entry", Some(format!("{} already exists", field))),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Bad request", Some(msg)),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error", None),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_for_constraint() {
        assert_eq!(duplicate_field_for_constraint("products_slug_key"), "slug");
        assert_eq!(
            duplicate_field_for_constraint("products_article_number_key"),
            "articleNumber"
        );
        assert_eq!(duplicate_field_for_constraint("categories_slug_key"), "slug");
        assert_eq!(duplicate_field_for_constraint("whatever"), "unique field");
    }

    #[tokio::test]
    async fn test_duplicate_response_envelope() {
        let response = AppError::Duplicate("slug".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Duplicate entry");
        assert_eq!(body["message"], "slug already exists");
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request_not_404() {
        let response = AppError::InvalidId("Invalid id: nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid ID format");
    }
}
