use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness response with a storage-connectivity flag
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// "connected" or "disconnected"
    pub database: String,
}

/// Root endpoint payload: service metadata and endpoint directory
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoDto {
    pub name: String,
    pub version: String,
    pub status: String,
    pub message: String,
    #[schema(value_type = Object)]
    pub endpoints: serde_json::Value,
    pub database: String,
    pub timestamp: DateTime<Utc>,
}
