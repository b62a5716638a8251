use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire error envelope shared by every failing response.
///
/// `error` is the error kind, `message` the human-readable detail, and
/// `details` per-field validation messages when applicable.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: Option<String>) -> Self {
        Self {
            error: error.into(),
            message,
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            details: Some(details),
        }
    }
}
