use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every non-2xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short, client-safe description of the failure
    #[schema(example = "File not found")]
    pub error: String,
    /// Individual validation failures, when the request body was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: Option<Vec<String>>) -> Self {
        Self {
            error: error.into(),
            details,
        }
    }
}
