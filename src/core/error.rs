use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// Metadata store unreachable or query failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Object storage credential or signing failure
    #[error("Storage broker error: {0}")]
    Broker(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A server-side failure with an operation-specific message for the client
    #[error("{message}: {source}")]
    Operation {
        message: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Replace the generic client-visible message of a server-side failure.
    ///
    /// Client errors (4xx) are returned unchanged so their detail still reaches
    /// the caller.
    pub fn with_public_message(self, message: impl Into<String>) -> Self {
        if matches!(self, AppError::Database(_) | AppError::Broker(_)) {
            AppError::Operation {
                message: message.into(),
                source: Box::new(self),
            }
        } else {
            self
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) | AppError::Broker(_) | AppError::Operation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, details) = match self {
            // Repositories log database failures with query context at error level
            AppError::Database(ref e) => {
                tracing::debug!("Database error: {:?}", e);
                ("Database error occurred".to_string(), None)
            }
            AppError::Broker(ref msg) => {
                tracing::error!("Storage broker error: {}", msg);
                ("Storage service error".to_string(), None)
            }
            AppError::Operation {
                ref message,
                ref source,
            } => {
                if matches!(**source, AppError::Database(_)) {
                    tracing::debug!("{}: {}", message, source);
                } else {
                    tracing::error!("{}: {}", message, source);
                }
                (message.clone(), None)
            }
            AppError::NotFound(msg) => (msg, None),
            AppError::Validation(msg) => (msg.clone(), Some(vec![msg])),
            AppError::BadRequest(msg) => (msg, None),
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (msg, None)
            }
        };

        (status, Json(ErrorResponse::new(message, details))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
