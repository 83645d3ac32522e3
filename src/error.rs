//! Error handling for the application

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::store::StorageError;

/// Which precondition a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    Missing,
    WrongType,
    OutOfRange,
}

/// Client input that failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ValidationKind,
    pub message: String,
}

impl ValidationError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            kind: ValidationKind::Missing,
            message: format!("{field} is required"),
        }
    }

    pub fn wrong_type(field: &'static str, expected: &str) -> Self {
        Self {
            field,
            kind: ValidationKind::WrongType,
            message: format!("{field} must be {expected}"),
        }
    }

    pub fn out_of_range(field: &'static str, expected: &str) -> Self {
        Self {
            field,
            kind: ValidationKind::OutOfRange,
            message: format!("{field} must be {expected}"),
        }
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match rejection {
            JsonRejection::MissingJsonContentType(_) => ValidationKind::Missing,
            _ => ValidationKind::WrongType,
        };
        Self {
            field: "body",
            kind,
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ValidationError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            field: "query",
            kind: ValidationKind::WrongType,
            message: rejection.body_text(),
        }
    }
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.into())
    }
}

/// Error body returned by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(e) => {
                tracing::debug!("Rejected request: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error_type: "validation_error",
                        message: e.message.clone(),
                        details: Some(json!({ "field": e.field, "kind": e.kind })),
                    },
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_type: "storage_error",
                        message: "Storage error".to_string(),
                        details: None,
                    },
                )
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_type: "internal_error",
                        message: "Internal error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
