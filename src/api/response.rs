//! Response types for the overlap engine API.
//!
//! This module defines the success bodies and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{DominantPair, EmployeeRecord, PairResult};
use crate::parsing::REQUIRED_HEADERS;

/// Response body for the `/pairs` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairsResponse {
    /// Ingested records in input order.
    pub records: Vec<EmployeeRecord>,
    /// Rows whose dates were ambiguous.
    pub ambiguous_rows: Vec<usize>,
    /// Every positive overlap, per project.
    pub pairs: Vec<PairResult>,
    /// The pair with the most days together, if any pair overlaps.
    pub dominant_pair: Option<DominantPair>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message, suitable for showing verbatim.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::UnsupportedFormat { text } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("UNSUPPORTED_DATE_FORMAT", message, text),
            },
            EngineError::MissingHeaders { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_HEADERS",
                    message,
                    format!("Expected columns: {}", REQUIRED_HEADERS.join(", ")),
                ),
            },
            EngineError::Row(row_error) => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ROW",
                    message,
                    format!("Ingestion stopped at row {}", row_error.row()),
                ),
            },
            EngineError::UnsupportedFileType {
                file_name,
                media_type,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNSUPPORTED_FILE_TYPE",
                    message,
                    format!("Received '{}' declared as '{}'", file_name, media_type),
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}
