use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use validator::ValidationErrors;

use crate::utils::date::DateParseError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application error taxonomy, mapped onto HTTP responses by [`IntoResponse`].
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    InvalidDateFormat { message: String },
    InvalidDateRange { message: String },
    BirthDateRestriction { message: String },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_date_format(message: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            message: message.into(),
        }
    }
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        Self::InvalidDateRange {
            message: message.into(),
        }
    }
    pub fn birth_date_restriction(message: impl Into<String>) -> Self {
        Self::BirthDateRestriction {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::InvalidDateFormat { message } => (
                StatusCode::BAD_REQUEST,
                "invalid_date_format",
                message,
                json!({}),
            ),
            AppError::InvalidDateRange { message } => (
                StatusCode::BAD_REQUEST,
                "invalid_date_range",
                message,
                json!({}),
            ),
            AppError::BirthDateRestriction { message } => (
                StatusCode::BAD_REQUEST,
                "birth_date_restriction",
                message,
                json!({}),
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            // Internal detail stays out of the response body.
            AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error occurred.".to_string(),
                json!({}),
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Collapses `validator` output into a field → message map, keeping the
/// first message per field.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = serde_json::Map::new();
        for (field, field_errors) in errors.field_errors() {
            let message = field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "Invalid value".to_string());
            fields.insert(field.to_string(), Value::String(message));
        }

        AppError::Validation {
            message: "Request validation failed".to_string(),
            details: Value::Object(fields),
        }
    }
}

impl From<DateParseError> for AppError {
    fn from(e: DateParseError) -> Self {
        AppError::invalid_date_format(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Malformed request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
