//! Error handling for the Crop Recommendation Platform
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use shared::MissingParameterError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Caller errors
    #[error("missing required parameters: {}", .0.fields.join(", "))]
    MissingParameters(#[from] MissingParameterError),

    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Crop not found: {0}")]
    CropNotFound(String),

    // Internal errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::MissingParameters(err) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "MISSING_PARAMETERS".to_string(),
                    message_en: format!(
                        "Missing required parameters: {}",
                        err.fields.join(", ")
                    ),
                    message_hi: "कृपया सभी पैरामीटर के लिए मान्य मान दर्ज करें।".to_string(),
                    field: None,
                    fields: Some(err.fields.clone()),
                },
            ),
            AppError::Validation {
                field,
                message,
                message_hi,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_hi: message_hi.clone(),
                    field: Some(field.clone()),
                    fields: None,
                },
            ),
            AppError::CropNotFound(name) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "CROP_NOT_FOUND".to_string(),
                    message_en: format!("Crop '{}' is not in the catalog", name),
                    message_hi: format!("फसल '{}' सूची में नहीं है", name),
                    field: None,
                    fields: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_hi: "सर्वर कॉन्फ़िगरेशन में त्रुटि हुई।".to_string(),
                    field: None,
                    fields: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: "सर्वर में आंतरिक त्रुटि हुई।".to_string(),
                    field: None,
                    fields: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_hi: "सर्वर में आंतरिक त्रुटि हुई।".to_string(),
                    field: None,
                    fields: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
