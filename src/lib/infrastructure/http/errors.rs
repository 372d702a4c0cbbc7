//! API error-handling module

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::quotes::errors::{QuoteValidationError, SubmitQuoteError};

/// The fixed message returned when an unexpected failure interrupts a quote
/// submission
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit quote request.";

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The error message
    #[schema(example = "Missing required fields.")]
    pub error: String,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Failed to submit quote request.")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<QuoteValidationError> for ApiError {
    fn from(err: QuoteValidationError) -> Self {
        match err {
            QuoteValidationError::MissingRequiredFields => {
                ApiError::new_400("Missing required fields.")
            }
        }
    }
}

impl From<SubmitQuoteError> for ApiError {
    fn from(err: SubmitQuoteError) -> Self {
        tracing::error!(error = %err, "quote submission failed unexpectedly");

        ApiError::new_500(SUBMIT_FAILURE_MESSAGE)
    }
}
