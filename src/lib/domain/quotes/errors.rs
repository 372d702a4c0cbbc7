//! Quote domain errors

use thiserror::Error;

/// An error that can occur when validating an inbound quote request
#[derive(Debug, Error)]
pub enum QuoteValidationError {
    /// One or more required fields are absent or empty
    #[error("Missing required fields.")]
    MissingRequiredFields,
}

/// An error that can occur when submitting a quote
#[derive(Debug, Error)]
pub enum SubmitQuoteError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
