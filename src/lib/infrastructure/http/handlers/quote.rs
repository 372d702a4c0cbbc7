//! Quote submission handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::quotes::{request::QuoteRequest, service::QuoteService},
    infrastructure::http::{
        errors::{ApiError, SUBMIT_FAILURE_MESSAGE},
        state::AppState,
    },
};

/// Quote accepted response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuoteAcceptedResponse {
    /// Always `true`
    #[schema(example = true)]
    pub ok: bool,
}

/// Submit a quote request.
///
/// Validation failures return 400 before any email is attempted. Once
/// validation passes, the caller gets a success acknowledgment even when one
/// or both email sends fail; those failures are logged server-side only.
#[utoipa::path(
    post,
    operation_id = "submit_quote",
    tag = "Quotes",
    path = "/api/quote",
    request_body = Object,
    responses(
        (status = StatusCode::OK, description = "Quote request accepted", body = QuoteAcceptedResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing required fields", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = ErrorResponse),
    )
)]
pub async fn handler<Q: QuoteService>(
    State(state): State<AppState<Q>>,
    request: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<QuoteAcceptedResponse>, ApiError> {
    // A body that does not decode at all is an unexpected failure, not a
    // validation failure.
    let Json(body) = request.map_err(|_| ApiError::new_500(SUBMIT_FAILURE_MESSAGE))?;

    let quote = QuoteRequest::from_json(&body)?;

    state.quotes.submit_quote(&quote).await?;

    Ok(Json(QuoteAcceptedResponse { ok: true }))
}
