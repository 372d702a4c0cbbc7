//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::*};

/// OpenAPI documentation for the quote API
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "SLK Auto Repair"),
    paths(quote::handler, uptime::handler),
    components(schemas(
        quote::QuoteAcceptedResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
