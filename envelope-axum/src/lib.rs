//! axum integration for the standardized response envelope.
//!
//! The core stays framework-free; this crate renders an
//! [`ApiResponse`] as an HTTP response (status code taken from the
//! envelope, JSON body with absent fields dropped) and maps
//! service-boundary errors onto failure envelopes.

pub mod error;
pub mod telemetry;

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use envelope::builder::ResponseBuilder;
use envelope::responses::ApiResponse;
use envelope::status::ApiStatus;
use serde::Serialize;

pub use error::HttpError;

/// Renders an envelope as an HTTP response.
///
/// The outgoing status code is the envelope's `http_code`; registry
/// statuses are always in range, so the fallback conversion to 500 is
/// unreachable in practice but keeps the function total.
pub fn respond<T: Serialize>(envelope: ApiResponse<T>) -> Response {
    let status =
        StatusCode::from_u16(envelope.http_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope)).into_response()
}

/// Same as [`respond`], then applies the caller's extra response headers
/// verbatim.
pub fn respond_with_headers<T: Serialize>(
    envelope: ApiResponse<T>,
    headers: HeaderMap,
) -> Response {
    let mut response = respond(envelope);
    response.headers_mut().extend(headers);
    response
}

/// Router fallback handler emitting the standard `not_found` envelope,
/// so unmatched routes answer in the same shape as every endpoint.
pub async fn fallback() -> Response {
    respond(ResponseBuilder::<()>::new(ApiStatus::NOT_FOUND).build())
}
