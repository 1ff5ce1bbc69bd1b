use axum::response::{IntoResponse, Response};
use envelope::builder::ResponseBuilder;
use envelope::status::ApiStatus;
use thiserror::Error;

use crate::respond;

/// Service-boundary errors, each mapped to a canonical failure status
/// via the [`IntoResponse`] implementation.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Requested resource was not found.
    #[error("Not Found: {0}")]
    NotFound(String),

    /// Client sent an invalid request.
    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Request conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request was well-formed but semantically invalid.
    #[error("Unprocessable Entity: {0}")]
    Unprocessable(String),

    /// Unexpected internal failure.
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl HttpError {
    fn status(&self) -> ApiStatus {
        match self {
            Self::NotFound(_) => ApiStatus::NOT_FOUND,
            Self::BadRequest(_) => ApiStatus::BAD_REQUEST,
            Self::Conflict(_) => ApiStatus::CONFLICT,
            Self::Unprocessable(_) => ApiStatus::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => ApiStatus::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.http_code() >= 500 {
            tracing::error!(error = %self, http_code = status.http_code(), "Server error");
        } else {
            tracing::warn!(error = %self, http_code = status.http_code(), "Client error");
        }

        let body = ResponseBuilder::<()>::new(status)
            .message(self.to_string())
            .build();
        respond(body)
    }
}
