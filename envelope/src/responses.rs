use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::builder::ResponseBuilder;
use crate::status::{ApiStatus, StatusSpec};

/// Standard JSON response envelope emitted by every endpoint, success or
/// failure. Optional fields are dropped from the serialized form when
/// absent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub http_code: u16,
    /// Present only on success, and only if the caller provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    /// Present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a success envelope wrapping the given payload.
    pub fn ok(payload: T) -> Self {
        ResponseBuilder::new(ApiStatus::OK).payload(payload).build()
    }

    /// Creates a failure envelope for the given status with an explicit
    /// message. The status goes through normal resolution, so string and
    /// numeric aliases are accepted.
    pub fn err(status: impl Into<StatusSpec>, message: impl Into<String>) -> Self {
        ResponseBuilder::new(status).message(message).build()
    }
}

/// Error channel of a failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Canonical code of the failing status, e.g. `"not_found"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque caller-supplied detail, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Per-response metadata: generation timestamp and request correlation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MetaData {
    /// ISO-8601 generation time.
    pub timestamp: String,
    pub request_id: String,
}

/// Derived paging summary. Computed fresh per envelope from
/// `(page, limit, total_items)`; it has no lifecycle of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Derives the paging summary. Ceiling division is integer-only.
    ///
    /// `limit == 0` is accepted as-is: `total_pages` is `0`, `has_next`
    /// can never be true, and `has_prev` still reports `page > 1`.
    pub fn compute(page: u32, limit: u32, total_items: u64) -> Self {
        let total_pages = if limit > 0 {
            total_items.div_ceil(u64::from(limit))
        } else {
            0
        };

        Self {
            page,
            limit,
            total_items,
            total_pages,
            has_next: u64::from(page) < total_pages,
            has_prev: page > 1,
        }
    }
}
