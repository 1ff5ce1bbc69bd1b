use serde::Serialize;

use crate::meta::{MetaSource, SystemMetaSource};
use crate::responses::{ApiResponse, ErrorDetail, MetaData, PaginationMeta};
use crate::status::{ApiStatus, StatusSpec};

/// Assembles a standardized [`ApiResponse`] from a status-like value and
/// optional payload, error detail, metadata, and pagination inputs.
///
/// The builder is the single construction path for envelopes, which is
/// what keeps the payload/error channels mutually exclusive: payload is
/// carried only on success, error only on failure, regardless of what
/// the caller supplied.
///
/// ```
/// use envelope::builder::ResponseBuilder;
///
/// let res = ResponseBuilder::<()>::new("not_found")
///     .error_details(serde_json::json!({ "id": 42 }))
///     .build();
/// assert_eq!(res.http_code, 404);
/// ```
#[derive(Debug)]
pub struct ResponseBuilder<T: Serialize> {
    status: StatusSpec,
    message: Option<String>,
    payload: Option<T>,
    error_details: Option<serde_json::Value>,
    include_meta: bool,
    request_id: Option<String>,
    pagination: Option<(u32, u32)>,
    total_items: Option<u64>,
}

impl<T: Serialize> Default for ResponseBuilder<T> {
    /// A builder for the default success status (`ok`).
    fn default() -> Self {
        Self::new(ApiStatus::OK)
    }
}

impl<T: Serialize> ResponseBuilder<T> {
    /// Starts a builder for the given status-like value. Metadata
    /// inclusion defaults to on.
    pub fn new(status: impl Into<StatusSpec>) -> Self {
        Self {
            status: status.into(),
            message: None,
            payload: None,
            error_details: None,
            include_meta: true,
            request_id: None,
            pagination: None,
            total_items: None,
        }
    }

    /// Overrides the derived message with the given text, verbatim.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Payload for success responses. Dropped if the status resolves to
    /// a failure.
    pub fn payload(mut self, payload: T) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Opaque error detail, attached only when the status resolves to a
    /// failure.
    pub fn error_details(mut self, details: impl Into<serde_json::Value>) -> Self {
        self.error_details = Some(details.into());
        self
    }

    /// Turns metadata generation on or off.
    pub fn include_meta(mut self, include: bool) -> Self {
        self.include_meta = include;
        self
    }

    /// Uses the given request id instead of a generated one. Only
    /// observable when metadata is included.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Requests pagination metadata for the given page and limit. Page
    /// and limit always travel together; without this call the envelope
    /// carries no pagination at all.
    pub fn paginate(mut self, page: u32, limit: u32) -> Self {
        self.pagination = Some((page, limit));
        self
    }

    /// Total item count backing the pagination derivation. Treated as 0
    /// when omitted.
    pub fn total_items(mut self, total_items: u64) -> Self {
        self.total_items = Some(total_items);
        self
    }

    /// Assembles the envelope using the system clock and uuid generator
    /// for metadata.
    pub fn build(self) -> ApiResponse<T> {
        self.build_with(&SystemMetaSource)
    }

    /// Assembles the envelope with an explicit metadata source. Apart
    /// from the timestamp and request id drawn from `source`, the result
    /// is a pure function of the builder's inputs.
    pub fn build_with(self, source: &dyn MetaSource) -> ApiResponse<T> {
        let Self {
            status,
            message,
            payload,
            error_details,
            include_meta,
            request_id,
            pagination,
            total_items,
        } = self;

        let resolved = ApiStatus::resolve(status);
        let is_success = resolved.is_success();

        let pagination = pagination
            .map(|(page, limit)| PaginationMeta::compute(page, limit, total_items.unwrap_or(0)));

        let meta = include_meta.then(|| MetaData {
            timestamp: source.timestamp(),
            request_id: request_id.unwrap_or_else(|| source.request_id()),
        });

        let error = (!is_success).then(|| ErrorDetail {
            kind: resolved.code().to_owned(),
            details: error_details,
        });

        ApiResponse {
            success: is_success,
            message: message.unwrap_or_else(|| resolved.default_message()),
            http_code: resolved.http_code(),
            payload: if is_success { payload } else { None },
            pagination,
            error,
            meta,
        }
    }
}
