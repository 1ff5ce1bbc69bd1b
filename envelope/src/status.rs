//! Canonical response statuses and the lookup rules that normalize
//! status-like input into them.

/// A canonical response status: a unique snake_case code paired with its
/// standard HTTP status number.
///
/// The full set lives in a fixed registry created at build time; there is
/// no runtime registration. Obtain entries through the associated
/// constants or [`ApiStatus::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiStatus {
    code: &'static str,
    http_code: u16,
}

impl ApiStatus {
    const fn new(code: &'static str, http_code: u16) -> Self {
        Self { code, http_code }
    }

    // 1xx informational
    pub const CONTINUE: Self = Self::new("continue", 100);
    pub const SWITCHING_PROTOCOLS: Self = Self::new("switching_protocols", 101);
    pub const PROCESSING: Self = Self::new("processing", 102);
    pub const EARLY_HINTS: Self = Self::new("early_hints", 103);

    // 2xx success
    pub const OK: Self = Self::new("ok", 200);
    pub const CREATED: Self = Self::new("created", 201);
    pub const ACCEPTED: Self = Self::new("accepted", 202);
    pub const NON_AUTHORITATIVE_INFORMATION: Self =
        Self::new("non_authoritative_information", 203);
    pub const NO_CONTENT: Self = Self::new("no_content", 204);
    pub const RESET_CONTENT: Self = Self::new("reset_content", 205);
    pub const PARTIAL_CONTENT: Self = Self::new("partial_content", 206);
    pub const MULTI_STATUS: Self = Self::new("multi_status", 207);
    pub const ALREADY_REPORTED: Self = Self::new("already_reported", 208);
    pub const IM_USED: Self = Self::new("im_used", 226);

    // 3xx redirection
    pub const MULTIPLE_CHOICES: Self = Self::new("multiple_choices", 300);
    pub const MOVED_PERMANENTLY: Self = Self::new("moved_permanently", 301);
    pub const FOUND: Self = Self::new("found", 302);
    pub const SEE_OTHER: Self = Self::new("see_other", 303);
    pub const NOT_MODIFIED: Self = Self::new("not_modified", 304);
    pub const USE_PROXY: Self = Self::new("use_proxy", 305);
    pub const TEMPORARY_REDIRECT: Self = Self::new("temporary_redirect", 307);
    pub const PERMANENT_REDIRECT: Self = Self::new("permanent_redirect", 308);

    // 4xx client error
    pub const BAD_REQUEST: Self = Self::new("bad_request", 400);
    pub const UNAUTHORIZED: Self = Self::new("unauthorized", 401);
    pub const PAYMENT_REQUIRED: Self = Self::new("payment_required", 402);
    pub const FORBIDDEN: Self = Self::new("forbidden", 403);
    pub const NOT_FOUND: Self = Self::new("not_found", 404);
    pub const METHOD_NOT_ALLOWED: Self = Self::new("method_not_allowed", 405);
    pub const NOT_ACCEPTABLE: Self = Self::new("not_acceptable", 406);
    pub const PROXY_AUTHENTICATION_REQUIRED: Self =
        Self::new("proxy_authentication_required", 407);
    pub const REQUEST_TIMEOUT: Self = Self::new("request_timeout", 408);
    pub const CONFLICT: Self = Self::new("conflict", 409);
    pub const GONE: Self = Self::new("gone", 410);
    pub const LENGTH_REQUIRED: Self = Self::new("length_required", 411);
    pub const PRECONDITION_FAILED: Self = Self::new("precondition_failed", 412);
    pub const PAYLOAD_TOO_LARGE: Self = Self::new("payload_too_large", 413);
    pub const URI_TOO_LONG: Self = Self::new("uri_too_long", 414);
    pub const UNSUPPORTED_MEDIA_TYPE: Self = Self::new("unsupported_media_type", 415);
    pub const RANGE_NOT_SATISFIABLE: Self = Self::new("range_not_satisfiable", 416);
    pub const EXPECTATION_FAILED: Self = Self::new("expectation_failed", 417);
    pub const IM_A_TEAPOT: Self = Self::new("im_a_teapot", 418);
    pub const MISDIRECTED_REQUEST: Self = Self::new("misdirected_request", 421);
    pub const UNPROCESSABLE_ENTITY: Self = Self::new("unprocessable_entity", 422);
    pub const LOCKED: Self = Self::new("locked", 423);
    pub const FAILED_DEPENDENCY: Self = Self::new("failed_dependency", 424);
    pub const TOO_EARLY: Self = Self::new("too_early", 425);
    pub const UPGRADE_REQUIRED: Self = Self::new("upgrade_required", 426);
    pub const PRECONDITION_REQUIRED: Self = Self::new("precondition_required", 428);
    pub const TOO_MANY_REQUESTS: Self = Self::new("too_many_requests", 429);
    pub const REQUEST_HEADER_FIELDS_TOO_LARGE: Self =
        Self::new("request_header_fields_too_large", 431);
    pub const UNAVAILABLE_FOR_LEGAL_REASONS: Self =
        Self::new("unavailable_for_legal_reasons", 451);

    // 5xx server error
    pub const INTERNAL_SERVER_ERROR: Self = Self::new("internal_server_error", 500);
    pub const NOT_IMPLEMENTED: Self = Self::new("not_implemented", 501);
    pub const BAD_GATEWAY: Self = Self::new("bad_gateway", 502);
    pub const SERVICE_UNAVAILABLE: Self = Self::new("service_unavailable", 503);
    pub const GATEWAY_TIMEOUT: Self = Self::new("gateway_timeout", 504);
    pub const HTTP_VERSION_NOT_SUPPORTED: Self =
        Self::new("http_version_not_supported", 505);
    pub const VARIANT_ALSO_NEGOTIATES: Self = Self::new("variant_also_negotiates", 506);
    pub const INSUFFICIENT_STORAGE: Self = Self::new("insufficient_storage", 507);
    pub const LOOP_DETECTED: Self = Self::new("loop_detected", 508);
    pub const NOT_EXTENDED: Self = Self::new("not_extended", 510);
    pub const NETWORK_AUTHENTICATION_REQUIRED: Self =
        Self::new("network_authentication_required", 511);

    /// The canonical snake_case code, e.g. `"not_found"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The HTTP status number, e.g. `404`.
    pub fn http_code(&self) -> u16 {
        self.http_code
    }

    /// Whether this status belongs to the success class (`< 400`).
    pub fn is_success(&self) -> bool {
        self.http_code < 400
    }

    /// Human-readable default message derived from the code:
    /// underscores become spaces, each word is title-cased
    /// (`not_found` -> `"Not Found"`).
    pub fn default_message(&self) -> String {
        self.code
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Read-only view of the full registry.
    pub fn all() -> &'static [ApiStatus] {
        REGISTRY
    }

    /// Normalizes any status-like value into a registry entry.
    ///
    /// Accepts a canonical status (returned unchanged), an HTTP status
    /// number, a snake_case code string, an uppercase symbolic name, or a
    /// digit-only string. Resolution is total: input that matches nothing
    /// degrades to [`ApiStatus::INTERNAL_SERVER_ERROR`] instead of
    /// failing, except that unknown numbers in the 200-299 range resolve
    /// to [`ApiStatus::OK`].
    pub fn resolve(value: impl Into<StatusSpec>) -> ApiStatus {
        match value.into() {
            StatusSpec::Canonical(status) => status,
            StatusSpec::Code(code) => Self::from_http_code(code),
            StatusSpec::Name(name) => Self::from_name(&name),
        }
    }

    fn from_http_code(code: u16) -> ApiStatus {
        if let Some(status) = REGISTRY.iter().find(|s| s.http_code == code) {
            return *status;
        }
        if (200..300).contains(&code) {
            return Self::OK;
        }
        Self::INTERNAL_SERVER_ERROR
    }

    fn from_name(name: &str) -> ApiStatus {
        // Symbolic names are the uppercase form of their codes, so one
        // case-insensitive match covers both spellings.
        let lowered = name.to_ascii_lowercase();
        if let Some(status) = REGISTRY.iter().find(|s| s.code == lowered) {
            return *status;
        }
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(code) = name.parse::<u16>() {
                return Self::from_http_code(code);
            }
        }
        Self::INTERNAL_SERVER_ERROR
    }
}

/// The fixed, process-wide status registry. Never mutated after build;
/// safe for unsynchronized concurrent reads.
static REGISTRY: &[ApiStatus] = &[
    ApiStatus::CONTINUE,
    ApiStatus::SWITCHING_PROTOCOLS,
    ApiStatus::PROCESSING,
    ApiStatus::EARLY_HINTS,
    ApiStatus::OK,
    ApiStatus::CREATED,
    ApiStatus::ACCEPTED,
    ApiStatus::NON_AUTHORITATIVE_INFORMATION,
    ApiStatus::NO_CONTENT,
    ApiStatus::RESET_CONTENT,
    ApiStatus::PARTIAL_CONTENT,
    ApiStatus::MULTI_STATUS,
    ApiStatus::ALREADY_REPORTED,
    ApiStatus::IM_USED,
    ApiStatus::MULTIPLE_CHOICES,
    ApiStatus::MOVED_PERMANENTLY,
    ApiStatus::FOUND,
    ApiStatus::SEE_OTHER,
    ApiStatus::NOT_MODIFIED,
    ApiStatus::USE_PROXY,
    ApiStatus::TEMPORARY_REDIRECT,
    ApiStatus::PERMANENT_REDIRECT,
    ApiStatus::BAD_REQUEST,
    ApiStatus::UNAUTHORIZED,
    ApiStatus::PAYMENT_REQUIRED,
    ApiStatus::FORBIDDEN,
    ApiStatus::NOT_FOUND,
    ApiStatus::METHOD_NOT_ALLOWED,
    ApiStatus::NOT_ACCEPTABLE,
    ApiStatus::PROXY_AUTHENTICATION_REQUIRED,
    ApiStatus::REQUEST_TIMEOUT,
    ApiStatus::CONFLICT,
    ApiStatus::GONE,
    ApiStatus::LENGTH_REQUIRED,
    ApiStatus::PRECONDITION_FAILED,
    ApiStatus::PAYLOAD_TOO_LARGE,
    ApiStatus::URI_TOO_LONG,
    ApiStatus::UNSUPPORTED_MEDIA_TYPE,
    ApiStatus::RANGE_NOT_SATISFIABLE,
    ApiStatus::EXPECTATION_FAILED,
    ApiStatus::IM_A_TEAPOT,
    ApiStatus::MISDIRECTED_REQUEST,
    ApiStatus::UNPROCESSABLE_ENTITY,
    ApiStatus::LOCKED,
    ApiStatus::FAILED_DEPENDENCY,
    ApiStatus::TOO_EARLY,
    ApiStatus::UPGRADE_REQUIRED,
    ApiStatus::PRECONDITION_REQUIRED,
    ApiStatus::TOO_MANY_REQUESTS,
    ApiStatus::REQUEST_HEADER_FIELDS_TOO_LARGE,
    ApiStatus::UNAVAILABLE_FOR_LEGAL_REASONS,
    ApiStatus::INTERNAL_SERVER_ERROR,
    ApiStatus::NOT_IMPLEMENTED,
    ApiStatus::BAD_GATEWAY,
    ApiStatus::SERVICE_UNAVAILABLE,
    ApiStatus::GATEWAY_TIMEOUT,
    ApiStatus::HTTP_VERSION_NOT_SUPPORTED,
    ApiStatus::VARIANT_ALSO_NEGOTIATES,
    ApiStatus::INSUFFICIENT_STORAGE,
    ApiStatus::LOOP_DETECTED,
    ApiStatus::NOT_EXTENDED,
    ApiStatus::NETWORK_AUTHENTICATION_REQUIRED,
];

/// The accepted input shapes for status resolution.
///
/// Callers rarely name this type; `impl Into<StatusSpec>` bounds on
/// [`ApiStatus::resolve`] and the builder let a canonical status, an HTTP
/// number, or a string alias flow in directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSpec {
    /// Already canonical; passes through resolution unchanged.
    Canonical(ApiStatus),
    /// An HTTP status number.
    Code(u16),
    /// A snake_case code, uppercase symbolic name, or digit-only string.
    Name(String),
}

impl From<ApiStatus> for StatusSpec {
    fn from(status: ApiStatus) -> Self {
        StatusSpec::Canonical(status)
    }
}

impl From<u16> for StatusSpec {
    fn from(code: u16) -> Self {
        StatusSpec::Code(code)
    }
}

impl From<&str> for StatusSpec {
    fn from(name: &str) -> Self {
        StatusSpec::Name(name.to_owned())
    }
}

impl From<String> for StatusSpec {
    fn from(name: String) -> Self {
        StatusSpec::Name(name)
    }
}
