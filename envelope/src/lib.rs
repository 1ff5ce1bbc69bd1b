//! Standardized API response envelopes.
//!
//! Every endpoint of a service, success or failure, emits the same
//! [`responses::ApiResponse`] shape: a success flag, message, HTTP code,
//! and optional payload/error/pagination/metadata sections. Statuses may
//! be given canonically, as HTTP numbers, or as string aliases; the
//! [`status`] registry normalizes all of them with a total fallback.

pub mod builder;
pub mod meta;
pub mod responses;
pub mod status;

pub use builder::ResponseBuilder;
pub use meta::{MetaSource, SystemMetaSource};
pub use responses::{ApiResponse, ErrorDetail, MetaData, PaginationMeta};
pub use status::{ApiStatus, StatusSpec};
