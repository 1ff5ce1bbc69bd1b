use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Source of the generated metadata fields.
///
/// The production implementation reads the system clock and a random
/// uuid; tests inject a fixed source to make envelopes reproducible.
#[cfg_attr(feature = "test-support", mockall::automock)]
pub trait MetaSource {
    /// ISO-8601 timestamp for the moment of generation.
    fn timestamp(&self) -> String;

    /// Unique id for correlating a response with logs.
    fn request_id(&self) -> String;
}

/// Default [`MetaSource`] backed by the system clock and uuid v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMetaSource;

impl MetaSource for SystemMetaSource {
    fn timestamp(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    fn request_id(&self) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("req_{}", &hex[..12])
    }
}
