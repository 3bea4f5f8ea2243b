//! Stable error codes attached to structured log events.

/// Every error enum exposes a stable code string so log pipelines can
/// group failures without parsing messages.
pub trait ReadinessErrorCode {
    /// Returns the error code string (e.g., "COLLECTOR_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const COLLECTOR_ERROR: &str = "COLLECTOR_ERROR";
pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
pub const MALFORMED_RESOURCE: &str = "MALFORMED_RESOURCE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DISCOVERY_FAILED: &str = "DISCOVERY_FAILED";
pub const ARTIFACT_WRITE_FAILED: &str = "ARTIFACT_WRITE_FAILED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const NAMESPACE_UNRESOLVED: &str = "NAMESPACE_UNRESOLVED";
pub const NO_BUCKET_CANDIDATES: &str = "NO_BUCKET_CANDIDATES";
pub const UPLOAD_FAILED: &str = "UPLOAD_FAILED";
pub const PUBLISH_EXHAUSTED: &str = "PUBLISH_EXHAUSTED";
pub const SNAPSHOT_ERROR: &str = "SNAPSHOT_ERROR";
