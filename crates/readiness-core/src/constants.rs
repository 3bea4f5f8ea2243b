/// Name stamped into every report's metadata.
pub const REPORT_NAME: &str = "load_balancer_readiness_report";

/// Stem shared by the JSON and Markdown artifacts.
pub const ARTIFACT_STEM: &str = "lb_readiness_report";

/// `strftime` pattern for the artifact timestamp suffix.
pub const ARTIFACT_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Scheme used when addressing uploaded objects.
pub const OBJECT_URI_SCHEME: &str = "oci";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_MARKDOWN: &str = "text/markdown";

/// Lifecycle state of a healthy, serving load balancer.
pub const LIFECYCLE_ACTIVE: &str = "ACTIVE";

/// Maximum number of issue rows rendered into the Markdown artifact.
pub const MARKDOWN_ISSUE_ROW_LIMIT: usize = 50;

// Sentinels for references that have no matching inventory metadata.
pub const UNKNOWN_INSTANCE: &str = "UNKNOWN_INSTANCE";
pub const UNKNOWN_SUBNET: &str = "UNKNOWN_SUBNET";
pub const UNKNOWN_NSG: &str = "UNKNOWN_NSG";
pub const UNKNOWN_BACKEND: &str = "UNKNOWN_BACKEND";
