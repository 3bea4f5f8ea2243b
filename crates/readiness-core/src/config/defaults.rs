// Single source of truth for all default values.

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "lb-readiness.toml";

// --- Scan ---
pub const DEFAULT_INCLUDE_SUBCOMPARTMENTS: bool = true;
pub const DEFAULT_PARALLEL_SCAN: bool = false;

// --- Output ---
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// --- Publish ---
pub const DEFAULT_OBJECT_PREFIX: &str = "lb-readiness-report";
pub const DEFAULT_AUTO_DISCOVER_BUCKET: bool = true;
pub const DEFAULT_FAIL_ON_UPLOAD_ERROR: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
