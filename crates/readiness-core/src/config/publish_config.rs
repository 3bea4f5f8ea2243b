use serde::{Deserialize, Serialize};

use super::defaults;

/// Object storage upload settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Namespace override. Queried from the object store when unset.
    pub namespace: Option<String>,
    /// Bucket tried before any discovered bucket.
    pub bucket: Option<String>,
    /// Object name prefix, stored without leading or trailing `/`.
    pub prefix: String,
    /// Append buckets found in the scanned compartments to the candidate list.
    pub auto_discover_bucket: bool,
    /// Exit non-zero when every candidate fails.
    pub fail_on_upload_error: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            bucket: None,
            prefix: defaults::DEFAULT_OBJECT_PREFIX.to_string(),
            auto_discover_bucket: defaults::DEFAULT_AUTO_DISCOVER_BUCKET,
            fail_on_upload_error: defaults::DEFAULT_FAIL_ON_UPLOAD_ERROR,
        }
    }
}

