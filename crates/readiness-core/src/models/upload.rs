use serde::{Deserialize, Serialize};

/// Location of one successfully uploaded artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub namespace: String,
    pub bucket: String,
    pub object_name: String,
    pub uri: String,
}
