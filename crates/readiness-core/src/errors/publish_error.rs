//! Artifact writing and upload errors.

use super::error_code::{self, ReadinessErrorCode};
use super::CollectorError;

/// Errors raised while writing local artifacts or running the upload cascade.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("failed to write artifact {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to resolve object storage namespace: {0}")]
    NamespaceUnresolved(#[source] CollectorError),

    #[error("no accessible object storage bucket found")]
    NoCandidates,

    #[error("upload of {object_name} to bucket {bucket} failed: {reason}")]
    UploadFailed {
        bucket: String,
        object_name: String,
        reason: String,
    },

    #[error("upload failed for all {attempts} bucket candidates; last error: {last_error}")]
    Exhausted { attempts: usize, last_error: String },
}

impl ReadinessErrorCode for PublishError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::WriteFailed { .. } => error_code::ARTIFACT_WRITE_FAILED,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::NamespaceUnresolved(_) => error_code::NAMESPACE_UNRESOLVED,
            Self::NoCandidates => error_code::NO_BUCKET_CANDIDATES,
            Self::UploadFailed { .. } => error_code::UPLOAD_FAILED,
            Self::Exhausted { .. } => error_code::PUBLISH_EXHAUSTED,
        }
    }
}
