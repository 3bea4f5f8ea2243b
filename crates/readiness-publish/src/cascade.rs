//! Upload cascade across candidate buckets.
//!
//! Each candidate receives the JSON artifact, then the Markdown artifact.
//! The first candidate that accepts both wins. A candidate that fails part
//! way is abandoned without rollback and the next one is tried.

use readiness_core::config::PublishConfig;
use readiness_core::constants::{CONTENT_TYPE_JSON, CONTENT_TYPE_MARKDOWN};
use readiness_core::errors::{PublishError, ReadinessErrorCode};
use readiness_core::models::UploadResult;
use readiness_core::traits::IObjectStore;

use crate::artifacts::ArtifactPaths;
use crate::buckets::{build_candidates, discover_candidate_buckets};
use crate::uploader::ObjectStorageUploader;

/// A candidate bucket that rejected an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAttempt {
    pub bucket: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSuccess {
    pub namespace: String,
    pub bucket: String,
    /// JSON upload first, then Markdown.
    pub uploads: Vec<UploadResult>,
    /// Candidates tried before the winning one.
    pub failed_attempts: Vec<FailedAttempt>,
}

pub struct PublishCascade<'a> {
    store: &'a dyn IObjectStore,
    config: &'a PublishConfig,
}

impl<'a> PublishCascade<'a> {
    pub fn new(store: &'a dyn IObjectStore, config: &'a PublishConfig) -> Self {
        Self { store, config }
    }

    /// Namespace from config, or queried from the store.
    pub fn resolve_namespace(&self) -> Result<String, PublishError> {
        match &self.config.namespace {
            Some(ns) => Ok(ns.clone()),
            None => self
                .store
                .get_namespace()
                .map_err(PublishError::NamespaceUnresolved),
        }
    }

    /// Ordered candidate list. Discovery runs only when enabled.
    pub fn candidates(&self, namespace: &str, compartment_ids: &[String]) -> Vec<String> {
        let discovered = if self.config.auto_discover_bucket {
            discover_candidate_buckets(self.store, namespace, compartment_ids)
        } else {
            Vec::new()
        };
        build_candidates(self.config.bucket.as_deref(), discovered)
    }

    /// Upload both artifacts to the first candidate that accepts them.
    pub fn publish(
        &self,
        artifacts: &ArtifactPaths,
        compartment_ids: &[String],
    ) -> Result<PublishSuccess, PublishError> {
        let namespace = self.resolve_namespace()?;
        let _span = readiness_core::publish_span!(namespace).entered();

        let candidates = self.candidates(&namespace, compartment_ids);
        if candidates.is_empty() {
            return Err(PublishError::NoCandidates);
        }
        tracing::info!(candidates = ?candidates, "bucket candidates resolved");

        let mut failed_attempts = Vec::new();
        for bucket in &candidates {
            tracing::info!(bucket = %bucket, "attempting upload");
            match self.upload_pair(&namespace, bucket, artifacts) {
                Ok(uploads) => {
                    for upload in &uploads {
                        tracing::info!(uri = %upload.uri, "uploaded");
                    }
                    return Ok(PublishSuccess {
                        namespace,
                        bucket: bucket.clone(),
                        uploads,
                        failed_attempts,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        bucket = %bucket,
                        code = e.error_code(),
                        error = %e,
                        "upload failed, trying next candidate"
                    );
                    failed_attempts.push(FailedAttempt {
                        bucket: bucket.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Err(PublishError::Exhausted {
            attempts: failed_attempts.len(),
            last_error: failed_attempts
                .last()
                .map(|a| a.error.clone())
                .unwrap_or_default(),
        })
    }

    fn upload_pair(
        &self,
        namespace: &str,
        bucket: &str,
        artifacts: &ArtifactPaths,
    ) -> Result<Vec<UploadResult>, PublishError> {
        let uploader = ObjectStorageUploader::new(self.store, namespace, bucket, &self.config.prefix);
        let json = uploader.upload_file(&artifacts.json, CONTENT_TYPE_JSON)?;
        let markdown = uploader.upload_file(&artifacts.markdown, CONTENT_TYPE_MARKDOWN)?;
        Ok(vec![json, markdown])
    }
}
