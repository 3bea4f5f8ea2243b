//! Single-bucket artifact upload.

use std::path::Path;

use readiness_core::constants::OBJECT_URI_SCHEME;
use readiness_core::errors::PublishError;
use readiness_core::models::UploadResult;
use readiness_core::traits::IObjectStore;

/// `oci://<bucket>@<namespace>/<object_name>`
pub fn object_uri(namespace: &str, bucket: &str, object_name: &str) -> String {
    format!("{OBJECT_URI_SCHEME}://{bucket}@{namespace}/{object_name}")
}

/// Uploads files into one bucket under a fixed prefix.
pub struct ObjectStorageUploader<'a> {
    store: &'a dyn IObjectStore,
    namespace: &'a str,
    bucket: &'a str,
    prefix: &'a str,
}

impl<'a> ObjectStorageUploader<'a> {
    pub fn new(
        store: &'a dyn IObjectStore,
        namespace: &'a str,
        bucket: &'a str,
        prefix: &'a str,
    ) -> Self {
        Self {
            store,
            namespace,
            bucket,
            prefix: prefix.trim_matches('/'),
        }
    }

    /// `<prefix>/<file_name>`, or just `<file_name>` without a prefix.
    pub fn object_name(&self, file_name: &str) -> String {
        if self.prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{file_name}", self.prefix)
        }
    }

    pub fn upload_file(&self, path: &Path, content_type: &str) -> Result<UploadResult, PublishError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let object_name = self.object_name(&file_name);

        let failed = |reason: String| PublishError::UploadFailed {
            bucket: self.bucket.to_string(),
            object_name: object_name.clone(),
            reason,
        };

        let body = std::fs::read(path)
            .map_err(|e| failed(format!("cannot read {}: {e}", path.display())))?;
        self.store
            .put_object(self.namespace, self.bucket, &object_name, &body, content_type)
            .map_err(|e| failed(e.to_string()))?;

        Ok(UploadResult {
            namespace: self.namespace.to_string(),
            bucket: self.bucket.to_string(),
            uri: object_uri(self.namespace, self.bucket, &object_name),
            object_name,
        })
    }
}
