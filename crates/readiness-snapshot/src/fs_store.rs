//! Object store over a local directory tree.
//!
//! Layout: `<root>/<namespace>/<bucket>/<object>`. Buckets are directories;
//! a `.compartment` file inside a bucket names its owning compartment.
//! Buckets without the marker are listed in every compartment.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use readiness_core::errors::{CollectorError, CollectorResult};
use readiness_core::traits::IObjectStore;

use crate::snapshot::BucketRecord;

const SERVICE: &str = "object_storage";
const OWNER_MARKER: &str = ".compartment";

pub struct FsObjectStore {
    root: PathBuf,
    namespace: String,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            namespace: namespace.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn namespace_dir(&self) -> PathBuf {
        self.root.join(&self.namespace)
    }

    /// Create a bucket directory, recording its owner when given.
    pub fn create_bucket(&self, name: &str, compartment_id: Option<&str>) -> io::Result<()> {
        if !is_safe_bucket_name(name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bucket name {name:?}"),
            ));
        }
        let dir = self.namespace_dir().join(name);
        fs::create_dir_all(&dir)?;
        if let Some(owner) = compartment_id {
            fs::write(dir.join(OWNER_MARKER), owner)?;
        }
        Ok(())
    }

    /// Create every bucket in `buckets` that does not exist yet.
    pub fn provision(&self, buckets: &[BucketRecord]) -> io::Result<()> {
        for bucket in buckets {
            if !self.namespace_dir().join(&bucket.name).is_dir() {
                self.create_bucket(&bucket.name, bucket.compartment_id.as_deref())?;
            }
        }
        Ok(())
    }

    /// Filesystem path of a stored object.
    pub fn object_path(&self, bucket: &str, object_name: &str) -> PathBuf {
        self.namespace_dir().join(bucket).join(object_name)
    }

    fn check_namespace(&self, operation: &str, namespace: &str) -> CollectorResult<()> {
        if namespace == self.namespace {
            Ok(())
        } else {
            Err(CollectorError::service(
                SERVICE,
                operation,
                404,
                format!("namespace {namespace} not found"),
            ))
        }
    }
}

fn io_error(operation: &str, err: io::Error) -> CollectorError {
    CollectorError::service(SERVICE, operation, 500, err.to_string())
}

/// Bucket names are a single plain path component.
fn is_safe_bucket_name(bucket: &str) -> bool {
    let mut components = Path::new(bucket).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Object names are relative paths without `..` or root components.
fn is_safe_object_name(object_name: &str) -> bool {
    !object_name.is_empty()
        && Path::new(object_name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

impl IObjectStore for FsObjectStore {
    fn get_namespace(&self) -> CollectorResult<String> {
        if self.namespace.is_empty() {
            return Err(CollectorError::service(
                SERVICE,
                "get_namespace",
                404,
                "no namespace configured",
            ));
        }
        Ok(self.namespace.clone())
    }

    fn list_buckets(&self, namespace: &str, compartment_id: &str) -> CollectorResult<Vec<String>> {
        self.check_namespace("list_buckets", namespace)?;

        let dir = self.namespace_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut buckets = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| io_error("list_buckets", e))? {
            let entry = entry.map_err(|e| io_error("list_buckets", e))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let visible = match fs::read_to_string(path.join(OWNER_MARKER)) {
                Ok(owner) => owner.trim() == compartment_id,
                Err(e) if e.kind() == io::ErrorKind::NotFound => true,
                Err(e) => return Err(io_error("list_buckets", e)),
            };
            if visible {
                buckets.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        buckets.sort();
        Ok(buckets)
    }

    fn put_object(
        &self,
        namespace: &str,
        bucket: &str,
        object_name: &str,
        body: &[u8],
        content_type: &str,
    ) -> CollectorResult<()> {
        self.check_namespace("put_object", namespace)?;

        if !is_safe_bucket_name(bucket) {
            return Err(CollectorError::Malformed {
                resource: "bucket name".to_string(),
                id: bucket.to_string(),
                reason: "must be a single path component".to_string(),
            });
        }
        let bucket_dir = self.namespace_dir().join(bucket);
        if !bucket_dir.is_dir() {
            return Err(CollectorError::service(
                SERVICE,
                "put_object",
                404,
                format!("bucket {bucket} not found"),
            ));
        }
        if !is_safe_object_name(object_name) {
            return Err(CollectorError::Malformed {
                resource: "object name".to_string(),
                id: object_name.to_string(),
                reason: "must be a relative path".to_string(),
            });
        }

        let path = bucket_dir.join(object_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error("put_object", e))?;
        }
        fs::write(&path, body).map_err(|e| io_error("put_object", e))?;

        tracing::debug!(
            bucket,
            object_name,
            content_type,
            bytes = body.len(),
            "object stored"
        );
        Ok(())
    }
}
