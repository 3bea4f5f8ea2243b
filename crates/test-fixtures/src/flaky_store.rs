//! In-memory object store with failure injection.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use readiness_core::errors::{CollectorError, CollectorResult};
use readiness_core::traits::IObjectStore;

/// One `put_object` call, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRecord {
    pub bucket: String,
    pub object_name: String,
    pub content_type: String,
    pub size: usize,
    pub succeeded: bool,
}

#[derive(Default)]
pub struct FlakyObjectStore {
    namespace: Option<String>,
    /// compartment id -> bucket names
    buckets: BTreeMap<String, Vec<String>>,
    failing_buckets: BTreeSet<String>,
    /// (bucket, object name suffix)
    failing_objects: BTreeSet<(String, String)>,
    failing_listings: BTreeSet<String>,
    puts: Mutex<Vec<PutRecord>>,
}

impl FlakyObjectStore {
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..Default::default()
        }
    }

    /// A store whose namespace lookup fails.
    pub fn without_namespace() -> Self {
        Self::default()
    }

    pub fn with_bucket(mut self, compartment_id: &str, bucket: &str) -> Self {
        self.buckets
            .entry(compartment_id.into())
            .or_default()
            .push(bucket.into());
        self
    }

    /// Every upload into `bucket` fails.
    pub fn failing_bucket(mut self, bucket: &str) -> Self {
        self.failing_buckets.insert(bucket.into());
        self
    }

    /// Uploads into `bucket` whose object name ends with `suffix` fail.
    pub fn failing_object(mut self, bucket: &str, suffix: &str) -> Self {
        self.failing_objects.insert((bucket.into(), suffix.into()));
        self
    }

    /// Bucket listing for `compartment_id` fails.
    pub fn failing_listing(mut self, compartment_id: &str) -> Self {
        self.failing_listings.insert(compartment_id.into());
        self
    }

    pub fn puts(&self) -> Vec<PutRecord> {
        self.puts.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<PutRecord> {
        self.puts().into_iter().filter(|p| p.succeeded).collect()
    }

    fn should_fail(&self, bucket: &str, object_name: &str) -> bool {
        self.failing_buckets.contains(bucket)
            || self
                .failing_objects
                .iter()
                .any(|(b, suffix)| b == bucket && object_name.ends_with(suffix.as_str()))
    }
}

impl IObjectStore for FlakyObjectStore {
    fn get_namespace(&self) -> CollectorResult<String> {
        self.namespace.clone().ok_or_else(|| {
            CollectorError::service("object_storage", "get_namespace", 401, "NotAuthenticated")
        })
    }

    fn list_buckets(&self, _namespace: &str, compartment_id: &str) -> CollectorResult<Vec<String>> {
        if self.failing_listings.contains(compartment_id) {
            return Err(CollectorError::service(
                "object_storage",
                "list_buckets",
                403,
                "NotAuthorized",
            ));
        }
        Ok(self.buckets.get(compartment_id).cloned().unwrap_or_default())
    }

    fn put_object(
        &self,
        _namespace: &str,
        bucket: &str,
        object_name: &str,
        body: &[u8],
        content_type: &str,
    ) -> CollectorResult<()> {
        let failed = self.should_fail(bucket, object_name);
        self.puts.lock().unwrap().push(PutRecord {
            bucket: bucket.into(),
            object_name: object_name.into(),
            content_type: content_type.into(),
            size: body.len(),
            succeeded: !failed,
        });
        if failed {
            return Err(CollectorError::service(
                "object_storage",
                "put_object",
                403,
                format!("write denied for bucket {bucket}"),
            ));
        }
        Ok(())
    }
}
