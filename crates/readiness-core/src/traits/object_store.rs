use crate::errors::CollectorResult;

/// Object storage used to publish report artifacts.
pub trait IObjectStore: Send + Sync {
    fn get_namespace(&self) -> CollectorResult<String>;

    /// Names of the buckets owned by `compartment_id`.
    fn list_buckets(&self, namespace: &str, compartment_id: &str) -> CollectorResult<Vec<String>>;

    fn put_object(
        &self,
        namespace: &str,
        bucket: &str,
        object_name: &str,
        body: &[u8],
        content_type: &str,
    ) -> CollectorResult<()>;
}
