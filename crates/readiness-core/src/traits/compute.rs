use crate::api::{InstanceResource, VnicAttachmentResource};
use crate::errors::CollectorResult;

/// Compute inventory for one compartment (all pages).
pub trait IComputeInventory: Send + Sync {
    fn list_instances(&self, compartment_id: &str) -> CollectorResult<Vec<InstanceResource>>;

    fn list_vnic_attachments(
        &self,
        compartment_id: &str,
    ) -> CollectorResult<Vec<VnicAttachmentResource>>;
}
