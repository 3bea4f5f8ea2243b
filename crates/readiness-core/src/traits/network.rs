use crate::api::{NsgResource, SubnetResource, VnicResource};
use crate::errors::CollectorResult;

/// Virtual network inventory.
pub trait INetworkInventory: Send + Sync {
    fn get_vnic(&self, vnic_id: &str) -> CollectorResult<VnicResource>;

    fn list_subnets(&self, compartment_id: &str) -> CollectorResult<Vec<SubnetResource>>;

    fn list_network_security_groups(
        &self,
        compartment_id: &str,
    ) -> CollectorResult<Vec<NsgResource>>;
}
