//! Collector traits replayed from a [`TenancySnapshot`].

use std::collections::{HashSet, VecDeque};

use readiness_core::api::{
    HealthResponse, InstanceResource, LoadBalancerResource, LoadBalancerSummary, NsgResource,
    SubnetResource, VnicAttachmentResource, VnicResource,
};
use readiness_core::errors::{CollectorError, CollectorResult};
use readiness_core::models::Compartment;
use readiness_core::traits::{
    IComputeInventory, IIdentityCollector, ILoadBalancerCollector, INetworkInventory,
};

use crate::snapshot::{Owned, TenancySnapshot};

const IDENTITY: &str = "identity";
const LOAD_BALANCER: &str = "load_balancer";
const COMPUTE: &str = "compute";
const NETWORK: &str = "network";

/// Read-only inventory over a captured tenancy.
///
/// Recorded failures are checked before every lookup, so a captured
/// access-denied response surfaces exactly where the live API raised it.
pub struct SnapshotInventory {
    snapshot: TenancySnapshot,
}

impl SnapshotInventory {
    pub fn new(snapshot: TenancySnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &TenancySnapshot {
        &self.snapshot
    }

    fn replay(&self, service: &str, operation: &str, target: &str) -> CollectorResult<()> {
        match self.snapshot.failure_for(operation, target) {
            Some(f) => Err(CollectorError::service(
                service,
                operation,
                f.status,
                f.message.clone(),
            )),
            None => Ok(()),
        }
    }

    fn tenancy_compartment(&self) -> Compartment {
        Compartment::new(&self.snapshot.tenancy.id, &self.snapshot.tenancy.name)
    }

    fn is_tenancy(&self, id: &str) -> bool {
        id == self.snapshot.tenancy.id
    }

    /// Direct children of `parent_id`, including non-listable ones.
    fn children_of<'s>(
        &'s self,
        parent_id: &'s str,
    ) -> impl Iterator<Item = &'s crate::snapshot::CompartmentRecord> + 's {
        let parent_is_tenancy = self.is_tenancy(parent_id);
        self.snapshot
            .compartments
            .iter()
            .filter(move |c| match c.parent_id.as_deref() {
                Some(p) => p == parent_id,
                None => parent_is_tenancy,
            })
    }
}

fn owned_by<T: Clone>(records: &[Owned<T>], compartment_id: &str) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.compartment_id == compartment_id)
        .map(|r| r.resource.clone())
        .collect()
}

impl IIdentityCollector for SnapshotInventory {
    fn get_tenancy(&self, tenancy_id: &str) -> CollectorResult<Compartment> {
        self.replay(IDENTITY, "get_tenancy", tenancy_id)?;
        if self.is_tenancy(tenancy_id) {
            Ok(self.tenancy_compartment())
        } else {
            Err(CollectorError::not_found("tenancy", tenancy_id))
        }
    }

    fn get_compartment(&self, compartment_id: &str) -> CollectorResult<Compartment> {
        self.replay(IDENTITY, "get_compartment", compartment_id)?;
        if self.is_tenancy(compartment_id) {
            return Ok(self.tenancy_compartment());
        }
        self.snapshot
            .compartments
            .iter()
            .find(|c| c.id == compartment_id)
            .map(|c| Compartment::new(&c.id, &c.name))
            .ok_or_else(|| CollectorError::not_found("compartment", compartment_id))
    }

    fn list_compartments(
        &self,
        parent_id: &str,
        subtree: bool,
    ) -> CollectorResult<Vec<Compartment>> {
        self.replay(IDENTITY, "list_compartments", parent_id)?;

        if !subtree {
            return Ok(self
                .children_of(parent_id)
                .filter(|c| c.is_listable())
                .map(|c| Compartment::new(&c.id, &c.name))
                .collect());
        }

        // Walk parent links; visited ids guard against cycles in hand-edited snapshots.
        let mut result = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from([parent_id]);
        while let Some(id) = queue.pop_front() {
            if !visited.insert(id) {
                continue;
            }
            // Inaccessible compartments are still traversed; only listable ones are returned.
            for child in self.children_of(id) {
                if child.id != parent_id && child.is_listable() {
                    result.push(Compartment::new(&child.id, &child.name));
                }
                queue.push_back(child.id.as_str());
            }
        }
        Ok(result)
    }
}

impl ILoadBalancerCollector for SnapshotInventory {
    fn list_load_balancers(
        &self,
        compartment_id: &str,
    ) -> CollectorResult<Vec<LoadBalancerSummary>> {
        self.replay(LOAD_BALANCER, "list_load_balancers", compartment_id)?;
        Ok(owned_by(&self.snapshot.load_balancers, compartment_id)
            .into_iter()
            .map(|lb| LoadBalancerSummary {
                id: lb.id,
                display_name: lb.display_name,
            })
            .collect())
    }

    fn get_load_balancer(&self, load_balancer_id: &str) -> CollectorResult<LoadBalancerResource> {
        self.replay(LOAD_BALANCER, "get_load_balancer", load_balancer_id)?;
        self.snapshot
            .load_balancers
            .iter()
            .find(|lb| lb.resource.id == load_balancer_id)
            .map(|lb| lb.resource.clone())
            .ok_or_else(|| CollectorError::not_found("load balancer", load_balancer_id))
    }

    fn get_backend_set_health(
        &self,
        load_balancer_id: &str,
        backend_set_name: &str,
    ) -> CollectorResult<HealthResponse> {
        let target = format!("{load_balancer_id}/{backend_set_name}");
        self.replay(LOAD_BALANCER, "get_backend_set_health", &target)?;
        self.snapshot
            .health
            .iter()
            .find(|h| {
                h.load_balancer_id == load_balancer_id
                    && h.backend_set == backend_set_name
                    && h.backend.is_none()
            })
            .map(|h| HealthResponse {
                status: h.status.clone(),
            })
            .ok_or_else(|| CollectorError::not_found("backend set health", target))
    }

    fn get_backend_health(
        &self,
        load_balancer_id: &str,
        backend_set_name: &str,
        backend_name: &str,
    ) -> CollectorResult<HealthResponse> {
        let target = format!("{load_balancer_id}/{backend_set_name}/{backend_name}");
        self.replay(LOAD_BALANCER, "get_backend_health", &target)?;
        self.snapshot
            .health
            .iter()
            .find(|h| {
                h.load_balancer_id == load_balancer_id
                    && h.backend_set == backend_set_name
                    && h.backend.as_deref() == Some(backend_name)
            })
            .map(|h| HealthResponse {
                status: h.status.clone(),
            })
            .ok_or_else(|| CollectorError::not_found("backend health", target))
    }
}

impl IComputeInventory for SnapshotInventory {
    fn list_instances(&self, compartment_id: &str) -> CollectorResult<Vec<InstanceResource>> {
        self.replay(COMPUTE, "list_instances", compartment_id)?;
        Ok(owned_by(&self.snapshot.instances, compartment_id))
    }

    fn list_vnic_attachments(
        &self,
        compartment_id: &str,
    ) -> CollectorResult<Vec<VnicAttachmentResource>> {
        self.replay(COMPUTE, "list_vnic_attachments", compartment_id)?;
        Ok(owned_by(&self.snapshot.vnic_attachments, compartment_id))
    }
}

impl INetworkInventory for SnapshotInventory {
    fn get_vnic(&self, vnic_id: &str) -> CollectorResult<VnicResource> {
        self.replay(NETWORK, "get_vnic", vnic_id)?;
        self.snapshot
            .vnics
            .iter()
            .find(|v| v.id == vnic_id)
            .cloned()
            .ok_or_else(|| CollectorError::not_found("vnic", vnic_id))
    }

    fn list_subnets(&self, compartment_id: &str) -> CollectorResult<Vec<SubnetResource>> {
        self.replay(NETWORK, "list_subnets", compartment_id)?;
        Ok(owned_by(&self.snapshot.subnets, compartment_id))
    }

    fn list_network_security_groups(
        &self,
        compartment_id: &str,
    ) -> CollectorResult<Vec<NsgResource>> {
        self.replay(NETWORK, "list_network_security_groups", compartment_id)?;
        Ok(owned_by(&self.snapshot.network_security_groups, compartment_id))
    }
}
