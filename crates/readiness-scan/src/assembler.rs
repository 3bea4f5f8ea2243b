//! Load balancer detail assembly.
//!
//! Converts a raw [`LoadBalancerResource`] into a [`LoadBalancerDetail`],
//! probing health for every backend set and backend. A failed probe degrades
//! only the probed entity to `UNAVAILABLE`; the rest of the record is kept.

use readiness_core::api::{BackendResource, LoadBalancerResource};
use readiness_core::constants::{UNKNOWN_BACKEND, UNKNOWN_INSTANCE, UNKNOWN_NSG, UNKNOWN_SUBNET};
use readiness_core::errors::{CollectorError, CollectorResult};
use readiness_core::models::{
    Backend, BackendSet, HealthProbe, InfraContext, LbIpAddress, Listener, LoadBalancerDetail,
    LoadBalancerParts, NsgRef, SubnetRef,
};
use readiness_core::traits::ILoadBalancerCollector;
use readiness_core::tracing_setup::events;

pub struct LoadBalancerAssembler<'a> {
    collector: &'a dyn ILoadBalancerCollector,
}

impl<'a> LoadBalancerAssembler<'a> {
    pub fn new(collector: &'a dyn ILoadBalancerCollector) -> Self {
        Self { collector }
    }

    /// Fetch the detail record for `load_balancer_id` and assemble it.
    pub fn collect(
        &self,
        load_balancer_id: &str,
        infra: &InfraContext,
    ) -> CollectorResult<LoadBalancerDetail> {
        let resource = self.collector.get_load_balancer(load_balancer_id)?;
        self.assemble(resource, infra)
    }

    /// Assemble a fetched record. Fails only when the record has no id.
    pub fn assemble(
        &self,
        resource: LoadBalancerResource,
        infra: &InfraContext,
    ) -> CollectorResult<LoadBalancerDetail> {
        if resource.id.is_empty() {
            return Err(CollectorError::Malformed {
                resource: "load balancer".to_string(),
                id: resource.display_name.unwrap_or_default(),
                reason: "missing id".to_string(),
            });
        }

        let lb_id = resource.id.as_str();

        let listeners = resource
            .listeners
            .iter()
            .map(|(name, l)| Listener {
                name: name.clone(),
                protocol: l.protocol.clone(),
                port: l.port,
                default_backend_set_name: l.default_backend_set_name.clone(),
                path_route_set_name: l.path_route_set_name.clone(),
            })
            .collect();

        let backend_sets = resource
            .backend_sets
            .iter()
            .map(|(set_name, set)| {
                let probe = self.probe_backend_set(lb_id, set_name);
                let backends = set
                    .backends
                    .iter()
                    .map(|b| self.assemble_backend(lb_id, set_name, b, infra))
                    .collect();
                BackendSet::new(set_name.clone(), set.policy.clone(), probe, backends)
            })
            .collect();

        let ip_addresses = resource
            .ip_addresses
            .iter()
            .map(|ip| LbIpAddress {
                ip_address: ip.ip_address.clone(),
                is_public: ip.is_public,
            })
            .collect();

        Ok(LoadBalancerDetail::from_parts(LoadBalancerParts {
            subnets: map_subnets(&resource.subnet_ids, infra),
            network_security_groups: map_nsgs(&resource.network_security_group_ids, infra),
            load_balancer_id: resource.id.clone(),
            display_name: resource.display_name.clone().unwrap_or_default(),
            lifecycle_state: resource.lifecycle_state.clone().unwrap_or_default(),
            is_private: resource.is_private.unwrap_or(false),
            shape_name: resource.shape_name.clone(),
            time_created: resource.time_created,
            ip_addresses,
            listeners,
            backend_sets,
        }))
    }

    fn probe_backend_set(&self, lb_id: &str, set_name: &str) -> HealthProbe {
        match self.collector.get_backend_set_health(lb_id, set_name) {
            Ok(health) => HealthProbe::reported(health.status),
            Err(e) => {
                events::probe_degraded(lb_id, set_name, &e);
                HealthProbe::unavailable(e)
            }
        }
    }

    fn assemble_backend(
        &self,
        lb_id: &str,
        set_name: &str,
        backend: &BackendResource,
        infra: &InfraContext,
    ) -> Backend {
        let name = backend
            .name
            .clone()
            .unwrap_or_else(|| UNKNOWN_BACKEND.to_string());

        let probe = match self.collector.get_backend_health(lb_id, set_name, &name) {
            Ok(health) => HealthProbe::reported(health.status),
            Err(e) => {
                events::probe_degraded(lb_id, &format!("{set_name}/{name}"), &e);
                HealthProbe::unavailable(e)
            }
        };

        let mapped = backend
            .ip_address
            .as_deref()
            .and_then(|ip| infra.instance_for_ip(ip));

        Backend {
            name,
            ip_address: backend.ip_address.clone(),
            port: backend.port,
            weight: backend.weight,
            backup: backend.backup.unwrap_or(false),
            drain: backend.drain.unwrap_or(false),
            offline: backend.offline.unwrap_or(false),
            health_status: probe.status,
            health_error: probe.error,
            mapped_instance_id: mapped.map(|m| m.instance_id.clone()),
            mapped_instance_name: mapped
                .map(|m| m.instance_name.clone())
                .unwrap_or_else(|| UNKNOWN_INSTANCE.to_string()),
            mapped_vnic_id: mapped.map(|m| m.vnic_id.clone()),
            mapped_subnet_id: mapped.map(|m| m.subnet_id.clone()),
        }
    }
}

fn map_subnets(subnet_ids: &[String], infra: &InfraContext) -> Vec<SubnetRef> {
    subnet_ids
        .iter()
        .map(|id| match infra.subnet(id) {
            Some(meta) => SubnetRef {
                subnet_id: id.clone(),
                subnet_name: meta.display_name.clone(),
                cidr_block: meta.cidr_block.clone(),
            },
            None => SubnetRef {
                subnet_id: id.clone(),
                subnet_name: UNKNOWN_SUBNET.to_string(),
                cidr_block: String::new(),
            },
        })
        .collect()
}

fn map_nsgs(nsg_ids: &[String], infra: &InfraContext) -> Vec<NsgRef> {
    nsg_ids
        .iter()
        .map(|id| NsgRef {
            nsg_id: id.clone(),
            nsg_name: infra
                .nsg(id)
                .map(|meta| meta.display_name.clone())
                .unwrap_or_else(|| UNKNOWN_NSG.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_core::models::SubnetMeta;

    #[test]
    fn unknown_references_map_to_sentinels() {
        let mut infra = InfraContext::default();
        infra.subnet_by_id.insert(
            "s1".into(),
            SubnetMeta {
                id: "s1".into(),
                display_name: "app".into(),
                cidr_block: "10.0.1.0/24".into(),
                vcn_id: "v".into(),
            },
        );

        let subnets = map_subnets(&["s1".into(), "s9".into()], &infra);
        assert_eq!(subnets[0].subnet_name, "app");
        assert_eq!(subnets[1].subnet_name, UNKNOWN_SUBNET);
        assert_eq!(subnets[1].cidr_block, "");

        let nsgs = map_nsgs(&["n1".into()], &infra);
        assert_eq!(nsgs[0].nsg_name, UNKNOWN_NSG);
    }
}
