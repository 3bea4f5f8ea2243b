//! Per-compartment infra lookup tables built from compute and network inventory.

use std::collections::HashMap;

use readiness_core::constants::UNKNOWN_INSTANCE;
use readiness_core::errors::CollectorResult;
use readiness_core::models::{InfraContext, InstanceMeta, NsgMeta, SubnetMeta};
use readiness_core::traits::{IComputeInventory, IInfraCollector, INetworkInventory};

/// [`IInfraCollector`] over the lower-level compute and network inventories.
///
/// Any underlying call failure fails the whole build.
pub struct InfraContextBuilder<'a> {
    compute: &'a dyn IComputeInventory,
    network: &'a dyn INetworkInventory,
}

impl<'a> InfraContextBuilder<'a> {
    pub fn new(compute: &'a dyn IComputeInventory, network: &'a dyn INetworkInventory) -> Self {
        Self { compute, network }
    }

    fn map_private_ips(
        &self,
        compartment_id: &str,
        instance_names: &HashMap<String, String>,
    ) -> CollectorResult<(usize, HashMap<String, InstanceMeta>)> {
        let attachments = self.compute.list_vnic_attachments(compartment_id)?;
        let mut ip_to_instance = HashMap::new();

        for attachment in &attachments {
            let Some(vnic_id) = attachment.vnic_id.as_deref().filter(|id| !id.is_empty()) else {
                continue;
            };
            let vnic = self.network.get_vnic(vnic_id)?;
            let Some(private_ip) = vnic.private_ip.filter(|ip| !ip.is_empty()) else {
                continue;
            };

            let instance_id = attachment.instance_id.clone().unwrap_or_default();
            let instance_name = instance_names
                .get(&instance_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_INSTANCE.to_string());

            ip_to_instance.insert(
                private_ip,
                InstanceMeta {
                    instance_id,
                    instance_name,
                    vnic_id: vnic_id.to_string(),
                    subnet_id: vnic.subnet_id.unwrap_or_default(),
                },
            );
        }

        Ok((attachments.len(), ip_to_instance))
    }
}

impl IInfraCollector for InfraContextBuilder<'_> {
    fn build_context(&self, compartment_id: &str) -> CollectorResult<InfraContext> {
        let instances = self.compute.list_instances(compartment_id)?;
        let instance_names: HashMap<String, String> = instances
            .iter()
            .map(|i| (i.id.clone(), i.display_name.clone().unwrap_or_default()))
            .collect();

        let (vnic_attachment_count, ip_to_instance) =
            self.map_private_ips(compartment_id, &instance_names)?;

        let subnet_by_id = self
            .network
            .list_subnets(compartment_id)?
            .into_iter()
            .map(|s| {
                let meta = SubnetMeta {
                    id: s.id.clone(),
                    display_name: s.display_name.unwrap_or_default(),
                    cidr_block: s.cidr_block.unwrap_or_default(),
                    vcn_id: s.vcn_id.unwrap_or_default(),
                };
                (s.id, meta)
            })
            .collect();

        let nsg_by_id = self
            .network
            .list_network_security_groups(compartment_id)?
            .into_iter()
            .map(|n| {
                let meta = NsgMeta {
                    id: n.id.clone(),
                    display_name: n.display_name.unwrap_or_default(),
                    vcn_id: n.vcn_id.unwrap_or_default(),
                };
                (n.id, meta)
            })
            .collect();

        let mut instances_by_subnet: HashMap<String, usize> = HashMap::new();
        for meta in ip_to_instance.values() {
            if !meta.subnet_id.is_empty() {
                *instances_by_subnet.entry(meta.subnet_id.clone()).or_insert(0) += 1;
            }
        }

        tracing::debug!(
            compartment_id,
            instances = instances.len(),
            mapped_ips = ip_to_instance.len(),
            "infra context built"
        );

        Ok(InfraContext {
            instance_count: instances.len(),
            vnic_attachment_count,
            ip_to_instance,
            subnet_by_id,
            nsg_by_id,
            instances_by_subnet,
        })
    }
}
