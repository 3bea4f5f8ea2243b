//! Per-compartment compute/network inventory used to enrich load balancer records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Instance identity behind a private IP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceMeta {
    pub instance_id: String,
    pub instance_name: String,
    pub vnic_id: String,
    pub subnet_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetMeta {
    pub id: String,
    pub display_name: String,
    pub cidr_block: String,
    pub vcn_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsgMeta {
    pub id: String,
    pub display_name: String,
    pub vcn_id: String,
}

/// Read-only lookup tables for one compartment. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfraContext {
    pub instance_count: usize,
    pub vnic_attachment_count: usize,
    pub ip_to_instance: HashMap<String, InstanceMeta>,
    pub subnet_by_id: HashMap<String, SubnetMeta>,
    pub nsg_by_id: HashMap<String, NsgMeta>,
    /// Number of mapped private IPs per subnet id.
    pub instances_by_subnet: HashMap<String, usize>,
}

impl InfraContext {
    pub fn instance_for_ip(&self, ip: &str) -> Option<&InstanceMeta> {
        self.ip_to_instance.get(ip)
    }

    pub fn subnet(&self, subnet_id: &str) -> Option<&SubnetMeta> {
        self.subnet_by_id.get(subnet_id)
    }

    pub fn nsg(&self, nsg_id: &str) -> Option<&NsgMeta> {
        self.nsg_by_id.get(nsg_id)
    }

    /// Counts stamped onto every load balancer record of this compartment.
    pub fn counts(&self) -> InfraCounts {
        InfraCounts {
            instance_count_in_compartment: self.instance_count,
            vnic_attachment_count_in_compartment: self.vnic_attachment_count,
        }
    }
}

/// Compartment-level inventory counts attached to a load balancer record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraCounts {
    pub instance_count_in_compartment: usize,
    pub vnic_attachment_count_in_compartment: usize,
}
