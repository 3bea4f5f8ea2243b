//! Assembled load balancer detail, as it appears in the report.
//!
//! Every count field is derived from the collection it describes; the
//! constructors here are the only place counts are computed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::health::{HealthProbe, HealthStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LbIpAddress {
    pub ip_address: Option<String>,
    pub is_public: Option<bool>,
}

/// Subnet reference, resolved against the compartment's subnet table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetRef {
    pub subnet_id: String,
    pub subnet_name: String,
    pub cidr_block: String,
}

/// NSG reference, resolved against the compartment's NSG table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsgRef {
    pub nsg_id: String,
    pub nsg_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listener {
    pub name: String,
    pub protocol: Option<String>,
    pub port: Option<u16>,
    pub default_backend_set_name: Option<String>,
    pub path_route_set_name: Option<String>,
}

/// One routable target with its own health and instance mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    pub name: String,
    pub ip_address: Option<String>,
    pub port: Option<u16>,
    pub weight: Option<u32>,
    pub backup: bool,
    pub drain: bool,
    pub offline: bool,
    pub health_status: HealthStatus,
    pub health_error: Option<String>,
    pub mapped_instance_id: Option<String>,
    pub mapped_instance_name: String,
    pub mapped_vnic_id: Option<String>,
    pub mapped_subnet_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSet {
    pub name: String,
    pub policy: Option<String>,
    pub health_status: HealthStatus,
    pub health_error: Option<String>,
    pub backend_count: usize,
    pub backends: Vec<Backend>,
}

impl BackendSet {
    pub fn new(
        name: impl Into<String>,
        policy: Option<String>,
        probe: HealthProbe,
        backends: Vec<Backend>,
    ) -> Self {
        Self {
            name: name.into(),
            policy,
            health_status: probe.status,
            health_error: probe.error,
            backend_count: backends.len(),
            backends,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.health_status.is_ok()
    }
}

/// Inputs for [`LoadBalancerDetail::from_parts`].
#[derive(Debug, Clone)]
pub struct LoadBalancerParts {
    pub load_balancer_id: String,
    pub display_name: String,
    pub lifecycle_state: String,
    pub is_private: bool,
    pub shape_name: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    pub ip_addresses: Vec<LbIpAddress>,
    pub subnets: Vec<SubnetRef>,
    pub network_security_groups: Vec<NsgRef>,
    pub listeners: Vec<Listener>,
    pub backend_sets: Vec<BackendSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerDetail {
    pub load_balancer_id: String,
    pub display_name: String,
    pub lifecycle_state: String,
    pub is_private: bool,
    pub shape_name: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    pub ip_addresses: Vec<LbIpAddress>,
    pub subnets: Vec<SubnetRef>,
    pub network_security_groups: Vec<NsgRef>,
    pub listener_count: usize,
    pub listeners: Vec<Listener>,
    pub backend_set_count: usize,
    pub backend_count: usize,
    pub backend_sets: Vec<BackendSet>,
}

impl LoadBalancerDetail {
    pub fn from_parts(parts: LoadBalancerParts) -> Self {
        let backend_count = parts.backend_sets.iter().map(|s| s.backends.len()).sum();
        Self {
            load_balancer_id: parts.load_balancer_id,
            display_name: parts.display_name,
            lifecycle_state: parts.lifecycle_state,
            is_private: parts.is_private,
            shape_name: parts.shape_name,
            time_created: parts.time_created,
            ip_addresses: parts.ip_addresses,
            subnets: parts.subnets,
            network_security_groups: parts.network_security_groups,
            listener_count: parts.listeners.len(),
            listeners: parts.listeners,
            backend_set_count: parts.backend_sets.len(),
            backend_count,
            backend_sets: parts.backend_sets,
        }
    }

    /// Any backend set whose status is not exactly `OK`.
    pub fn has_issue(&self) -> bool {
        self.backend_sets.iter().any(|set| !set.is_ok())
    }

    pub fn issue_backend_sets(&self) -> impl Iterator<Item = &BackendSet> {
        self.backend_sets.iter().filter(|set| !set.is_ok())
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle_state == crate::constants::LIFECYCLE_ACTIVE
    }
}
