use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry from a load balancer listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerSummary {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Full load balancer record from a detail call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerResource {
    pub id: String,
    pub display_name: Option<String>,
    pub lifecycle_state: Option<String>,
    pub is_private: Option<bool>,
    pub shape_name: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    pub ip_addresses: Vec<IpAddressResource>,
    pub subnet_ids: Vec<String>,
    pub network_security_group_ids: Vec<String>,
    /// Keyed by listener name.
    pub listeners: BTreeMap<String, ListenerResource>,
    /// Keyed by backend set name.
    pub backend_sets: BTreeMap<String, BackendSetResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpAddressResource {
    pub ip_address: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerResource {
    pub protocol: Option<String>,
    pub port: Option<u16>,
    pub default_backend_set_name: Option<String>,
    pub path_route_set_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSetResource {
    pub policy: Option<String>,
    pub backends: Vec<BackendResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendResource {
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub port: Option<u16>,
    pub weight: Option<u32>,
    pub backup: Option<bool>,
    pub drain: Option<bool>,
    pub offline: Option<bool>,
}

/// Response of a backend set or backend health call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    pub status: Option<String>,
}

impl HealthResponse {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }
}
