//! Serialized tenancy inventory.
//!
//! Owned resources carry a `compartment_id` next to the raw API record,
//! flattened into one JSON object:
//!
//! ```json
//! { "compartment_id": "ocid1.compartment..prod", "id": "ocid1.subnet..a", "display_name": "app" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use readiness_core::api::{
    InstanceResource, LoadBalancerResource, NsgResource, SubnetResource, VnicAttachmentResource,
    VnicResource,
};
use readiness_core::constants::LIFECYCLE_ACTIVE;

use crate::errors::SnapshotError;

/// Captured responses for one tenancy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenancySnapshot {
    pub tenancy: TenancyRecord,
    pub region: String,
    pub namespace: String,
    pub compartments: Vec<CompartmentRecord>,
    pub load_balancers: Vec<Owned<LoadBalancerResource>>,
    pub health: Vec<HealthRecord>,
    pub instances: Vec<Owned<InstanceResource>>,
    pub vnic_attachments: Vec<Owned<VnicAttachmentResource>>,
    pub vnics: Vec<VnicResource>,
    pub subnets: Vec<Owned<SubnetResource>>,
    pub network_security_groups: Vec<Owned<NsgResource>>,
    pub buckets: Vec<BucketRecord>,
    pub failures: Vec<RecordedFailure>,
}

impl TenancySnapshot {
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The recorded failure for `operation` on `target`, if any.
    /// A failure recorded with target `*` matches every target.
    pub fn failure_for(&self, operation: &str, target: &str) -> Option<&RecordedFailure> {
        self.failures
            .iter()
            .find(|f| f.operation == operation && (f.target == target || f.target == "*"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenancyRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompartmentRecord {
    pub id: String,
    pub name: String,
    /// `None` for a direct child of the tenancy.
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default = "default_lifecycle_state")]
    pub lifecycle_state: String,
    #[serde(default = "default_accessible")]
    pub accessible: bool,
}

impl CompartmentRecord {
    pub fn is_listable(&self) -> bool {
        self.accessible && self.lifecycle_state == LIFECYCLE_ACTIVE
    }
}

fn default_lifecycle_state() -> String {
    LIFECYCLE_ACTIVE.to_string()
}

fn default_accessible() -> bool {
    true
}

/// A raw API record tagged with its owning compartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owned<T> {
    pub compartment_id: String,
    #[serde(flatten)]
    pub resource: T,
}

impl<T> Owned<T> {
    pub fn new(compartment_id: impl Into<String>, resource: T) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            resource,
        }
    }
}

/// Health API response for a backend set, or for one backend when `backend` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub load_balancer_id: String,
    pub backend_set: String,
    #[serde(default)]
    pub backend: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRecord {
    pub name: String,
    /// Owning compartment. Unowned buckets are listed in every compartment.
    #[serde(default)]
    pub compartment_id: Option<String>,
}

/// A captured service error, replayed for matching calls.
///
/// `operation` is the collector method name (e.g. `list_load_balancers`).
/// `target` is its primary argument; health probes use `lb/set` and
/// `lb/set/backend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedFailure {
    pub operation: String,
    pub target: String,
    #[serde(default = "default_failure_status")]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

fn default_failure_status() -> u16 {
    404
}
