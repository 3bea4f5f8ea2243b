use serde::{Deserialize, Serialize};

use super::defaults;

/// Which part of the tenancy to scan, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Tenancy to scan. Falls back to the inventory source's own tenancy.
    pub tenancy_id: Option<String>,
    /// Region stamped into the report. Falls back to the inventory source.
    pub region: Option<String>,
    /// Narrower root than the tenancy.
    pub root_compartment_id: Option<String>,
    /// Walk descendants of the root rather than direct children only.
    pub include_subcompartments: bool,
    /// Fan compartment scans out across a thread pool.
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tenancy_id: None,
            region: None,
            root_compartment_id: None,
            include_subcompartments: defaults::DEFAULT_INCLUDE_SUBCOMPARTMENTS,
            parallel: defaults::DEFAULT_PARALLEL_SCAN,
        }
    }
}
