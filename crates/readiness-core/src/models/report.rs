//! The terminal report artifact.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{HealthStatus, InfraCounts, LoadBalancerDetail, SkippedCompartment};

/// Full readiness report. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub skipped_compartments: Vec<SkippedCompartment>,
    pub issue_load_balancers: Vec<LoadBalancerRecord>,
    pub load_balancers: Vec<LoadBalancerRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub report_name: String,
    pub run_id: String,
    pub generated_at_utc: DateTime<Utc>,
    pub region: String,
    pub tenancy_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub scanned_compartment_count: usize,
    pub skipped_compartment_count: usize,
    pub total_load_balancers: usize,
    pub total_private_load_balancers: usize,
    pub total_public_load_balancers: usize,
    pub total_listeners: usize,
    pub total_backend_sets: usize,
    pub total_backends: usize,
    pub backend_set_health_status_counts: BTreeMap<HealthStatus, usize>,
    pub backend_health_status_counts: BTreeMap<HealthStatus, usize>,
    pub load_balancers_with_issues: usize,
}

/// A load balancer annotated with its owning compartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancerRecord {
    pub compartment_id: String,
    pub compartment_name: String,
    #[serde(flatten)]
    pub detail: LoadBalancerDetail,
    pub infra_context: InfraCounts,
}

impl LoadBalancerRecord {
    pub fn has_issue(&self) -> bool {
        self.detail.has_issue()
    }
}
