//! Per-compartment scan results and the failure tiers that produce gaps in them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Compartment, InfraContext, LoadBalancerDetail};

/// The scope at which a failure was absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureScope {
    /// Infra build or load balancer listing failed; the compartment is skipped.
    Compartment,
    /// One load balancer could not be assembled; it is omitted.
    LoadBalancer,
    /// One health probe failed; the entity is kept with an `UNAVAILABLE` status.
    Probe,
}

impl FailureScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compartment => "compartment",
            Self::LoadBalancer => "load_balancer",
            Self::Probe => "probe",
        }
    }
}

impl fmt::Display for FailureScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One compartment's inventory. Consumed by the aggregator.
#[derive(Debug, Clone)]
pub struct CompartmentScanResult {
    pub compartment: Compartment,
    pub infra: InfraContext,
    pub load_balancers: Vec<LoadBalancerDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCompartment {
    pub compartment_id: String,
    pub reason: String,
}

/// A load balancer omitted from its compartment's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedLoadBalancer {
    pub compartment_id: String,
    pub load_balancer_id: String,
    pub display_name: String,
    pub reason: String,
}
