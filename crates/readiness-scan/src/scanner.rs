//! Per-compartment orchestration with three-tier failure isolation.
//!
//! A compartment whose infra build or load balancer listing fails is
//! skipped; a load balancer that cannot be assembled is dropped; a failed
//! health probe only degrades the probed entity. See [`FailureScope`].
//!
//! [`FailureScope`]: readiness_core::models::FailureScope

use rayon::prelude::*;

use readiness_core::models::{
    Compartment, CompartmentScanResult, DroppedLoadBalancer, SkippedCompartment,
};
use readiness_core::traits::{IInfraCollector, ILoadBalancerCollector};
use readiness_core::tracing_setup::events;

use crate::assembler::LoadBalancerAssembler;

/// Result of scanning a single compartment.
#[derive(Debug, Clone)]
pub enum CompartmentOutcome {
    Scanned {
        result: CompartmentScanResult,
        dropped: Vec<DroppedLoadBalancer>,
    },
    Skipped(SkippedCompartment),
}

/// Results of scanning every discovered compartment, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub scanned: Vec<CompartmentScanResult>,
    pub skipped: Vec<SkippedCompartment>,
    pub dropped: Vec<DroppedLoadBalancer>,
}

impl ScanOutcome {
    pub fn load_balancer_count(&self) -> usize {
        self.scanned.iter().map(|r| r.load_balancers.len()).sum()
    }
}

impl FromIterator<CompartmentOutcome> for ScanOutcome {
    fn from_iter<I: IntoIterator<Item = CompartmentOutcome>>(iter: I) -> Self {
        let mut outcome = ScanOutcome::default();
        for item in iter {
            match item {
                CompartmentOutcome::Scanned { result, dropped } => {
                    outcome.scanned.push(result);
                    outcome.dropped.extend(dropped);
                }
                CompartmentOutcome::Skipped(skipped) => outcome.skipped.push(skipped),
            }
        }
        outcome
    }
}

pub struct CompartmentScanner<'a> {
    infra: &'a dyn IInfraCollector,
    load_balancers: &'a dyn ILoadBalancerCollector,
    parallel: bool,
}

impl<'a> CompartmentScanner<'a> {
    pub fn new(
        infra: &'a dyn IInfraCollector,
        load_balancers: &'a dyn ILoadBalancerCollector,
    ) -> Self {
        Self {
            infra,
            load_balancers,
            parallel: false,
        }
    }

    /// Fan compartments out across the rayon pool. Result order is unchanged.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn scan(&self, compartments: &[Compartment]) -> ScanOutcome {
        let total = compartments.len();
        let scan_one = |(index, compartment): (usize, &Compartment)| {
            tracing::info!(
                "[{}/{}] processing compartment: {}",
                index + 1,
                total,
                compartment.name
            );
            self.scan_compartment(compartment)
        };

        let outcomes: Vec<CompartmentOutcome> = if self.parallel {
            compartments.par_iter().enumerate().map(scan_one).collect()
        } else {
            compartments.iter().enumerate().map(scan_one).collect()
        };

        let outcome: ScanOutcome = outcomes.into_iter().collect();
        tracing::info!(
            scanned = outcome.scanned.len(),
            skipped = outcome.skipped.len(),
            dropped = outcome.dropped.len(),
            load_balancers = outcome.load_balancer_count(),
            "scan complete"
        );
        outcome
    }

    pub fn scan_compartment(&self, compartment: &Compartment) -> CompartmentOutcome {
        let _span = readiness_core::scan_span!(compartment.id, compartment.name).entered();

        let infra = match self.infra.build_context(&compartment.id) {
            Ok(infra) => infra,
            Err(e) => return skip(compartment, format!("infra collection failed: {e}")),
        };

        let summaries = match self.load_balancers.list_load_balancers(&compartment.id) {
            Ok(summaries) => summaries,
            Err(e) => return skip(compartment, format!("load balancer listing failed: {e}")),
        };

        let assembler = LoadBalancerAssembler::new(self.load_balancers);
        let mut load_balancers = Vec::with_capacity(summaries.len());
        let mut dropped = Vec::new();

        for summary in summaries {
            match assembler.collect(&summary.id, &infra) {
                Ok(detail) => load_balancers.push(detail),
                Err(e) => {
                    let display_name = summary.display_name.unwrap_or_default();
                    events::load_balancer_dropped(&summary.id, &display_name, &e);
                    dropped.push(DroppedLoadBalancer {
                        compartment_id: compartment.id.clone(),
                        load_balancer_id: summary.id,
                        display_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        CompartmentOutcome::Scanned {
            result: CompartmentScanResult {
                compartment: compartment.clone(),
                infra,
                load_balancers,
            },
            dropped,
        }
    }
}

fn skip(compartment: &Compartment, reason: String) -> CompartmentOutcome {
    events::compartment_skipped(&compartment.id, &compartment.name, &reason);
    CompartmentOutcome::Skipped(SkippedCompartment {
        compartment_id: compartment.id.clone(),
        reason,
    })
}
