//! Readiness aggregation as a pure fold over scan results.

use chrono::{DateTime, Utc};

use readiness_core::constants::REPORT_NAME;
use readiness_core::models::{
    CompartmentScanResult, LoadBalancerRecord, Report, ReportMetadata, ReportSummary,
    SkippedCompartment,
};

use crate::ordering::issue_order;

/// Run-level values stamped into the report metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Captured once, before aggregation starts.
    pub generated_at: DateTime<Utc>,
    pub region: String,
    pub tenancy_id: String,
    pub run_id: String,
}

/// Accumulator threaded through the fold.
#[derive(Default)]
struct Rollup {
    records: Vec<LoadBalancerRecord>,
    summary: ReportSummary,
}

impl Rollup {
    fn absorb(mut self, result: CompartmentScanResult) -> Self {
        let counts = result.infra.counts();
        self.summary.scanned_compartment_count += 1;

        for detail in result.load_balancers {
            let summary = &mut self.summary;
            summary.total_load_balancers += 1;
            summary.total_listeners += detail.listener_count;
            summary.total_backend_sets += detail.backend_set_count;
            summary.total_backends += detail.backend_count;
            if detail.is_private {
                summary.total_private_load_balancers += 1;
            } else {
                summary.total_public_load_balancers += 1;
            }

            for set in &detail.backend_sets {
                *summary
                    .backend_set_health_status_counts
                    .entry(set.health_status.clone())
                    .or_insert(0) += 1;
                for backend in &set.backends {
                    *summary
                        .backend_health_status_counts
                        .entry(backend.health_status.clone())
                        .or_insert(0) += 1;
                }
            }

            self.records.push(LoadBalancerRecord {
                compartment_id: result.compartment.id.clone(),
                compartment_name: result.compartment.name.clone(),
                detail,
                infra_context: counts,
            });
        }
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ReadinessAggregator;

impl ReadinessAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Build the report. Load balancer records keep scan order; the issue
    /// list is a stably sorted copy of the records with a non-`OK` backend set.
    pub fn analyze(
        &self,
        context: ReportContext,
        scanned: Vec<CompartmentScanResult>,
        skipped: Vec<SkippedCompartment>,
    ) -> Report {
        let Rollup {
            records,
            mut summary,
        } = scanned.into_iter().fold(Rollup::default(), Rollup::absorb);

        let mut issues: Vec<LoadBalancerRecord> =
            records.iter().filter(|r| r.has_issue()).cloned().collect();
        issues.sort_by(issue_order);

        summary.skipped_compartment_count = skipped.len();
        summary.load_balancers_with_issues = issues.len();

        tracing::info!(
            load_balancers = summary.total_load_balancers,
            issues = summary.load_balancers_with_issues,
            skipped = summary.skipped_compartment_count,
            "aggregation complete"
        );

        Report {
            metadata: ReportMetadata {
                report_name: REPORT_NAME.to_string(),
                run_id: context.run_id,
                generated_at_utc: context.generated_at,
                region: context.region,
                tenancy_id: context.tenancy_id,
            },
            summary,
            skipped_compartments: skipped,
            issue_load_balancers: issues,
            load_balancers: records,
        }
    }
}
