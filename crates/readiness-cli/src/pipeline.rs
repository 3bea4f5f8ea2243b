//! End-to-end run: discovery, scan, aggregation, artifacts, upload cascade.

use chrono::Utc;
use uuid::Uuid;

use readiness_analysis::{ReadinessAggregator, ReportContext};
use readiness_core::errors::{ConfigError, PublishError, ReadinessError, ReadinessErrorCode};
use readiness_core::models::{Compartment, DroppedLoadBalancer, Report};
use readiness_core::traits::{IIdentityCollector, IInfraCollector, ILoadBalancerCollector, IObjectStore};
use readiness_core::ReadinessConfig;
use readiness_publish::{write_artifacts, ArtifactPaths, PublishCascade, PublishSuccess};
use readiness_scan::{CompartmentDiscoverer, CompartmentScanner, ScanOutcome};

/// Everything a successful collection produces before upload.
struct Collected {
    report: Report,
    artifacts: ArtifactPaths,
    compartments: Vec<Compartment>,
    dropped: Vec<DroppedLoadBalancer>,
}

/// Exit code for a complete run, including one with upload skipped.
pub const EXIT_OK: u8 = 0;
/// Exit code when initialization or discovery fails.
pub const EXIT_FATAL: u8 = 1;
/// Exit code when the upload cascade fails and `fail_on_upload_error` is set.
pub const EXIT_PUBLISH_FAILED: u8 = 2;

/// Collaborators injected into a run.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub identity: &'a dyn IIdentityCollector,
    pub load_balancers: &'a dyn ILoadBalancerCollector,
    pub infra: &'a dyn IInfraCollector,
    pub object_store: &'a dyn IObjectStore,
}

#[derive(Debug)]
pub enum UploadStatus {
    Skipped,
    Uploaded(PublishSuccess),
    Failed(PublishError),
}

#[derive(Debug)]
pub struct RunSummary {
    pub report: Report,
    pub artifacts: ArtifactPaths,
    /// Load balancers omitted from the report.
    pub dropped: Vec<DroppedLoadBalancer>,
    pub upload: UploadStatus,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Artifacts were written. Upload may still have failed.
    Completed(Box<RunSummary>),
    /// Nothing was written.
    Failed(ReadinessError),
}

impl RunOutcome {
    pub fn exit_code(&self, fail_on_upload_error: bool) -> u8 {
        match self {
            RunOutcome::Failed(_) => EXIT_FATAL,
            RunOutcome::Completed(summary) => match summary.upload {
                UploadStatus::Failed(_) if fail_on_upload_error => EXIT_PUBLISH_FAILED,
                _ => EXIT_OK,
            },
        }
    }
}

pub struct ReadinessPipeline<'a> {
    config: &'a ReadinessConfig,
    collaborators: Collaborators<'a>,
}

impl<'a> ReadinessPipeline<'a> {
    pub fn new(config: &'a ReadinessConfig, collaborators: Collaborators<'a>) -> Self {
        Self {
            config,
            collaborators,
        }
    }

    pub fn run(&self, skip_upload: bool) -> RunOutcome {
        match self.collect_and_write() {
            Ok(collected) => {
                let upload = if skip_upload {
                    tracing::info!("upload skipped (--skip-upload)");
                    UploadStatus::Skipped
                } else {
                    self.upload(&collected.artifacts, &collected.compartments)
                };
                RunOutcome::Completed(Box::new(RunSummary {
                    report: collected.report,
                    artifacts: collected.artifacts,
                    dropped: collected.dropped,
                    upload,
                }))
            }
            Err(e) => {
                tracing::error!(code = e.error_code(), error = %e, "readiness run failed");
                RunOutcome::Failed(e)
            }
        }
    }

    fn collect_and_write(&self) -> Result<Collected, ReadinessError> {
        let scan_config = &self.config.scan;
        let tenancy_id = scan_config
            .tenancy_id
            .as_deref()
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "scan.tenancy_id".to_string(),
                message: "tenancy id is required".to_string(),
            })?;

        let compartments = {
            let _span = readiness_core::discovery_span!(
                tenancy_id,
                scan_config.root_compartment_id.as_deref().unwrap_or(tenancy_id)
            )
            .entered();
            CompartmentDiscoverer::new(self.collaborators.identity)
                .discover(
                    tenancy_id,
                    scan_config.root_compartment_id.as_deref(),
                    scan_config.include_subcompartments,
                )
                .map_err(ReadinessError::Discovery)?
        };
        tracing::info!("discovered {} accessible compartments", compartments.len());

        let ScanOutcome {
            scanned,
            skipped,
            dropped,
        } = CompartmentScanner::new(self.collaborators.infra, self.collaborators.load_balancers)
            .with_parallel(scan_config.parallel)
            .scan(&compartments);

        let context = ReportContext {
            generated_at: Utc::now(),
            region: scan_config.region.clone().unwrap_or_default(),
            tenancy_id: tenancy_id.to_string(),
            run_id: Uuid::new_v4().to_string(),
        };
        let report = ReadinessAggregator::new().analyze(context, scanned, skipped);

        let artifacts =
            ArtifactPaths::for_report(&self.config.output.output_dir, report.metadata.generated_at_utc);
        write_artifacts(&report, &artifacts)?;

        Ok(Collected {
            report,
            artifacts,
            compartments,
            dropped,
        })
    }

    /// Bucket discovery covers every discovered compartment, skipped ones included.
    fn upload(&self, artifacts: &ArtifactPaths, compartments: &[Compartment]) -> UploadStatus {
        let compartment_ids: Vec<String> = compartments.iter().map(|c| c.id.clone()).collect();

        match PublishCascade::new(self.collaborators.object_store, &self.config.publish)
            .publish(artifacts, &compartment_ids)
        {
            Ok(success) => UploadStatus::Uploaded(success),
            Err(e) => {
                tracing::error!(code = e.error_code(), error = %e, "upload failed for all bucket candidates");
                UploadStatus::Failed(e)
            }
        }
    }
}
