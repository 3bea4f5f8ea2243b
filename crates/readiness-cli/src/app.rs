//! Collaborator wiring for the `lb-readiness` binary.

use std::path::PathBuf;
use std::process::ExitCode;

use readiness_core::errors::ReadinessErrorCode;
use readiness_core::tracing_setup::init_tracing;
use readiness_core::ReadinessConfig;
use readiness_scan::InfraContextBuilder;
use readiness_snapshot::{FsObjectStore, SnapshotInventory, TenancySnapshot};

use crate::cli_args::Cli;
use crate::pipeline::{Collaborators, ReadinessPipeline, RunOutcome, UploadStatus, EXIT_FATAL};

/// Run the binary and map the outcome to a process exit code.
pub fn run(cli: Cli) -> ExitCode {
    ExitCode::from(execute(&cli))
}

/// Same as [`run`], returning the raw exit code.
pub fn execute(cli: &Cli) -> u8 {
    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = match ReadinessConfig::load(
        &project_root,
        cli.config.as_deref(),
        Some(&cli.overrides()),
    ) {
        Ok(config) => config,
        Err(e) => {
            // Tracing is configured from this config, so report on stderr directly.
            eprintln!("[ERROR] failed to load configuration: {}", e.coded_string());
            return EXIT_FATAL;
        }
    };
    init_tracing(&config.observability);

    let snapshot = match TenancySnapshot::from_path(&cli.snapshot) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "failed to initialize");
            return EXIT_FATAL;
        }
    };
    fill_from_snapshot(&mut config, &snapshot);

    let store = FsObjectStore::new(
        &cli.object_store_dir,
        config
            .publish
            .namespace
            .clone()
            .unwrap_or_else(|| snapshot.namespace.clone()),
    );
    if let Err(e) = store.provision(&snapshot.buckets) {
        tracing::error!(error = %e, root = %store.root().display(), "failed to prepare object store");
        return EXIT_FATAL;
    }

    let inventory = SnapshotInventory::new(snapshot);
    let infra = InfraContextBuilder::new(&inventory, &inventory);
    let collaborators = Collaborators {
        identity: &inventory,
        load_balancers: &inventory,
        infra: &infra,
        object_store: &store,
    };

    let outcome = ReadinessPipeline::new(&config, collaborators).run(cli.skip_upload);
    if let RunOutcome::Completed(summary) = &outcome {
        if let UploadStatus::Failed(_) = summary.upload {
            if !config.publish.fail_on_upload_error {
                tracing::warn!("upload failed; continuing because fail_on_upload_error is off");
            }
        }
    }
    outcome.exit_code(config.publish.fail_on_upload_error)
}

/// Tenancy and region default to the snapshot's own values.
fn fill_from_snapshot(config: &mut ReadinessConfig, snapshot: &TenancySnapshot) {
    if config.scan.tenancy_id.is_none() && !snapshot.tenancy.id.is_empty() {
        config.scan.tenancy_id = Some(snapshot.tenancy.id.clone());
    }
    if config.scan.region.is_none() && !snapshot.region.is_empty() {
        config.scan.region = Some(snapshot.region.clone());
    }
}
