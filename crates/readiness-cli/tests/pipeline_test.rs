use std::path::Path;

use readiness_cli::pipeline::{EXIT_FATAL, EXIT_OK, EXIT_PUBLISH_FAILED};
use readiness_cli::{Collaborators, ReadinessPipeline, RunOutcome, UploadStatus};
use readiness_core::errors::ReadinessError;
use readiness_core::models::HealthStatus;
use readiness_core::ReadinessConfig;
use readiness_scan::InfraContextBuilder;
use readiness_snapshot::{FsObjectStore, SnapshotInventory, TenancySnapshot};
use test_fixtures::FlakyObjectStore;

fn config(output_dir: &Path, snapshot: &TenancySnapshot) -> ReadinessConfig {
    let mut config = ReadinessConfig::default();
    config.scan.tenancy_id = Some(snapshot.tenancy.id.clone());
    config.scan.region = Some(snapshot.region.clone());
    config.output.output_dir = output_dir.to_path_buf();
    config
}

fn run_with_store(
    config: &ReadinessConfig,
    inventory: &SnapshotInventory,
    store: &dyn readiness_core::traits::IObjectStore,
    skip_upload: bool,
) -> RunOutcome {
    let infra = InfraContextBuilder::new(inventory, inventory);
    let collaborators = Collaborators {
        identity: inventory,
        load_balancers: inventory,
        infra: &infra,
        object_store: store,
    };
    ReadinessPipeline::new(config, collaborators).run(skip_upload)
}

#[test]
fn sample_tenancy_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = test_fixtures::sample_tenancy();
    let config = config(&dir.path().join("out"), &snapshot);
    let store = FsObjectStore::new(dir.path().join("store"), snapshot.namespace.clone());
    store.provision(&snapshot.buckets).unwrap();
    let inventory = SnapshotInventory::new(snapshot);

    let outcome = run_with_store(&config, &inventory, &store, false);
    assert_eq!(outcome.exit_code(true), EXIT_OK);

    let RunOutcome::Completed(summary) = outcome else {
        panic!("run failed");
    };
    let report = &summary.report;
    assert_eq!(report.summary.scanned_compartment_count, 4);
    assert_eq!(report.summary.skipped_compartment_count, 1);
    assert_eq!(report.summary.total_load_balancers, 4);
    assert_eq!(report.summary.total_private_load_balancers, 3);
    assert_eq!(report.summary.total_public_load_balancers, 1);
    assert_eq!(report.summary.total_listeners, 4);
    assert_eq!(report.summary.total_backends, 6);
    assert_eq!(report.metadata.region, "us-ashburn-1");
    assert_eq!(summary.dropped.len(), 1);

    let issues: Vec<&str> = report
        .issue_load_balancers
        .iter()
        .map(|r| r.detail.display_name.as_str())
        .collect();
    assert_eq!(issues, vec!["stage-web", "api-prod"]);

    let backends = &report.summary.backend_health_status_counts;
    assert_eq!(backends[&HealthStatus::from("OK")], 3);
    assert_eq!(backends[&HealthStatus::from("UNAVAILABLE")], 1);

    assert!(summary.artifacts.json.exists());
    assert!(summary.artifacts.markdown.exists());
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary.artifacts.json).unwrap()).unwrap();
    assert_eq!(written["summary"]["load_balancers_with_issues"], 2);
    assert_eq!(written["issue_load_balancers"][0]["display_name"], "stage-web");

    let UploadStatus::Uploaded(success) = &summary.upload else {
        panic!("upload failed: {:?}", summary.upload);
    };
    assert_eq!(success.bucket, "reports-prod");
    for upload in &success.uploads {
        assert!(upload.uri.starts_with("oci://reports-prod@samplens/lb-readiness-report/"));
        assert!(store.object_path(&upload.bucket, &upload.object_name).exists());
    }
}

#[test]
fn skip_upload_writes_artifacts_only() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = test_fixtures::sample_tenancy();
    let config = config(dir.path(), &snapshot);
    let store = FlakyObjectStore::new("ns").with_bucket("ocid1.compartment.oc1..prod", "b");
    let inventory = SnapshotInventory::new(snapshot);

    let outcome = run_with_store(&config, &inventory, &store, true);
    assert_eq!(outcome.exit_code(true), EXIT_OK);
    assert!(store.puts().is_empty());
    let RunOutcome::Completed(summary) = outcome else {
        panic!("run failed");
    };
    assert!(matches!(summary.upload, UploadStatus::Skipped));
}

#[test]
fn upload_failure_exit_code_depends_on_config() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = test_fixtures::sample_tenancy();
    let config = config(dir.path(), &snapshot);
    // No buckets anywhere: the cascade has no candidates.
    let store = FlakyObjectStore::new("ns");
    let inventory = SnapshotInventory::new(snapshot);

    let outcome = run_with_store(&config, &inventory, &store, false);
    assert_eq!(outcome.exit_code(true), EXIT_PUBLISH_FAILED);
    assert_eq!(outcome.exit_code(false), EXIT_OK);
}

#[test]
fn discovery_failure_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut snapshot = test_fixtures::sample_tenancy();
    snapshot.failures.push(readiness_snapshot::RecordedFailure {
        operation: "list_compartments".into(),
        target: "*".into(),
        status: 401,
        message: "NotAuthenticated".into(),
    });
    let out = dir.path().join("out");
    let config = config(&out, &snapshot);
    let store = FlakyObjectStore::new("ns");
    let inventory = SnapshotInventory::new(snapshot);

    let outcome = run_with_store(&config, &inventory, &store, false);
    assert_eq!(outcome.exit_code(true), EXIT_FATAL);
    assert!(matches!(outcome, RunOutcome::Failed(ReadinessError::Discovery(_))));
    assert!(!out.exists());
}

#[test]
fn missing_tenancy_id_is_a_config_failure() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = test_fixtures::sample_tenancy();
    let mut config = config(dir.path(), &snapshot);
    config.scan.tenancy_id = None;
    let store = FlakyObjectStore::new("ns");
    let inventory = SnapshotInventory::new(snapshot);

    let outcome = run_with_store(&config, &inventory, &store, true);
    assert!(matches!(outcome, RunOutcome::Failed(ReadinessError::Config(_))));
}

#[test]
fn narrowed_root_scans_only_its_subtree() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = test_fixtures::sample_tenancy();
    let mut config = config(dir.path(), &snapshot);
    config.scan.root_compartment_id = Some("ocid1.compartment.oc1..prod".into());
    let store = FlakyObjectStore::new("ns");
    let inventory = SnapshotInventory::new(snapshot);

    let RunOutcome::Completed(summary) = run_with_store(&config, &inventory, &store, true) else {
        panic!("run failed");
    };
    let names: Vec<&str> = summary
        .report
        .load_balancers
        .iter()
        .map(|r| r.detail.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["pay-gw", "web-prod", "api-prod"]);
}
