use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use readiness_core::models::*;
use readiness_publish::{render_markdown, write_artifacts, ArtifactPaths};

fn report(issues: Vec<LoadBalancerRecord>, set_counts: BTreeMap<HealthStatus, usize>) -> Report {
    Report {
        metadata: ReportMetadata {
            report_name: "load_balancer_readiness_report".into(),
            run_id: "run-42".into(),
            generated_at_utc: Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
            region: "eu-amsterdam-1".into(),
            tenancy_id: "ocid1.tenancy..t".into(),
        },
        summary: ReportSummary {
            load_balancers_with_issues: issues.len(),
            backend_set_health_status_counts: set_counts,
            ..Default::default()
        },
        skipped_compartments: vec![],
        load_balancers: issues.clone(),
        issue_load_balancers: issues,
    }
}

fn issue_record(name: &str) -> LoadBalancerRecord {
    let sets = vec![
        BackendSet::new("ok-set", None, HealthProbe::reported(Some("OK".into())), vec![]),
        BackendSet::new("bad-set", None, HealthProbe::reported(Some("CRITICAL".into())), vec![]),
        BackendSet::new("lost-set", None, HealthProbe::unavailable("timeout"), vec![]),
    ];
    LoadBalancerRecord {
        compartment_id: "c1".into(),
        compartment_name: "Prod".into(),
        detail: LoadBalancerDetail::from_parts(LoadBalancerParts {
            load_balancer_id: format!("lb-{name}"),
            display_name: name.into(),
            lifecycle_state: "ACTIVE".into(),
            is_private: true,
            shape_name: None,
            time_created: None,
            ip_addresses: vec![],
            subnets: vec![],
            network_security_groups: vec![],
            listeners: vec![],
            backend_sets: sets,
        }),
        infra_context: InfraCounts::default(),
    }
}

#[test]
fn artifact_names_share_timestamped_stem() {
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let paths = ArtifactPaths::for_report(std::path::Path::new("out"), at);
    assert_eq!(paths.json, std::path::PathBuf::from("out/lb_readiness_report_20250102T030405Z.json"));
    assert_eq!(paths.markdown, std::path::PathBuf::from("out/lb_readiness_report_20250102T030405Z.md"));
}

#[test]
fn write_creates_output_dir_and_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let report = report(vec![], BTreeMap::new());
    let paths = ArtifactPaths::for_report(&dir.path().join("nested/out"), report.metadata.generated_at_utc);

    write_artifacts(&report, &paths).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.json).unwrap()).unwrap();
    assert_eq!(json["metadata"]["run_id"], "run-42");
    let markdown = std::fs::read_to_string(&paths.markdown).unwrap();
    assert!(markdown.contains("lb_readiness_report_20250601T080000Z.json"));
}

#[test]
fn write_into_a_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let report = report(vec![], BTreeMap::new());
    let paths = ArtifactPaths::for_report(&blocker, report.metadata.generated_at_utc);

    let err = write_artifacts(&report, &paths).unwrap_err();
    assert!(matches!(err, readiness_core::errors::PublishError::WriteFailed { .. }));
}

#[test]
fn markdown_for_clean_report_has_placeholder_rows() {
    let md = render_markdown(&report(vec![], BTreeMap::new()), "r.json");

    assert!(md.starts_with("# Load Balancer Readiness Report\n"));
    assert!(md.contains("- Region: `eu-amsterdam-1`"));
    assert!(md.contains("| Status | Count |\n|---|---:|\n| - | 0 |\n"));
    assert!(md.contains("| - | - | - | - | No load balancer backend issues found. |"));
    assert!(md.contains("## Full Data"));
    assert!(md.contains("`r.json`"));
}

#[test]
fn markdown_lists_non_ok_sets_per_issue() {
    let mut counts = BTreeMap::new();
    counts.insert(HealthStatus::from("WARNING"), 3);
    counts.insert(HealthStatus::from("CRITICAL"), 1);
    let md = render_markdown(&report(vec![issue_record("edge")], counts), "r.json");

    assert!(md.contains("| Prod | edge | ACTIVE | true | bad-set:CRITICAL, lost-set:UNAVAILABLE |"));
    assert!(!md.contains("ok-set"));
    assert!(!md.contains("No load balancer backend issues found."));

    let critical = md.find("| CRITICAL | 1 |").unwrap();
    let warning = md.find("| WARNING | 3 |").unwrap();
    assert!(critical < warning);
}

#[test]
fn markdown_caps_issue_rows() {
    let issues: Vec<LoadBalancerRecord> = (0..60).map(|i| issue_record(&format!("lb{i:02}"))).collect();
    let md = render_markdown(&report(issues, BTreeMap::new()), "r.json");
    let rows = md.lines().filter(|l| l.starts_with("| Prod |")).count();
    assert_eq!(rows, 50);
    assert!(md.contains("## LBs With Issues (Top 50)"));
}

#[test]
fn markdown_escapes_pipes_in_every_text_cell() {
    let mut record = issue_record("edge|blue");
    record.compartment_name = "Prod|EU".into();
    record.detail.lifecycle_state = "UPDATING|FAILED".into();
    let md = render_markdown(&report(vec![record], BTreeMap::new()), "r.json");

    assert!(md.contains(
        "| Prod\\|EU | edge\\|blue | UPDATING\\|FAILED | true | bad-set:CRITICAL, lost-set:UNAVAILABLE |"
    ));
}
