use clap::Parser;
use readiness_cli::{execute, Cli};

#[test]
fn binary_flow_writes_and_uploads_sample_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("lb-readiness.toml");
    std::fs::write(
        &config_path,
        format!(
            "[output]\noutput_dir = {:?}\n\n[publish]\nprefix = \"/nightly/\"\n",
            dir.path().join("out").display().to_string()
        ),
    )
    .unwrap();
    let store_dir = dir.path().join("store");

    let cli = Cli::try_parse_from([
        "lb-readiness".to_string(),
        "--snapshot".to_string(),
        test_fixtures::fixture_path("tenancies/sample.json").display().to_string(),
        "--config".to_string(),
        config_path.display().to_string(),
        "--object-store-dir".to_string(),
        store_dir.display().to_string(),
        "--bucket".to_string(),
        "shared-reports".to_string(),
    ])
    .unwrap();

    assert_eq!(execute(&cli), 0);

    let uploaded: Vec<_> = std::fs::read_dir(store_dir.join("samplens/shared-reports/nightly"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(uploaded.len(), 2);
    assert!(uploaded.iter().any(|n| n.ends_with(".json")));
    assert!(uploaded.iter().any(|n| n.ends_with(".md")));

    let written = std::fs::read_dir(dir.path().join("out")).unwrap().count();
    assert_eq!(written, 2);
}

#[test]
fn missing_snapshot_exits_with_fatal_code() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("empty.toml");
    std::fs::write(&config_path, "").unwrap();

    let cli = Cli::try_parse_from([
        "lb-readiness".to_string(),
        "--snapshot".to_string(),
        dir.path().join("absent.json").display().to_string(),
        "--config".to_string(),
        config_path.display().to_string(),
        "--skip-upload".to_string(),
    ])
    .unwrap();

    assert_eq!(execute(&cli), 1);
}

#[test]
fn missing_explicit_config_exits_with_fatal_code() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli::try_parse_from([
        "lb-readiness".to_string(),
        "--snapshot".to_string(),
        "unused.json".to_string(),
        "--config".to_string(),
        dir.path().join("nope.toml").display().to_string(),
    ])
    .unwrap();

    assert_eq!(execute(&cli), 1);
}
