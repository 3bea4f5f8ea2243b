use readiness_core::traits::IObjectStore;
use readiness_snapshot::{BucketRecord, FsObjectStore};

#[test]
fn put_object_writes_under_namespace_and_bucket() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsObjectStore::new(dir.path(), "ns");
    store.create_bucket("reports", None).unwrap();

    store
        .put_object("ns", "reports", "lb/a.json", b"{}", "application/json")
        .unwrap();

    let written = std::fs::read(dir.path().join("ns/reports/lb/a.json")).unwrap();
    assert_eq!(written, b"{}");
    assert_eq!(store.object_path("reports", "lb/a.json"), dir.path().join("ns/reports/lb/a.json"));
}

#[test]
fn put_object_into_missing_bucket_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsObjectStore::new(dir.path(), "ns");
    assert!(store
        .put_object("ns", "absent", "a.json", b"{}", "application/json")
        .is_err());
    assert!(!dir.path().join("ns/absent").exists());
}

#[test]
fn wrong_namespace_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsObjectStore::new(dir.path(), "ns");
    store.create_bucket("reports", None).unwrap();
    assert!(store.put_object("other", "reports", "a.json", b"", "text/markdown").is_err());
    assert!(store.list_buckets("other", "c1").is_err());
}

#[test]
fn bucket_ownership_follows_marker() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsObjectStore::new(dir.path(), "ns");
    store
        .provision(&[
            BucketRecord {
                name: "prod-reports".into(),
                compartment_id: Some("c-prod".into()),
            },
            BucketRecord {
                name: "shared".into(),
                compartment_id: None,
            },
            BucketRecord {
                name: "dev-reports".into(),
                compartment_id: Some("c-dev".into()),
            },
        ])
        .unwrap();

    assert_eq!(store.list_buckets("ns", "c-prod").unwrap(), vec!["prod-reports", "shared"]);
    assert_eq!(store.list_buckets("ns", "c-dev").unwrap(), vec!["dev-reports", "shared"]);
    assert_eq!(store.list_buckets("ns", "c-none").unwrap(), vec!["shared"]);
}

#[test]
fn empty_root_lists_no_buckets() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsObjectStore::new(dir.path().join("missing"), "ns");
    assert!(store.list_buckets("ns", "c1").unwrap().is_empty());
}

#[test]
fn namespace_is_reported_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(FsObjectStore::new(dir.path(), "ns").get_namespace().unwrap(), "ns");
    assert!(FsObjectStore::new(dir.path(), "").get_namespace().is_err());
}

#[test]
fn bucket_names_cannot_leave_the_namespace() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsObjectStore::new(dir.path().join("root"), "ns");
    std::fs::create_dir_all(dir.path().join("root/other-ns/b")).unwrap();

    assert!(store.create_bucket("../escaped", None).is_err());
    assert!(!dir.path().join("root/escaped").exists());

    let err = store
        .put_object("ns", "../other-ns/b", "a.json", b"{}", "application/json")
        .unwrap_err();
    assert!(matches!(err, readiness_core::errors::CollectorError::Malformed { .. }));
    assert!(!dir.path().join("root/other-ns/b/a.json").exists());
}
