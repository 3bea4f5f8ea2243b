use readiness_core::api::{
    BackendResource, BackendSetResource, LoadBalancerResource, VnicResource,
};
use readiness_core::errors::CollectorError;
use readiness_core::traits::{
    IComputeInventory, IIdentityCollector, ILoadBalancerCollector, INetworkInventory,
};
use readiness_snapshot::*;

fn compartment(id: &str, name: &str, parent: Option<&str>) -> CompartmentRecord {
    CompartmentRecord {
        id: id.into(),
        name: name.into(),
        parent_id: parent.map(String::from),
        lifecycle_state: "ACTIVE".into(),
        accessible: true,
    }
}

fn snapshot() -> TenancySnapshot {
    let mut deleted = compartment("c-old", "Old", None);
    deleted.lifecycle_state = "DELETED".into();
    let mut hidden = compartment("c-hidden", "Hidden", Some("c-prod"));
    hidden.accessible = false;

    let mut lb = LoadBalancerResource {
        id: "lb-1".into(),
        display_name: Some("web".into()),
        ..Default::default()
    };
    lb.backend_sets.insert(
        "pool".into(),
        BackendSetResource {
            policy: Some("ROUND_ROBIN".into()),
            backends: vec![BackendResource {
                name: Some("10.0.0.5:80".into()),
                ..Default::default()
            }],
        },
    );

    TenancySnapshot {
        tenancy: TenancyRecord {
            id: "tenancy".into(),
            name: "Root".into(),
        },
        region: "eu-frankfurt-1".into(),
        namespace: "ns".into(),
        compartments: vec![
            compartment("c-prod", "Prod", None),
            compartment("c-app", "App", Some("c-prod")),
            compartment("c-db", "Db", Some("c-app")),
            deleted,
            hidden,
        ],
        load_balancers: vec![Owned::new("c-prod", lb)],
        health: vec![HealthRecord {
            load_balancer_id: "lb-1".into(),
            backend_set: "pool".into(),
            backend: None,
            status: Some("WARNING".into()),
        }],
        vnics: vec![VnicResource {
            id: "vnic-1".into(),
            private_ip: Some("10.0.0.5".into()),
            subnet_id: Some("s1".into()),
        }],
        failures: vec![RecordedFailure {
            operation: "list_subnets".into(),
            target: "c-app".into(),
            status: 403,
            message: "NotAuthorized".into(),
        }],
        ..Default::default()
    }
}

fn ids(list: Vec<readiness_core::models::Compartment>) -> Vec<String> {
    let mut ids: Vec<String> = list.into_iter().map(|c| c.id).collect();
    ids.sort();
    ids
}

#[test]
fn direct_children_are_filtered_by_lifecycle() {
    let inv = SnapshotInventory::new(snapshot());
    let children = inv.list_compartments("tenancy", false).unwrap();
    assert_eq!(ids(children), vec!["c-prod"]);
}

#[test]
fn subtree_listing_walks_parent_links() {
    let inv = SnapshotInventory::new(snapshot());
    let all = inv.list_compartments("tenancy", true).unwrap();
    assert_eq!(ids(all), vec!["c-app", "c-db", "c-prod"]);
}

#[test]
fn subtree_listing_reaches_accessible_children_of_locked_compartments() {
    let mut locked = compartment("c-locked", "Locked", None);
    locked.accessible = false;
    let mut retired = compartment("c-retired", "Retired", None);
    retired.lifecycle_state = "DELETED".into();
    let inv = SnapshotInventory::new(TenancySnapshot {
        tenancy: TenancyRecord {
            id: "t".into(),
            name: "Root".into(),
        },
        compartments: vec![
            locked,
            compartment("c-team", "Team", Some("c-locked")),
            retired,
            compartment("c-leftover", "Leftover", Some("c-retired")),
        ],
        ..Default::default()
    });

    let all = inv.list_compartments("t", true).unwrap();
    assert_eq!(ids(all), vec!["c-leftover", "c-team"]);

    let direct = inv.list_compartments("t", false).unwrap();
    assert!(direct.is_empty());
}

#[test]
fn tenancy_and_compartment_lookups() {
    let inv = SnapshotInventory::new(snapshot());
    assert_eq!(inv.get_tenancy("tenancy").unwrap().name, "Root");
    assert_eq!(inv.get_compartment("c-app").unwrap().name, "App");
    assert!(matches!(
        inv.get_compartment("missing"),
        Err(CollectorError::NotFound { .. })
    ));
}

#[test]
fn recorded_failures_replay_as_service_errors() {
    let inv = SnapshotInventory::new(snapshot());
    let err = inv.list_subnets("c-app").unwrap_err();
    match err {
        CollectorError::ServiceError { status, operation, .. } => {
            assert_eq!(status, 403);
            assert_eq!(operation, "list_subnets");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(inv.list_subnets("c-prod").unwrap().is_empty());
}

#[test]
fn health_lookups_distinguish_sets_and_backends() {
    let inv = SnapshotInventory::new(snapshot());
    let set = inv.get_backend_set_health("lb-1", "pool").unwrap();
    assert_eq!(set.status.as_deref(), Some("WARNING"));
    assert!(inv.get_backend_health("lb-1", "pool", "10.0.0.5:80").is_err());
}

#[test]
fn load_balancers_listed_per_compartment() {
    let inv = SnapshotInventory::new(snapshot());
    let summaries = inv.list_load_balancers("c-prod").unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].display_name.as_deref(), Some("web"));
    assert!(inv.list_load_balancers("c-app").unwrap().is_empty());
    assert_eq!(inv.get_load_balancer("lb-1").unwrap().backend_sets.len(), 1);
}

#[test]
fn vnic_lookup_and_empty_compute() {
    let inv = SnapshotInventory::new(snapshot());
    assert_eq!(inv.get_vnic("vnic-1").unwrap().private_ip.as_deref(), Some("10.0.0.5"));
    assert!(inv.list_instances("c-prod").unwrap().is_empty());
}

#[test]
fn snapshot_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tenancy.json");
    let original = snapshot();
    std::fs::write(&path, original.to_json().unwrap()).unwrap();
    let loaded = TenancySnapshot::from_path(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn missing_and_broken_snapshot_files_fail() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("none.json");
    assert!(matches!(
        TenancySnapshot::from_path(&missing),
        Err(SnapshotError::Io { .. })
    ));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        TenancySnapshot::from_path(&broken),
        Err(SnapshotError::Parse { .. })
    ));
}

#[test]
fn sparse_owned_records_deserialize() {
    let json = r#"{
        "tenancy": {"id": "t", "name": "T"},
        "compartments": [{"id": "c1", "name": "One"}],
        "subnets": [{"compartment_id": "c1", "id": "s1"}]
    }"#;
    let snap: TenancySnapshot = serde_json::from_str(json).unwrap();
    assert!(snap.compartments[0].is_listable());
    assert_eq!(snap.subnets[0].resource.id, "s1");
    assert_eq!(snap.subnets[0].resource.display_name, None);
}
