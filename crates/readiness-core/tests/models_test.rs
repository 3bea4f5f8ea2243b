use std::collections::BTreeMap;

use chrono::TimeZone;
use readiness_core::models::*;

fn backend(name: &str, status: &str) -> Backend {
    Backend {
        name: name.into(),
        ip_address: Some("10.0.0.5".into()),
        port: Some(8080),
        weight: Some(1),
        backup: false,
        drain: false,
        offline: false,
        health_status: status.into(),
        health_error: None,
        mapped_instance_id: None,
        mapped_instance_name: "UNKNOWN_INSTANCE".into(),
        mapped_vnic_id: None,
        mapped_subnet_id: None,
    }
}

fn parts(sets: Vec<BackendSet>) -> LoadBalancerParts {
    LoadBalancerParts {
        load_balancer_id: "ocid1.loadbalancer..a".into(),
        display_name: "web".into(),
        lifecycle_state: "ACTIVE".into(),
        is_private: true,
        shape_name: Some("flexible".into()),
        time_created: Some(chrono::Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()),
        ip_addresses: vec![],
        subnets: vec![],
        network_security_groups: vec![],
        listeners: vec![Listener {
            name: "http".into(),
            protocol: Some("HTTP".into()),
            port: Some(80),
            default_backend_set_name: Some("pool".into()),
            path_route_set_name: None,
        }],
        backend_sets: sets,
    }
}

#[test]
fn counts_are_derived_from_collections() {
    let sets = vec![
        BackendSet::new(
            "pool",
            Some("ROUND_ROBIN".into()),
            HealthProbe::reported(Some("OK".into())),
            vec![backend("a", "OK"), backend("b", "OK")],
        ),
        BackendSet::new("spare", None, HealthProbe::unavailable("timeout"), vec![backend("c", "OK")]),
    ];
    let detail = LoadBalancerDetail::from_parts(parts(sets));

    assert_eq!(detail.listener_count, 1);
    assert_eq!(detail.backend_set_count, 2);
    assert_eq!(detail.backend_count, 3);
    assert_eq!(detail.backend_sets[0].backend_count, 2);
    assert_eq!(detail.backend_sets[1].health_status.as_str(), "UNAVAILABLE");
    assert_eq!(detail.backend_sets[1].health_error.as_deref(), Some("timeout"));
    assert!(detail.has_issue());
    assert_eq!(detail.issue_backend_sets().count(), 1);
}

#[test]
fn load_balancer_without_backend_sets_has_no_issue() {
    let detail = LoadBalancerDetail::from_parts(parts(vec![]));
    assert!(!detail.has_issue());
    assert_eq!(detail.backend_count, 0);
    assert!(detail.is_active());
}

#[test]
fn record_flattens_detail_into_json() {
    let detail = LoadBalancerDetail::from_parts(parts(vec![]));
    let record = LoadBalancerRecord {
        compartment_id: "c1".into(),
        compartment_name: "Prod".into(),
        detail,
        infra_context: InfraCounts {
            instance_count_in_compartment: 4,
            vnic_attachment_count_in_compartment: 5,
        },
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["compartment_name"], "Prod");
    assert_eq!(value["load_balancer_id"], "ocid1.loadbalancer..a");
    assert_eq!(value["listener_count"], 1);
    assert_eq!(value["infra_context"]["vnic_attachment_count_in_compartment"], 5);

    let back: LoadBalancerRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn histogram_keys_serialize_in_sorted_order() {
    let mut counts = BTreeMap::new();
    counts.insert(HealthStatus::from("WARNING"), 1usize);
    counts.insert(HealthStatus::from("CRITICAL"), 2);
    counts.insert(HealthStatus::ok(), 3);
    let json = serde_json::to_string(&counts).unwrap();
    assert_eq!(json, r#"{"CRITICAL":2,"OK":3,"WARNING":1}"#);
}

#[test]
fn infra_context_counts_and_lookups() {
    let mut infra = InfraContext {
        instance_count: 3,
        vnic_attachment_count: 4,
        ..Default::default()
    };
    infra.ip_to_instance.insert(
        "10.0.0.5".into(),
        InstanceMeta {
            instance_id: "i1".into(),
            instance_name: "app-1".into(),
            vnic_id: "v1".into(),
            subnet_id: "s1".into(),
        },
    );
    assert_eq!(infra.instance_for_ip("10.0.0.5").unwrap().instance_name, "app-1");
    assert!(infra.instance_for_ip("10.0.0.6").is_none());
    assert_eq!(
        infra.counts(),
        InfraCounts {
            instance_count_in_compartment: 3,
            vnic_attachment_count_in_compartment: 4
        }
    );
}

#[test]
fn failure_scope_names() {
    assert_eq!(FailureScope::Compartment.to_string(), "compartment");
    assert_eq!(FailureScope::LoadBalancer.to_string(), "load_balancer");
    assert_eq!(FailureScope::Probe.to_string(), "probe");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn status_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("OK".to_string()),
            Just("WARNING".to_string()),
            Just("CRITICAL".to_string()),
            Just("UNAVAILABLE".to_string()),
            "[A-Z_]{1,10}",
        ]
    }

    proptest! {
        #[test]
        fn issue_iff_some_set_is_not_ok(statuses in prop::collection::vec(status_strategy(), 0..8)) {
            let sets = statuses
                .iter()
                .enumerate()
                .map(|(i, s)| BackendSet::new(format!("set-{i}"), None, HealthProbe::reported(Some(s.clone())), vec![]))
                .collect();
            let detail = LoadBalancerDetail::from_parts(parts(sets));
            let expected = statuses.iter().any(|s| s != "OK");
            prop_assert_eq!(detail.has_issue(), expected);
            prop_assert_eq!(detail.backend_set_count, statuses.len());
        }
    }
}
