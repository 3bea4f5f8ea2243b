//! Fluent construction of [`TenancySnapshot`]s.

use readiness_core::api::{
    BackendResource, BackendSetResource, InstanceResource, IpAddressResource, ListenerResource,
    LoadBalancerResource, NsgResource, SubnetResource, VnicAttachmentResource, VnicResource,
};
use readiness_snapshot::{
    BucketRecord, CompartmentRecord, HealthRecord, Owned, RecordedFailure, TenancyRecord,
    TenancySnapshot,
};

pub struct TenancyBuilder {
    snapshot: TenancySnapshot,
}

impl TenancyBuilder {
    pub fn new(tenancy_id: &str, name: &str) -> Self {
        Self {
            snapshot: TenancySnapshot {
                tenancy: TenancyRecord {
                    id: tenancy_id.into(),
                    name: name.into(),
                },
                region: "us-ashburn-1".into(),
                namespace: "test-namespace".into(),
                ..Default::default()
            },
        }
    }

    pub fn region(mut self, region: &str) -> Self {
        self.snapshot.region = region.into();
        self
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.snapshot.namespace = namespace.into();
        self
    }

    /// Active compartment directly under the tenancy.
    pub fn compartment(self, id: &str, name: &str) -> Self {
        self.compartment_record(id, name, None, "ACTIVE", true)
    }

    pub fn compartment_under(self, id: &str, name: &str, parent_id: &str) -> Self {
        self.compartment_record(id, name, Some(parent_id), "ACTIVE", true)
    }

    pub fn compartment_record(
        mut self,
        id: &str,
        name: &str,
        parent_id: Option<&str>,
        lifecycle_state: &str,
        accessible: bool,
    ) -> Self {
        self.snapshot.compartments.push(CompartmentRecord {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(String::from),
            lifecycle_state: lifecycle_state.into(),
            accessible,
        });
        self
    }

    /// Add a load balancer together with its recorded health responses.
    pub fn load_balancer(mut self, compartment_id: &str, lb: LoadBalancerFixture) -> Self {
        self.snapshot.health.extend(lb.health);
        self.snapshot
            .load_balancers
            .push(Owned::new(compartment_id, lb.resource));
        self
    }

    /// An instance with one VNIC attachment holding `private_ip`.
    pub fn instance(
        mut self,
        compartment_id: &str,
        instance_id: &str,
        name: &str,
        private_ip: &str,
        subnet_id: &str,
    ) -> Self {
        let vnic_id = format!("vnic-{instance_id}");
        self.snapshot.instances.push(Owned::new(
            compartment_id,
            InstanceResource {
                id: instance_id.into(),
                display_name: Some(name.into()),
            },
        ));
        self.snapshot.vnic_attachments.push(Owned::new(
            compartment_id,
            VnicAttachmentResource {
                instance_id: Some(instance_id.into()),
                vnic_id: Some(vnic_id.clone()),
            },
        ));
        self.snapshot.vnics.push(VnicResource {
            id: vnic_id,
            private_ip: Some(private_ip.into()),
            subnet_id: Some(subnet_id.into()),
        });
        self
    }

    pub fn subnet(mut self, compartment_id: &str, id: &str, name: &str, cidr: &str) -> Self {
        self.snapshot.subnets.push(Owned::new(
            compartment_id,
            SubnetResource {
                id: id.into(),
                display_name: Some(name.into()),
                cidr_block: Some(cidr.into()),
                vcn_id: Some("vcn-1".into()),
            },
        ));
        self
    }

    pub fn nsg(mut self, compartment_id: &str, id: &str, name: &str) -> Self {
        self.snapshot.network_security_groups.push(Owned::new(
            compartment_id,
            NsgResource {
                id: id.into(),
                display_name: Some(name.into()),
                vcn_id: Some("vcn-1".into()),
            },
        ));
        self
    }

    pub fn bucket(mut self, name: &str, compartment_id: Option<&str>) -> Self {
        self.snapshot.buckets.push(BucketRecord {
            name: name.into(),
            compartment_id: compartment_id.map(String::from),
        });
        self
    }

    /// Record a service error for `operation` on `target` (`*` for all targets).
    pub fn fail(mut self, operation: &str, target: &str, status: u16, message: &str) -> Self {
        self.snapshot.failures.push(RecordedFailure {
            operation: operation.into(),
            target: target.into(),
            status,
            message: message.into(),
        });
        self
    }

    pub fn build(self) -> TenancySnapshot {
        self.snapshot
    }
}

/// A load balancer record plus the health responses recorded for it.
pub struct LoadBalancerFixture {
    resource: LoadBalancerResource,
    health: Vec<HealthRecord>,
}

impl LoadBalancerFixture {
    /// Active, private load balancer with no listeners or backend sets.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            resource: LoadBalancerResource {
                id: id.into(),
                display_name: Some(name.into()),
                lifecycle_state: Some("ACTIVE".into()),
                is_private: Some(true),
                shape_name: Some("flexible".into()),
                ..Default::default()
            },
            health: Vec::new(),
        }
    }

    pub fn lifecycle_state(mut self, state: &str) -> Self {
        self.resource.lifecycle_state = Some(state.into());
        self
    }

    pub fn public(mut self, ip: &str) -> Self {
        self.resource.is_private = Some(false);
        self.resource.ip_addresses.push(IpAddressResource {
            ip_address: Some(ip.into()),
            is_public: Some(true),
        });
        self
    }

    pub fn subnet_ids(mut self, ids: &[&str]) -> Self {
        self.resource.subnet_ids = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn nsg_ids(mut self, ids: &[&str]) -> Self {
        self.resource.network_security_group_ids = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn listener(mut self, name: &str, port: u16, backend_set: &str) -> Self {
        self.resource.listeners.insert(
            name.into(),
            ListenerResource {
                protocol: Some("HTTP".into()),
                port: Some(port),
                default_backend_set_name: Some(backend_set.into()),
                path_route_set_name: None,
            },
        );
        self
    }

    /// Add a backend set. `status` of `None` records no health response, so
    /// probing it fails. Backends are `(ip, port, status)`, named `ip:port`.
    pub fn backend_set(
        mut self,
        name: &str,
        status: Option<&str>,
        backends: &[(&str, u16, Option<&str>)],
    ) -> Self {
        let lb_id = self.resource.id.clone();
        if let Some(status) = status {
            self.health.push(HealthRecord {
                load_balancer_id: lb_id.clone(),
                backend_set: name.into(),
                backend: None,
                status: Some(status.into()),
            });
        }

        let mut resources = Vec::new();
        for (ip, port, backend_status) in backends {
            let backend_name = format!("{ip}:{port}");
            if let Some(s) = backend_status {
                self.health.push(HealthRecord {
                    load_balancer_id: lb_id.clone(),
                    backend_set: name.into(),
                    backend: Some(backend_name.clone()),
                    status: Some(s.to_string()),
                });
            }
            resources.push(BackendResource {
                name: Some(backend_name),
                ip_address: Some(ip.to_string()),
                port: Some(*port),
                weight: Some(1),
                backup: Some(false),
                drain: Some(false),
                offline: Some(false),
            });
        }

        self.resource.backend_sets.insert(
            name.into(),
            BackendSetResource {
                policy: Some("ROUND_ROBIN".into()),
                backends: resources,
            },
        );
        self
    }
}
