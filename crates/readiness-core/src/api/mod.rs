//! Raw records as returned by the cloud APIs.
//!
//! Every optional attribute is an explicit `Option` with `serde(default)`,
//! so a sparse response deserializes cleanly. Nothing past the scan stage
//! reads these types; the assembler converts them to defaulted models.

pub mod compute;
pub mod load_balancer;
pub mod network;

pub use compute::{InstanceResource, VnicAttachmentResource};
pub use load_balancer::{
    BackendResource, BackendSetResource, HealthResponse, IpAddressResource, ListenerResource,
    LoadBalancerResource, LoadBalancerSummary,
};
pub use network::{NsgResource, SubnetResource, VnicResource};
