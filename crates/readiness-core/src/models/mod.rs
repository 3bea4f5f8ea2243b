//! Domain models shared by every stage of the pipeline.

pub mod compartment;
pub mod health;
pub mod infra_context;
pub mod load_balancer;
pub mod report;
pub mod scan_result;
pub mod upload;

pub use compartment::Compartment;
pub use health::{HealthProbe, HealthStatus};
pub use infra_context::{InfraContext, InfraCounts, InstanceMeta, NsgMeta, SubnetMeta};
pub use load_balancer::{
    Backend, BackendSet, LbIpAddress, Listener, LoadBalancerDetail, LoadBalancerParts, NsgRef,
    SubnetRef,
};
pub use report::{LoadBalancerRecord, Report, ReportMetadata, ReportSummary};
pub use scan_result::{CompartmentScanResult, DroppedLoadBalancer, FailureScope, SkippedCompartment};
pub use upload::UploadResult;
