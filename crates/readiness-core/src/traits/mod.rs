//! Collaborator interfaces consumed by the pipeline.
//!
//! Implementations are injected into each stage; nothing in the pipeline
//! constructs its own client.

pub mod compute;
pub mod identity;
pub mod infra;
pub mod load_balancer;
pub mod network;
pub mod object_store;

pub use compute::IComputeInventory;
pub use identity::IIdentityCollector;
pub use infra::IInfraCollector;
pub use load_balancer::ILoadBalancerCollector;
pub use network::INetworkInventory;
pub use object_store::IObjectStore;
