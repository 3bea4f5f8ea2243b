//! # readiness-scan
//!
//! Collection stage of the readiness pipeline: compartment discovery,
//! per-compartment infra context building, load balancer assembly, and the
//! compartment scanner that isolates failures per compartment, per load
//! balancer, and per health probe.

pub mod assembler;
pub mod discovery;
pub mod infra_builder;
pub mod scanner;

pub use assembler::LoadBalancerAssembler;
pub use discovery::CompartmentDiscoverer;
pub use infra_builder::InfraContextBuilder;
pub use scanner::{CompartmentOutcome, CompartmentScanner, ScanOutcome};
