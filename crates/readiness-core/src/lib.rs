//! # readiness-core
//!
//! Foundation crate for the load balancer readiness reporter.
//! Defines the domain models, collaborator traits, raw API records, errors,
//! config, tracing setup, and constants. Every other crate in the workspace
//! depends on this.

pub mod api;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::ReadinessConfig;
pub use errors::{CollectorError, ReadinessError, ReadinessResult};
pub use models::{
    Compartment, CompartmentScanResult, HealthStatus, InfraContext, LoadBalancerDetail, Report,
    SkippedCompartment, UploadResult,
};
