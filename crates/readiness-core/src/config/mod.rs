//! Configuration for a reporter run.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod defaults;
pub mod observability_config;
pub mod output_config;
pub mod publish_config;
pub mod readiness_config;
pub mod scan_config;

pub use observability_config::ObservabilityConfig;
pub use output_config::OutputConfig;
pub use publish_config::PublishConfig;
pub use readiness_config::{CliOverrides, ReadinessConfig};
pub use scan_config::ScanConfig;
