//! Error handling for the readiness reporter.
//! One error enum per subsystem, `thiserror` only.

pub mod collector_error;
pub mod config_error;
pub mod error_code;
pub mod publish_error;
pub mod readiness_error;

pub use collector_error::{CollectorError, CollectorResult};
pub use config_error::ConfigError;
pub use error_code::ReadinessErrorCode;
pub use publish_error::PublishError;
pub use readiness_error::{ReadinessError, ReadinessResult};
