//! Top-level error for a reporter run.

use super::error_code::{self, ReadinessErrorCode};
use super::{CollectorError, ConfigError, PublishError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ReadinessError {
    #[error("Collector error: {0}")]
    Collector(#[from] CollectorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    #[error("Compartment discovery failed: {0}")]
    Discovery(#[source] CollectorError),
}

pub type ReadinessResult<T> = Result<T, ReadinessError>;

impl ReadinessErrorCode for ReadinessError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Collector(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Publish(e) => e.error_code(),
            Self::Discovery(_) => error_code::DISCOVERY_FAILED,
        }
    }
}
