//! Health status values reported by the load balancer health API.
//!
//! The status set is open: anything other than exactly `OK` counts as an
//! issue, including values the API may add later.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A health status string as reported by the health API.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthStatus(String);

impl HealthStatus {
    pub const OK: &'static str = "OK";
    /// The probe itself failed; the real status is not known.
    pub const UNAVAILABLE: &'static str = "UNAVAILABLE";
    /// The probe succeeded but carried no status.
    pub const UNKNOWN: &'static str = "UNKNOWN";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn ok() -> Self {
        Self::new(Self::OK)
    }

    pub fn unavailable() -> Self {
        Self::new(Self::UNAVAILABLE)
    }

    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the exact known-good value.
    pub fn is_ok(&self) -> bool {
        self.0 == Self::OK
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HealthStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HealthStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Outcome of a single health probe: a status plus the probe error, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthProbe {
    pub status: HealthStatus,
    pub error: Option<String>,
}

impl HealthProbe {
    /// A probe that returned. A missing status degrades to `UNKNOWN`.
    pub fn reported(status: Option<String>) -> Self {
        Self {
            status: status.map(HealthStatus::from).unwrap_or_else(HealthStatus::unknown),
            error: None,
        }
    }

    /// A probe that failed outright.
    pub fn unavailable(error: impl fmt::Display) -> Self {
        Self {
            status: HealthStatus::unavailable(),
            error: Some(error.to_string()),
        }
    }
}
