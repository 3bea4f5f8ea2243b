//! Errors raised by the cloud inventory collaborators.

use super::error_code::{self, ReadinessErrorCode};

/// Result alias for collaborator calls.
pub type CollectorResult<T> = Result<T, CollectorError>;

/// A failed call against one of the inventory or storage services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectorError {
    #[error("{service} {operation} failed (status {status}): {message}")]
    ServiceError {
        service: String,
        operation: String,
        status: u16,
        message: String,
    },

    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("malformed {resource} {id}: {reason}")]
    Malformed {
        resource: String,
        id: String,
        reason: String,
    },
}

impl CollectorError {
    /// Shorthand for a service failure.
    pub fn service(
        service: impl Into<String>,
        operation: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::ServiceError {
            service: service.into(),
            operation: operation.into(),
            status,
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }
}

impl ReadinessErrorCode for CollectorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ServiceError { .. } => error_code::COLLECTOR_ERROR,
            Self::NotFound { .. } => error_code::RESOURCE_NOT_FOUND,
            Self::Malformed { .. } => error_code::MALFORMED_RESOURCE,
        }
    }
}
