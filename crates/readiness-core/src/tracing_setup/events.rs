//! Structured events for absorbed failures, tagged with their [`FailureScope`].

use crate::errors::{CollectorError, ReadinessErrorCode};
use crate::models::FailureScope;

pub fn compartment_skipped(compartment_id: &str, compartment_name: &str, reason: &str) {
    tracing::warn!(
        scope = %FailureScope::Compartment,
        compartment_id,
        compartment_name,
        reason,
        "skipping compartment"
    );
}

pub fn load_balancer_dropped(load_balancer_id: &str, display_name: &str, error: &CollectorError) {
    tracing::warn!(
        scope = %FailureScope::LoadBalancer,
        load_balancer_id,
        display_name,
        code = error.error_code(),
        error = %error,
        "failed to collect load balancer"
    );
}

pub fn probe_degraded(load_balancer_id: &str, target: &str, error: &CollectorError) {
    tracing::debug!(
        scope = %FailureScope::Probe,
        load_balancer_id,
        target,
        code = error.error_code(),
        error = %error,
        "health probe unavailable"
    );
}
