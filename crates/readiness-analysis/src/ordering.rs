//! Issue list ordering.

use std::cmp::Ordering;

use readiness_core::models::LoadBalancerRecord;

/// Non-`ACTIVE` first, then compartment name, then load balancer name,
/// both compared case-insensitively. Use with a stable sort.
pub fn issue_order(a: &LoadBalancerRecord, b: &LoadBalancerRecord) -> Ordering {
    a.detail
        .is_active()
        .cmp(&b.detail.is_active())
        .then_with(|| {
            a.compartment_name
                .to_lowercase()
                .cmp(&b.compartment_name.to_lowercase())
        })
        .then_with(|| {
            a.detail
                .display_name
                .to_lowercase()
                .cmp(&b.detail.display_name.to_lowercase())
        })
}
