//! Upload destination candidates.

use std::collections::BTreeSet;

use readiness_core::traits::IObjectStore;

/// Buckets visible from any of `compartment_ids`, deduplicated and sorted.
/// A compartment whose listing fails contributes nothing.
pub fn discover_candidate_buckets(
    store: &dyn IObjectStore,
    namespace: &str,
    compartment_ids: &[String],
) -> Vec<String> {
    let mut found = BTreeSet::new();
    for compartment_id in compartment_ids {
        match store.list_buckets(namespace, compartment_id) {
            Ok(buckets) => found.extend(buckets.into_iter().filter(|b| !b.is_empty())),
            Err(e) => {
                tracing::debug!(compartment_id = %compartment_id, error = %e, "bucket listing failed");
            }
        }
    }
    found.into_iter().collect()
}

/// The explicit bucket first, then discovered buckets not equal to it.
pub fn build_candidates(explicit: Option<&str>, discovered: Vec<String>) -> Vec<String> {
    let mut candidates: Vec<String> = explicit.map(String::from).into_iter().collect();
    for bucket in discovered {
        if !candidates.contains(&bucket) {
            candidates.push(bucket);
        }
    }
    candidates
}
