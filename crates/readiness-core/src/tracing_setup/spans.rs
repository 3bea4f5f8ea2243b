//! Span definitions per pipeline stage: discovery, compartment scan, publish.

/// Create a discovery span.
#[macro_export]
macro_rules! discovery_span {
    ($tenancy_id:expr, $root_id:expr) => {
        ::tracing::info_span!("readiness.discovery", tenancy_id = %$tenancy_id, root_id = %$root_id)
    };
}

/// Create a per-compartment scan span.
#[macro_export]
macro_rules! scan_span {
    ($compartment_id:expr, $compartment_name:expr) => {
        ::tracing::info_span!(
            "readiness.scan",
            compartment_id = %$compartment_id,
            compartment_name = %$compartment_name
        )
    };
}

/// Create a publish span.
#[macro_export]
macro_rules! publish_span {
    ($namespace:expr) => {
        ::tracing::info_span!("readiness.publish", namespace = %$namespace)
    };
}

