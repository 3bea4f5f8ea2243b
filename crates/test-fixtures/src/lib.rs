//! Shared fixtures for readiness tests: golden tenancy snapshots, a fluent
//! [`TenancyBuilder`], and an in-memory [`FlakyObjectStore`] with failure
//! injection.

pub mod flaky_store;
pub mod tenancy;

use std::path::PathBuf;

use serde::de::DeserializeOwned;

pub use flaky_store::{FlakyObjectStore, PutRecord};
pub use tenancy::{LoadBalancerFixture, TenancyBuilder};

/// Root directory of the fixture data files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The sample tenancy used by the end-to-end tests.
pub fn sample_tenancy() -> readiness_snapshot::TenancySnapshot {
    load_fixture("tenancies/sample.json")
}
