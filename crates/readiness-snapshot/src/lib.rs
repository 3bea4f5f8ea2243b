//! # readiness-snapshot
//!
//! Offline collaborators for the readiness pipeline. A [`TenancySnapshot`]
//! captures the responses of the identity, load balancer, compute, and
//! network APIs (recorded service errors included) and [`SnapshotInventory`]
//! replays them through the collector traits. [`FsObjectStore`] publishes to
//! a local directory tree laid out like an object storage namespace.

pub mod errors;
pub mod fs_store;
pub mod inventory;
pub mod snapshot;

pub use errors::SnapshotError;
pub use fs_store::FsObjectStore;
pub use inventory::SnapshotInventory;
pub use snapshot::{
    BucketRecord, CompartmentRecord, HealthRecord, Owned, RecordedFailure, TenancyRecord,
    TenancySnapshot,
};
