//! # readiness-publish
//!
//! Writes the JSON and Markdown report artifacts, then runs the upload
//! cascade: candidate buckets are tried in order until one accepts both
//! artifacts.

pub mod artifacts;
pub mod buckets;
pub mod cascade;
pub mod markdown;
pub mod uploader;

pub use artifacts::{write_artifacts, ArtifactPaths};
pub use buckets::{build_candidates, discover_candidate_buckets};
pub use cascade::{FailedAttempt, PublishCascade, PublishSuccess};
pub use markdown::render_markdown;
pub use uploader::{object_uri, ObjectStorageUploader};
