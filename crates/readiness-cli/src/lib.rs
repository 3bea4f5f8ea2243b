//! # readiness-cli
//!
//! The `lb-readiness` binary: argument parsing, collaborator wiring, the
//! end-to-end [`ReadinessPipeline`], and exit code mapping.

pub mod app;
pub mod cli_args;
pub mod pipeline;

pub use app::{execute, run};
pub use cli_args::Cli;
pub use pipeline::{Collaborators, ReadinessPipeline, RunOutcome, RunSummary, UploadStatus};
