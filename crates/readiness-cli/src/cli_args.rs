use std::path::PathBuf;

use clap::Parser;

use readiness_core::config::CliOverrides;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "lb-readiness",
    version,
    about = "Generate a load balancer readiness report for a tenancy snapshot"
)]
pub struct Cli {
    #[arg(
        long,
        env = "READINESS_SNAPSHOT",
        help = "Tenancy snapshot JSON file to scan"
    )]
    pub snapshot: PathBuf,

    #[arg(
        long,
        help = "Config file (defaults to lb-readiness.toml in the working directory when present)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "object-store-dir",
        env = "READINESS_OBJECT_STORE_DIR",
        default_value = "object-store",
        help = "Root directory of the local object store used for uploads"
    )]
    pub object_store_dir: PathBuf,

    #[arg(long, help = "Generate local reports only, do not upload")]
    pub skip_upload: bool,

    #[arg(long, help = "Directory for the report artifacts")]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Scan this compartment instead of the whole tenancy")]
    pub root_compartment_id: Option<String>,

    #[arg(long, help = "Bucket tried before any discovered bucket")]
    pub bucket: Option<String>,

    #[arg(long, help = "Object name prefix for uploaded artifacts")]
    pub prefix: Option<String>,

    #[arg(long, help = "Scan only the root and its direct children")]
    pub no_subcompartments: bool,

    #[arg(long, help = "Scan compartments in parallel")]
    pub parallel: bool,
}

impl Cli {
    /// Flags that override the layered config. Unset flags leave it untouched.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            output_dir: self.output_dir.clone(),
            root_compartment_id: self.root_compartment_id.clone(),
            include_subcompartments: self.no_subcompartments.then_some(false),
            parallel: self.parallel.then_some(true),
            bucket: self.bucket.clone(),
            prefix: self.prefix.clone(),
        }
    }
}
