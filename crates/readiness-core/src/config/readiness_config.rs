//! Top-level reporter configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, ObservabilityConfig, OutputConfig, PublishConfig, ScanConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`READINESS_*`)
/// 3. Project config (`lb-readiness.toml`, or an explicit `--config` path)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReadinessConfig {
    pub scan: ScanConfig,
    pub output: OutputConfig,
    pub publish: PublishConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub root_compartment_id: Option<String>,
    pub include_subcompartments: Option<bool>,
    pub parallel: Option<bool>,
    pub bucket: Option<String>,
    pub prefix: Option<String>,
}

/// Environment variables read by [`ReadinessConfig::apply_env_overrides`].
pub const ENV_KEYS: &[&str] = &[
    "READINESS_TENANCY_ID",
    "READINESS_REGION",
    "READINESS_ROOT_COMPARTMENT_ID",
    "READINESS_INCLUDE_SUBCOMPARTMENTS",
    "READINESS_PARALLEL_SCAN",
    "READINESS_OUTPUT_DIR",
    "READINESS_OBJECT_STORAGE_NAMESPACE",
    "READINESS_OBJECT_STORAGE_BUCKET",
    "READINESS_OBJECT_STORAGE_PREFIX",
    "READINESS_AUTO_DISCOVER_BUCKET",
    "READINESS_FAIL_ON_UPLOAD_ERROR",
    "READINESS_LOG_LEVEL",
    "READINESS_JSON_LOGS",
];

impl ReadinessConfig {
    /// Load configuration with layered resolution against the process environment.
    ///
    /// An explicit `config_path` must exist; otherwise `lb-readiness.toml` in
    /// `project_root` is used when present.
    pub fn load(
        project_root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::load_with_env(project_root, config_path, cli_overrides, |key| {
            std::env::var(key).ok()
        })
    }

    /// Same as [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with_env(
        project_root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let project_config = project_root.join(defaults::PROJECT_CONFIG_FILENAME);
                if project_config.exists() {
                    Self::from_file(&project_config)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(env);

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `READINESS_*` overrides. Blank values are ignored, except for the
    /// object prefix where an empty value means "no prefix".
    pub fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        let non_blank = |key: &str| {
            env(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = non_blank("READINESS_TENANCY_ID") {
            self.scan.tenancy_id = Some(v);
        }
        if let Some(v) = non_blank("READINESS_REGION") {
            self.scan.region = Some(v);
        }
        if let Some(v) = non_blank("READINESS_ROOT_COMPARTMENT_ID") {
            self.scan.root_compartment_id = Some(v);
        }
        if let Some(v) = non_blank("READINESS_INCLUDE_SUBCOMPARTMENTS") {
            self.scan.include_subcompartments = parse_flag(&v);
        }
        if let Some(v) = non_blank("READINESS_PARALLEL_SCAN") {
            self.scan.parallel = parse_flag(&v);
        }
        if let Some(v) = non_blank("READINESS_OUTPUT_DIR") {
            self.output.output_dir = PathBuf::from(v);
        }
        if let Some(v) = non_blank("READINESS_OBJECT_STORAGE_NAMESPACE") {
            self.publish.namespace = Some(v);
        }
        if let Some(v) = non_blank("READINESS_OBJECT_STORAGE_BUCKET") {
            self.publish.bucket = Some(v);
        }
        if let Some(v) = env("READINESS_OBJECT_STORAGE_PREFIX") {
            self.publish.prefix = v.trim().to_string();
        }
        if let Some(v) = non_blank("READINESS_AUTO_DISCOVER_BUCKET") {
            self.publish.auto_discover_bucket = parse_flag(&v);
        }
        if let Some(v) = non_blank("READINESS_FAIL_ON_UPLOAD_ERROR") {
            self.publish.fail_on_upload_error = parse_flag(&v);
        }
        if let Some(v) = non_blank("READINESS_LOG_LEVEL") {
            self.observability.log_level = v;
        }
        if let Some(v) = non_blank("READINESS_JSON_LOGS") {
            self.observability.json_logs = parse_flag(&v);
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref v) = cli.output_dir {
            self.output.output_dir = v.clone();
        }
        if let Some(ref v) = cli.root_compartment_id {
            self.scan.root_compartment_id = Some(v.clone());
        }
        if let Some(v) = cli.include_subcompartments {
            self.scan.include_subcompartments = v;
        }
        if let Some(v) = cli.parallel {
            self.scan.parallel = v;
        }
        if let Some(ref v) = cli.bucket {
            self.publish.bucket = Some(v.clone());
        }
        if let Some(ref v) = cli.prefix {
            self.publish.prefix = v.clone();
        }
    }

    fn normalize(&mut self) {
        self.publish.prefix = self.publish.prefix.trim_matches('/').to_string();
        for slot in [
            &mut self.scan.tenancy_id,
            &mut self.scan.region,
            &mut self.scan.root_compartment_id,
            &mut self.publish.namespace,
            &mut self.publish.bucket,
        ] {
            if slot.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *slot = None;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "output.output_dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.observability.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!("expected one of {}", LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Truthy values: `1`, `true`, `yes`, `y`, `on` (case-insensitive). Anything else is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}
