//! Structured error types for the configuration bootstrap.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading configuration or opening the database.
///
/// Every step of the bootstrap reports through this enum; nothing in the
/// library terminates the process. The binary decides which failures are
/// fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The build manifest could not be read.
    #[error("failed to read build manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build manifest contains no `module` declaration.
    #[error("no `module` line found in build manifest {path}")]
    ManifestParse { path: PathBuf },

    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected shape.
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The database handle could not be created, or a probe failed.
    #[error("database connection failed for {target}: {source}")]
    DbConnect {
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConfigError {
    /// Build a `DbConnect` error from any driver or pool error.
    ///
    /// `target` should be the masked connection target (no password), since
    /// the message ends up in logs. The underlying error is kept as the
    /// source so the cause chain survives reporting.
    pub fn db_connect(
        target: impl Into<String>,
        err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::DbConnect {
            target: target.into(),
            source: err.into(),
        }
    }
}

/// Result type for bootstrap operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
