//! Startup-phase configuration bootstrap.
//!
//! Runs the linear load pipeline: resolve the module name from the build
//! manifest, read and parse the YAML document, normalize paths, attach the
//! module name. Nothing here touches global state and nothing terminates
//! the process; every failure is a [`ConfigError`] for the caller
//! (ultimately the binary) to act on.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::manifest;
use super::types::Config;
use crate::db::Database;
use crate::error::{ConfigError, ConfigResult};

/// Startup-phase builder for the one [`Config`] a process gets.
///
/// The builder carries only the manifest directory; the config path arrives
/// per load call so the CLI can point it anywhere.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    manifest_dir: PathBuf,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap {
    /// Bootstrap against the working directory, where the tool normally runs
    /// next to the host project's `go.mod`.
    pub fn new() -> Self {
        Self {
            manifest_dir: PathBuf::from("."),
        }
    }

    /// Bootstrap against an explicit manifest directory. Used by tests and
    /// by monorepo layouts where `go.mod` is not in the working directory.
    pub fn with_manifest_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest_dir: dir.into(),
        }
    }

    /// The directory searched for the build manifest.
    pub fn manifest_dir(&self) -> &Path {
        &self.manifest_dir
    }

    /// Run the load pipeline and return the finished configuration.
    pub fn load(&self, config_path: impl AsRef<Path>) -> ConfigResult<Config> {
        let config_path = config_path.as_ref();

        let module_name = manifest::resolve_module_name(&self.manifest_dir)?;
        debug!(module = %module_name, "resolved module name from build manifest");

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::ConfigRead {
                path: config_path.to_path_buf(),
                source,
            })?;

        // Empty and comment-only documents parse as YAML null; treat them as
        // an all-defaults config rather than a parse failure.
        let parsed: Option<Config> =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::ConfigParse {
                path: config_path.to_path_buf(),
                source,
            })?;
        let mut config = parsed.unwrap_or_default();

        config.normalize();
        config.module_name = module_name;

        debug!(
            root_path = %config.root_path,
            db = %config.db.target(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Like [`Bootstrap::load`], frozen into the shared form collaborators
    /// receive.
    pub fn load_shared(&self, config_path: impl AsRef<Path>) -> ConfigResult<Arc<Config>> {
        self.load(config_path).map(Arc::new)
    }

    /// Full bootstrap: load the configuration and open the database handle.
    ///
    /// Opening the handle performs no network I/O and needs no async runtime;
    /// reachability is checked only by [`Database::ping`].
    pub fn load_and_connect(
        &self,
        config_path: impl AsRef<Path>,
    ) -> ConfigResult<(Arc<Config>, Database)> {
        let config = self.load_shared(config_path)?;
        let db = Database::connect(&config.db)?;
        Ok((config, db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_project(temp: &TempDir, manifest: &str, config: &str) -> PathBuf {
        fs::write(temp.path().join("go.mod"), manifest).unwrap();
        let config_path = temp.path().join("crudgen.yaml");
        fs::write(&config_path, config).unwrap();
        config_path
    }

    #[test]
    fn test_load_full_pipeline() {
        let temp = TempDir::new().unwrap();
        let config_path = write_project(
            &temp,
            "module example.com/tool\n\ngo 1.21\n",
            "db:\n  host: localhost\n  user: sa\n  password: pw\n  port: 1433\n  database: mydb\nroot_path: \"/out/\"\n",
        );

        let bootstrap = Bootstrap::with_manifest_dir(temp.path());
        let config = bootstrap.load(&config_path).unwrap();

        assert_eq!(config.module_name, "example.com/tool");
        assert_eq!(config.root_path, "/out");
        assert_eq!(config.db.port, 1433);
        assert_eq!(
            config.db.connection_string(),
            "sqlserver://sa:pw@localhost:1433/mydb"
        );
        // tool_port was omitted: zero-value, not an error
        assert_eq!(config.tool_port, "");
    }

    #[test]
    fn test_manifest_failure_comes_before_config_read() {
        // No go.mod, but a perfectly valid config file: the pipeline must
        // fail on the manifest first.
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("crudgen.yaml");
        fs::write(&config_path, "root_path: /out\n").unwrap();

        let bootstrap = Bootstrap::with_manifest_dir(temp.path());
        let err = bootstrap.load(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::ManifestRead { .. }));
    }

    #[test]
    fn test_missing_config_is_read_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("go.mod"), "module m/x\n").unwrap();

        let bootstrap = Bootstrap::with_manifest_dir(temp.path());
        let err = bootstrap.load(temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigRead { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let config_path = write_project(&temp, "module m/x\n", "db: [not, a, mapping]\n");

        let bootstrap = Bootstrap::with_manifest_dir(temp.path());
        let err = bootstrap.load(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParse { .. }));
    }

    #[test]
    fn test_empty_config_file_loads_zero_values() {
        let temp = TempDir::new().unwrap();
        let config_path = write_project(&temp, "module m/x\n", "");

        let bootstrap = Bootstrap::with_manifest_dir(temp.path());
        let config = bootstrap.load(&config_path).unwrap();

        assert_eq!(config.module_name, "m/x");
        assert_eq!(config.db, Default::default());
        assert_eq!(config.root_path, "");
    }

    #[test]
    fn test_comment_only_config_loads_zero_values() {
        let temp = TempDir::new().unwrap();
        let config_path = write_project(&temp, "module m/x\n", "# all defaults\n");

        let bootstrap = Bootstrap::with_manifest_dir(temp.path());
        let config = bootstrap.load(&config_path).unwrap();
        assert_eq!(config.db.host, "");
        assert_eq!(config.tool_port, "");
    }

    #[test]
    fn test_load_shared_freezes_into_arc() {
        let temp = TempDir::new().unwrap();
        let config_path = write_project(&temp, "module m/x\n", "root_path: /tmp/out/\n");

        let bootstrap = Bootstrap::with_manifest_dir(temp.path());
        let config = bootstrap.load_shared(&config_path).unwrap();
        assert_eq!(config.root_path, "/tmp/out");
    }
}
