//! Configuration types and structures.
//!
//! The shapes here mirror the YAML document. `module_name` is the one field
//! that never comes from YAML; it is resolved from the build manifest and
//! attached during loading.

use serde::{Deserialize, Serialize};

/// Database connection settings (the `db` mapping in YAML).
///
/// Every field zero-values when absent, so a partial document loads cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DbSettings {
    /// Server hostname or address.
    #[serde(default)]
    pub host: String,

    /// Login user.
    #[serde(default)]
    pub user: String,

    /// Login password.
    #[serde(default)]
    pub password: String,

    /// TCP port (a default SQL Server install listens on 1433).
    #[serde(default)]
    pub port: u16,

    /// Database (catalog) name.
    #[serde(default)]
    pub database: String,
}

impl DbSettings {
    /// Assemble the canonical connection string for these settings.
    pub fn connection_string(&self) -> String {
        format!(
            "sqlserver://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }

    /// Connection string with the password masked, safe for logs and output.
    pub fn masked_connection_string(&self) -> String {
        format!(
            "sqlserver://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }

    /// Credential-free `host:port/database` target, used in error messages.
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

/// The authoritative settings object for one run of the tool.
///
/// Produced exactly once per process by the bootstrap and immutable
/// afterwards; collaborators receive it as a parameter (shared form:
/// `Arc<Config>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Database connection settings.
    #[serde(default)]
    pub db: DbSettings,

    /// Directory generated artifacts are written to. Trailing `/` separators
    /// are stripped on load.
    #[serde(default)]
    pub root_path: String,

    /// Module identifier of the host project, read from the build manifest.
    /// A `module_name` key in the YAML document is ignored.
    #[serde(skip_deserializing)]
    pub module_name: String,

    /// Port for the tool's web UI, kept as a string for the server layer.
    #[serde(default)]
    pub tool_port: String,
}

impl Config {
    /// Strip trailing `/` separators from `root_path`. Idempotent.
    pub fn normalize(&mut self) {
        let len = self.root_path.trim_end_matches('/').len();
        self.root_path.truncate(len);
    }

    /// Report zero-valued settings the generation pipeline will stumble on.
    ///
    /// These are warnings, not errors: an incomplete document still loads,
    /// and callers decide how loudly to complain.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.db.host.is_empty() {
            out.push("db.host is empty".to_string());
        }
        if self.db.user.is_empty() {
            out.push("db.user is empty".to_string());
        }
        if self.db.port == 0 {
            out.push("db.port is 0; a default SQL Server install uses 1433".to_string());
        }
        if self.db.database.is_empty() {
            out.push("db.database is empty".to_string());
        }
        if self.root_path.is_empty() {
            out.push("root_path is empty; generated files would land in the working directory".to_string());
        }
        out
    }
}
