//! CLI command definitions for crudgen
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

use clap::{Parser, Subcommand};

/// SQL Server CRUD scaffolding for Go projects
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (or set CRUDGEN_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory containing the host project's go.mod
    #[arg(long, default_value = ".", global = true)]
    pub manifest_dir: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the configuration and report what was resolved
    Check {
        /// Also open a connection and run a probe query against the database
        #[arg(long)]
        probe: bool,
    },

    /// Print the resolved configuration as YAML (password masked)
    Show,
}

impl Cli {
    /// Effective config path: flag first, then CRUDGEN_CONFIG, then the
    /// conventional file name in the working directory.
    pub fn config_path(&self) -> String {
        if let Some(ref path) = self.config {
            return path.clone();
        }
        if let Ok(path) = std::env::var("CRUDGEN_CONFIG") {
            return path;
        }
        "crudgen.yaml".to_string()
    }
}
