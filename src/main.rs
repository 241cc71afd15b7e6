//! crudgen: SQL Server CRUD scaffolding for Go projects
//!
//! The binary wraps the bootstrap library. It loads the YAML configuration,
//! resolves the host project's module name from `go.mod`, and reports or
//! probes the resolved database target. This entry point is the one place
//! that treats bootstrap failures as fatal: library errors bubble up and
//! abort the process with a non-zero exit.

use anyhow::Result;
use clap::Parser;
use crudgen::cli::{Cli, Command};
use crudgen::config::Bootstrap;
use std::fs::OpenOptions;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let config_path = cli.config_path();
    let bootstrap = Bootstrap::with_manifest_dir(&cli.manifest_dir);

    match cli.command {
        Command::Check { probe } => {
            run_check(&bootstrap, &config_path, probe).await?;
        }
        Command::Show => {
            run_show(&bootstrap, &config_path)?;
        }
    }

    Ok(())
}

/// Run the full bootstrap and report what was resolved.
async fn run_check(bootstrap: &Bootstrap, config_path: &str, probe: bool) -> Result<()> {
    info!(config = %config_path, "checking configuration");
    let (config, db) = bootstrap.load_and_connect(config_path)?;

    println!("module:     {}", config.module_name);
    println!("root path:  {}", config.root_path);
    println!("database:   {}", config.db.masked_connection_string());
    if config.tool_port.is_empty() {
        println!("tool port:  (not set)");
    } else {
        println!("tool port:  {}", config.tool_port);
    }

    for warning in config.warnings() {
        eprintln!("warning: {}", warning);
    }

    if probe {
        db.ping().await?;
        println!("database reachable");
    }

    println!("configuration ok");
    Ok(())
}

/// Print the resolved configuration as YAML with the password masked.
fn run_show(bootstrap: &Bootstrap, config_path: &str) -> Result<()> {
    let mut config = bootstrap.load(config_path)?;

    if !config.db.password.is_empty() {
        config.db.password = "***".to_string();
    }
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}
