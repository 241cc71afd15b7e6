//! Configuration bootstrap for the tool.
//!
//! One YAML document plus the host project's build manifest become a single
//! immutable [`Config`]:
//! 1. **Manifest** - `go.mod` in the manifest directory supplies `module_name`
//! 2. **YAML** - the config file supplies `db`, `root_path`, `tool_port`
//! 3. **Normalize** - trailing `/` stripped from `root_path`
//!
//! Missing YAML fields zero-value and unknown keys are ignored, so partial
//! documents load cleanly. The pipeline runs once at startup via
//! [`Bootstrap`]; there is no process-wide mutable state.

mod loader;
mod manifest;
mod types;

pub use loader::Bootstrap;
pub use manifest::{MANIFEST_FILE, resolve_module_name};
pub use types::*;
