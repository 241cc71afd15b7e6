//! Module-name resolution from the host project's build manifest.

use regex_lite::Regex;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Fixed name of the build manifest inside the manifest directory.
pub const MANIFEST_FILE: &str = "go.mod";

/// Resolve the module identifier declared in the `go.mod` under `dir`.
///
/// This is a deliberate minimal text scan, not a full manifest parser: the
/// bootstrap needs exactly one field. The first line of the form
/// `module <identifier>` wins; the identifier runs to the end of the line,
/// with a trailing `\r` trimmed for CRLF files. A `module` declaration on
/// the last line of a file with no trailing line break does not match.
pub fn resolve_module_name(dir: &Path) -> ConfigResult<String> {
    let path = dir.join(MANIFEST_FILE);
    let body = std::fs::read_to_string(&path).map_err(|source| ConfigError::ManifestRead {
        path: path.clone(),
        source,
    })?;

    if let Ok(re) = Regex::new(r"module (.*)\n")
        && let Some(m) = re.captures(&body).and_then(|caps| caps.get(1))
    {
        return Ok(m.as_str().trim_end_matches('\r').to_string());
    }

    Err(ConfigError::ManifestParse { path })
}
