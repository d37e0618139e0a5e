//! Loading the project manifest (`package.json`).

use std::path::Path;

use serde::Deserialize;

use crate::error::{GatekeepError, Result};

/// Manifest file name looked for in the project directory.
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of `package.json` the check cares about.
///
/// Everything else in the manifest is ignored, so projects with
/// unusual fields still load fine as long as the JSON itself is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// The `packageManager` field, e.g. `"pnpm@7.1.0"`.
    #[serde(rename = "packageManager")]
    pub package_manager: Option<String>,
}

/// Load the manifest from `project_dir`, if one exists.
///
/// A missing file is not an error: the check can still run from a
/// command-line argument alone. A file that exists but fails to parse
/// is an error, because a broken manifest should never silently
/// disable enforcement.
pub fn load_manifest(project_dir: &Path) -> Result<Option<Manifest>> {
    let path = project_dir.join(MANIFEST_FILE);

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no manifest at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(GatekeepError::Io(e)),
    };

    let manifest: Manifest =
        serde_json::from_str(&contents).map_err(|e| GatekeepError::ManifestParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

    Ok(Some(manifest))
}
