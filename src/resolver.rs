//! Resolution of the wanted package manager.
//!
//! Two sources can declare which manager a project wants, in priority
//! order:
//!
//! 1. the `packageManager` field of `package.json`
//! 2. the command-line arguments
//!
//! The manifest wins because it is the project's durable declaration;
//! the argument is only a fallback for projects that have not adopted
//! the field. An empty field counts as undeclared. When neither source
//! names a manager the invocation is a configuration mistake and
//! resolution fails with a usage error.

use std::path::Path;

use crate::error::{GatekeepError, Result};
use crate::manager::PackageManagerSpec;
use crate::manifest;

/// Resolve the wanted package manager for the project in `project_dir`.
pub fn resolve_wanted(
    project_dir: &Path,
    arg_manager: Option<&str>,
    arg_range: Option<&str>,
) -> Result<PackageManagerSpec> {
    if let Some(manifest) = manifest::load_manifest(project_dir)? {
        if let Some(raw) = manifest.package_manager.as_deref().filter(|s| !s.is_empty()) {
            let spec = PackageManagerSpec::parse(raw);
            tracing::debug!("wanted {} resolved from manifest packageManager field", spec.name);
            return Ok(spec);
        }
    }

    if let Some(name) = arg_manager {
        let spec = PackageManagerSpec::new(name, arg_range.map(String::from));
        tracing::debug!("wanted {} resolved from command line", spec.name);
        return Ok(spec);
    }

    Err(GatekeepError::Usage)
}
