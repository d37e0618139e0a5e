//! Execution context captured once at startup.

use std::path::{Component, Path, PathBuf};

use crate::detection;

/// Facts about the invoking process that shape the check.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    /// The process was spawned while installing this package as a
    /// dependency of another project. Enforcement is skipped entirely:
    /// consumers cannot choose the package manager of a project that
    /// happens to depend on ours.
    pub is_dependency_install: bool,
    /// Node.js major version reported by the user agent, when known.
    pub node_major: Option<u32>,
}

/// Capture the context from the real process environment.
pub fn capture() -> ExecutionContext {
    let cwd = std::env::current_dir().unwrap_or_default();
    capture_with_env(|key| std::env::var(key), &cwd)
}

/// Capture with injected env lookup and working directory.
///
/// Package managers run lifecycle scripts from the package's own
/// directory but record the directory the install was started from in
/// `INIT_CWD`. When that original directory sits inside a
/// `node_modules` tree, we are being installed as a dependency.
/// An empty `INIT_CWD` counts as unset.
pub fn capture_with_env<F>(env_fn: F, cwd: &Path) -> ExecutionContext
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let install_dir = env_fn("INIT_CWD")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd.to_path_buf());
    let is_dependency_install = inside_node_modules(&install_dir);
    if is_dependency_install {
        tracing::debug!("dependency install detected at {}, skipping check", install_dir.display());
    }

    let node_major = env_fn(detection::USER_AGENT_VAR)
        .ok()
        .and_then(|ua| detection::node_major_from_user_agent(&ua));

    ExecutionContext {
        is_dependency_install,
        node_major,
    }
}

/// Whether any component of `path` is a `node_modules` directory.
fn inside_node_modules(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if name == "node_modules"))
}
