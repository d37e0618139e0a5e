//! Detection of the package manager running the current process.
//!
//! Every supported package manager exports `npm_config_user_agent` to the
//! lifecycle scripts it spawns, e.g.:
//!
//! ```text
//! pnpm/7.2.1 npm/? node/v18.12.0 linux x64
//! ```
//!
//! The first whitespace-delimited token names the manager and its concrete
//! version; a later `node/vX.Y.Z` token carries the Node.js runtime
//! version. Detection is pure inspection: it never fails, and anything it
//! cannot make sense of is reported as "undetectable" (`None`). Running
//! the binary directly during development is a normal, non-error case.

use crate::manager::UsedPackageManager;

/// Environment variable package managers set for child processes.
pub const USER_AGENT_VAR: &str = "npm_config_user_agent";

/// Detect the package manager invoking the current process.
pub fn detect() -> Option<UsedPackageManager> {
    detect_with_env(|key| std::env::var(key))
}

/// Detect with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn detect_with_env<F>(env_fn: F) -> Option<UsedPackageManager>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let user_agent = env_fn(USER_AGENT_VAR).ok()?;
    let used = used_from_user_agent(&user_agent);
    if let Some(pm) = &used {
        tracing::debug!("detected {} {} from user agent", pm.name, pm.version);
    }
    used
}

/// Parse the manager identity out of a user-agent value.
///
/// The first token is `<name>/<version>`, split on the last `/`. cnpm's
/// installer identifies itself as `npminstall`; that alias is normalized
/// so it can match a wanted `cnpm`. Malformed input (empty value, token
/// without a `/`, empty name) is undetectable, not an error.
pub fn used_from_user_agent(user_agent: &str) -> Option<UsedPackageManager> {
    let token = user_agent.split_whitespace().next()?;
    let (name, version) = token.rsplit_once('/')?;
    if name.is_empty() {
        return None;
    }
    let name = if name == "npminstall" { "cnpm" } else { name };
    Some(UsedPackageManager {
        name: name.to_string(),
        version: version.to_string(),
    })
}

/// Extract the Node.js major version from a user-agent value.
///
/// Looks for the `node/vX.Y.Z` token; returns `None` when it is missing
/// or unparseable.
pub fn node_major_from_user_agent(user_agent: &str) -> Option<u32> {
    let token = user_agent
        .split_whitespace()
        .find(|t| t.starts_with("node/"))?;
    let rest = token.strip_prefix("node/")?;
    let rest = rest.strip_prefix('v').unwrap_or(rest);
    rest.split('.').next()?.parse().ok()
}
