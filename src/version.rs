//! Version range satisfaction.
//!
//! Wraps the `semver` crate's range matching for the version constraints
//! found in `packageManager` declarations (`^7.0.0`, `>=1.22`, `7.x`, …).
//! Nothing here can fail: an unparseable version or range simply does not
//! satisfy, which downstream reports as an ordinary version mismatch.

use semver::{Version, VersionReq};

/// Check whether `version` satisfies the `range` constraint.
///
/// Partial versions (`"7"`, `"7.2"`) are padded to `X.Y.Z` before parsing.
/// Returns `false` when either side cannot be parsed.
pub fn range_satisfied(range: &str, version: &str) -> bool {
    let Ok(req) = VersionReq::parse(range) else {
        tracing::debug!("unparseable version range {:?}, treating as unsatisfied", range);
        return false;
    };

    match Version::parse(version) {
        Ok(v) => req.matches(&v),
        Err(_) => match Version::parse(&pad_version(version)) {
            Ok(v) => req.matches(&v),
            Err(_) => false,
        },
    }
}

/// Pad a version string to be semver-compatible (X.Y.Z).
fn pad_version(version: &str) -> String {
    let parts: Vec<&str> = version.split('.').collect();
    match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    }
}
