//! Package manager identity types.
//!
//! [`PackageManagerSpec`] is what a project *wants*, [`UsedPackageManager`]
//! is what was *detected*, and [`SupportedManager`] is the closed set of
//! managers this tool knows how to advise about.

use std::fmt;

/// The closed set of package managers gatekeep can enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedManager {
    Npm,
    Cnpm,
    Pnpm,
    Yarn,
}

impl SupportedManager {
    /// Every supported manager, in display order.
    pub const ALL: [SupportedManager; 4] = [
        SupportedManager::Npm,
        SupportedManager::Cnpm,
        SupportedManager::Pnpm,
        SupportedManager::Yarn,
    ];

    /// The manager's command name.
    pub fn name(self) -> &'static str {
        match self {
            SupportedManager::Npm => "npm",
            SupportedManager::Cnpm => "cnpm",
            SupportedManager::Pnpm => "pnpm",
            SupportedManager::Yarn => "yarn",
        }
    }

    /// Look up a manager by its command name.
    ///
    /// The set is closed; anything else returns `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for SupportedManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The package manager a project wants contributors to use, with an
/// optional version range the used manager must satisfy.
///
/// The name is not validated here; an unsupported or empty name fails the
/// comparison step with a message listing the valid set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerSpec {
    pub name: String,
    pub version_range: Option<String>,
}

impl PackageManagerSpec {
    /// Create a spec, normalizing an empty range to "no range".
    pub fn new(name: impl Into<String>, version_range: Option<String>) -> Self {
        Self {
            name: name.into(),
            version_range: version_range.filter(|r| !r.is_empty()),
        }
    }

    /// Parse a `"<name>[@<versionRange>]"` declaration.
    ///
    /// Splits on the first `@` only, so later `@`s stay in the range part.
    /// A trailing `@` with nothing after it means "no range".
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('@') {
            Some((name, range)) => Self::new(name, Some(range.to_string())),
            None => Self::new(raw, None),
        }
    }
}

/// The package manager detected as actually running the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedPackageManager {
    pub name: String,
    pub version: String,
}
