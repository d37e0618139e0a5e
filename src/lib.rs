//! Gatekeep - enforce a single package manager per project.
//!
//! Projects standardize on one package manager; gatekeep, wired into a
//! `preinstall` script, blocks installs run with any other one and
//! tells the user which command to run instead. The wanted manager
//! comes from the `packageManager` field of `package.json` or from the
//! command line, the used manager from the environment the running
//! install exposes.
//!
//! # Modules
//!
//! - [`check`] - The comparison decision tree
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - Execution context captured at startup
//! - [`detection`] - Detection of the manager running the process
//! - [`error`] - Error types and result aliases
//! - [`manager`] - Manager names, specs, and the supported set
//! - [`manifest`] - Project manifest loading
//! - [`messages`] - Remediation message templates
//! - [`resolver`] - Resolution of the wanted manager
//! - [`ui`] - Bordered frame rendering
//! - [`version`] - Version range matching
//!
//! # Example
//!
//! ```
//! use gatekeep::check::{compare, Outcome};
//! use gatekeep::context::ExecutionContext;
//! use gatekeep::manager::{PackageManagerSpec, UsedPackageManager};
//!
//! let wanted = PackageManagerSpec::parse("pnpm@^7.0.0");
//! let used = UsedPackageManager {
//!     name: "pnpm".to_string(),
//!     version: "7.2.1".to_string(),
//! };
//! let outcome = compare(&wanted, Some(&used), &ExecutionContext::default());
//! assert_eq!(outcome, Outcome::Pass);
//! ```

pub mod check;
pub mod cli;
pub mod context;
pub mod detection;
pub mod error;
pub mod manager;
pub mod manifest;
pub mod messages;
pub mod resolver;
pub mod ui;
pub mod version;

pub use error::{GatekeepError, Result};
