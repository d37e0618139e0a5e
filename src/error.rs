//! Error types for gatekeep operations.
//!
//! Check failures (wrong manager, wrong version, unsupported wanted name)
//! are not errors; they are the [`Outcome::Fail`](crate::check::Outcome)
//! result this tool exists to produce. [`GatekeepError`] covers the paths
//! where the check itself cannot run: no wanted manager determinable, or a
//! manifest that cannot be read.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gatekeep operations.
#[derive(Debug, Error)]
pub enum GatekeepError {
    /// No wanted package manager could be determined from the manifest or
    /// the command line.
    #[error("Please specify the wanted package manager: gatekeep <npm|cnpm|pnpm|yarn>")]
    Usage,

    /// The manifest exists but is not valid JSON.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gatekeep operations.
pub type Result<T> = std::result::Result<T, GatekeepError>;
