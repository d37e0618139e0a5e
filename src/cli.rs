//! CLI argument definitions.

use clap::Parser;

/// Gatekeep - enforce a single package manager per project.
#[derive(Debug, Parser)]
#[command(name = "gatekeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Package manager this project standardizes on
    ///
    /// Only consulted when package.json has no packageManager field.
    #[arg(value_name = "npm|cnpm|pnpm|yarn")]
    pub manager: Option<String>,

    /// Version range the manager must satisfy (e.g. "^7.0.0")
    #[arg(value_name = "VERSION_RANGE")]
    pub version_range: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manager_and_range() {
        let cli = Cli::try_parse_from(["gatekeep", "pnpm", "^7.0.0"]).unwrap();
        assert_eq!(cli.manager.as_deref(), Some("pnpm"));
        assert_eq!(cli.version_range.as_deref(), Some("^7.0.0"));
    }

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["gatekeep"]).unwrap();
        assert!(cli.manager.is_none());
        assert!(cli.version_range.is_none());
        assert!(!cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["gatekeep", "yarn", "--no-color", "--debug"]).unwrap();
        assert_eq!(cli.manager.as_deref(), Some("yarn"));
        assert!(cli.no_color);
        assert!(cli.debug);
    }
}
