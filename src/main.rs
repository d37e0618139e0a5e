//! Gatekeep CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gatekeep::check::{compare, Outcome};
use gatekeep::cli::Cli;
use gatekeep::error::GatekeepError;
use gatekeep::{context, detection, resolver, ui};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the check's own output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gatekeep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gatekeep=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let ctx = context::capture();
    if ctx.is_dependency_install {
        return ExitCode::SUCCESS;
    }

    let project_dir = std::env::current_dir().unwrap_or_default();
    let wanted = match resolver::resolve_wanted(
        &project_dir,
        cli.manager.as_deref(),
        cli.version_range.as_deref(),
    ) {
        Ok(wanted) => wanted,
        Err(e @ GatekeepError::Usage) => {
            println!("{}", e);
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let used = detection::detect();
    match compare(&wanted, used.as_ref(), &ctx) {
        Outcome::Pass => ExitCode::SUCCESS,
        Outcome::Fail(message) => {
            println!("{}", ui::render_frame(&message));
            ExitCode::from(1)
        }
    }
}
