//! Command-line interface for the `ubersetz` binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{init::init, patterns::patterns, translate::translate};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Init) => init(),
        Some(Command::Patterns(cmd)) => patterns(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}

/// Install the stderr log subscriber: `RUST_LOG` directives plus
/// `ubersetz=warn`, or `ubersetz=debug` when verbose.
pub fn init_logging(verbose: bool) -> Result<()> {
    let directive = if verbose {
        "ubersetz=debug"
    } else {
        "ubersetz=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(anyhow::Error::msg)?;

    Ok(())
}
