use std::process::ExitCode;

use clap::Parser;
use ubersetz::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if let Err(err) = ubersetz::cli::init_logging(args.verbose()) {
        eprintln!("Error: {}", err);
        return ExitStatus::Error.into();
    }

    match ubersetz::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
