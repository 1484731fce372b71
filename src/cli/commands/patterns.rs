use std::{env, io};

use anyhow::Result;

use super::super::args::PatternsCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_failure, print_patterns_to};
use crate::config::load_config;
use crate::error::UbersetzError;

pub fn patterns(cmd: PatternsCommand) -> Result<ExitStatus> {
    let config = load_config(&env::current_dir()?)?.config;

    let Some(extension) = cmd.extension else {
        print_patterns_to(&config.patterns, &config.function_name, &mut io::stdout().lock());
        return Ok(ExitStatus::Success);
    };

    let extension = extension.trim_start_matches('.');
    match config.pattern_regex(extension) {
        Ok(regex) => {
            println!("{}", regex.as_str());
            Ok(ExitStatus::Success)
        }
        Err(err @ UbersetzError::UnknownExtension { .. }) => {
            print_failure(&err.to_string());
            Ok(ExitStatus::Failure)
        }
        Err(err) => Err(err.into()),
    }
}
