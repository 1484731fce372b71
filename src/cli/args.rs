//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Write a default `.ubersetzrc.json`
//! - `patterns`: Show configured extraction patterns
//! - `translate`: Translate a key against a phrase file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Patterns(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct PatternsCommand {
    /// Print the compiled regex for this file extension only
    #[arg(short, long)]
    pub extension: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Message key to translate
    pub key: String,

    /// JSON phrase file for the locale
    #[arg(short, long)]
    pub phrases: PathBuf,

    /// Locale to activate (overrides baseLocale from the config file)
    #[arg(short, long, env = "UBERSETZ_LOCALE")]
    pub locale: Option<String>,

    /// Interpolation parameter, can be repeated: --param name=Ann --param count=3
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,

    /// Text used when the key has no phrase
    #[arg(short, long, default_value = "")]
    pub default: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .ubersetzrc.json configuration file
    Init,
    /// List extraction patterns per file extension
    Patterns(PatternsCommand),
    /// Translate a message key using a phrase file
    Translate(TranslateCommand),
}

/// Parse `name=value`. Values that are JSON numbers become numbers, so that
/// `count=3` selects plural forms; everything else is kept as a string.
fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got \"{}\"", raw))?;

    if name.is_empty() {
        return Err(format!("missing parameter name in \"{}\"", raw));
    }

    let value = match value.parse::<serde_json::Number>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(value.to_string()),
    };
    Ok((name.to_string(), value))
}
