use std::env;

use anyhow::{Context, Result};

use super::super::args::TranslateCommand;
use super::super::exit_status::ExitStatus;
use crate::config::load_config;
use crate::locale::{Params, TranslationManager, load_phrase_file};

pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let locale = match cmd.locale {
        Some(locale) => locale,
        None => load_config(&env::current_dir()?)?.config.base_locale,
    };

    let phrases = load_phrase_file(&cmd.phrases)
        .with_context(|| format!("Failed to load phrases from {:?}", cmd.phrases))?;

    let manager = TranslationManager::new();
    manager.set_locale_sync(&locale, Some(phrases))?;

    let params: Option<Params> = if cmd.params.is_empty() {
        None
    } else {
        Some(cmd.params.into_iter().collect())
    };

    let text = manager.translate(&cmd.key, params.as_ref(), &cmd.default)?;
    println!("{}", text);

    Ok(ExitStatus::Success)
}
