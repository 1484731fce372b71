//! Ubersetz - a tiny i18n helper
//!
//! Ubersetz resolves message keys to localized strings from per-locale phrase
//! tables, with a `<key>_plural` fallback for counts other than one and
//! `{param}` interpolation. It also carries the `.ubersetzrc.json`
//! configuration that describes how translatable calls are matched in source
//! files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`init`, `patterns`, `translate`)
//! - `config`: Configuration file loading and extraction patterns
//! - `error`: Error types shared by the library
//! - `locale`: Translation manager, phrase tables and resolution

pub mod cli;
pub mod config;
pub mod error;
pub mod locale;

pub use error::{UbersetzError, UbersetzResult};
pub use locale::{
    Params, PhraseTable, Subscription, TranslationManager, load_phrase_file, parse_phrases,
};

#[doc(hidden)]
pub use serde_json;
