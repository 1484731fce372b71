//! Locale-aware translation.
//!
//! ## Module Structure
//!
//! - `manager`: `TranslationManager`, owner of the active locale and the phrase cache
//! - `listeners`: locale change handlers and their subscription guards
//! - `phrases`: phrase tables, parameters and JSON phrase files
//! - `resolve`: plural selection, fallbacks and `{param}` interpolation

pub mod listeners;
pub mod manager;
pub mod phrases;
pub mod resolve;

pub use listeners::Subscription;
pub use manager::TranslationManager;
pub use phrases::{Params, PhraseTable, load_phrase_file, parse_phrases};
