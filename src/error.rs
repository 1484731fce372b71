//! Error types for locale and configuration operations.

use thiserror::Error;

/// Errors raised by the translation manager, phrase loading and pattern config.
///
/// Missing keys, placeholders and plural forms are never errors: translation
/// degrades to the default value or the key itself instead.
#[derive(Error, Debug)]
pub enum UbersetzError {
    /// A locale was loaded or activated for the first time without a phrase table.
    #[error("Cannot load locale '{locale}' without phrases provided")]
    MissingPhrases { locale: String },

    /// `translate` was called before any locale was activated.
    #[error("Locale not loaded")]
    NoActiveLocale,

    /// A phrase document was not a flat object of strings.
    #[error("Invalid phrases in {origin}: {reason}")]
    InvalidPhrases { origin: String, reason: String },

    /// No configured pattern lists the requested file extension.
    #[error("Cannot find pattern for extension {extension}")]
    UnknownExtension { extension: String },

    /// A configured extraction pattern failed to compile.
    #[error("Invalid extraction pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ubersetz operations
pub type UbersetzResult<T> = Result<T, UbersetzError>;
