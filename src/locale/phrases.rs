//! Phrase tables and translation parameters.
//!
//! A phrase table maps message keys to template strings for a single locale.
//! Plural forms live next to their singular key under `<key>_plural`.

use std::{collections::HashMap, fs, path::Path};

use serde_json::Value;

use crate::error::{UbersetzError, UbersetzResult};

/// Message key -> template string for one locale.
pub type PhraseTable = HashMap<String, String>;

/// Interpolation parameters, iterated in insertion order.
pub type Params = serde_json::Map<String, Value>;

/// Suffix appended to a key to look up its plural form.
pub const PLURAL_SUFFIX: &str = "_plural";

/// Parse a phrase table from a JSON document.
///
/// The document must be a flat object whose values are all strings.
pub fn parse_phrases(content: &str) -> UbersetzResult<PhraseTable> {
    parse_phrases_from(content, "<inline>")
}

/// Read and parse a phrase table from a JSON file.
pub fn load_phrase_file(path: &Path) -> UbersetzResult<PhraseTable> {
    let content = fs::read_to_string(path)?;
    parse_phrases_from(&content, &path.display().to_string())
}

fn parse_phrases_from(content: &str, origin: &str) -> UbersetzResult<PhraseTable> {
    let json: Value = serde_json::from_str(content)?;

    let Value::Object(map) = json else {
        return Err(UbersetzError::InvalidPhrases {
            origin: origin.to_string(),
            reason: "expected a JSON object at the top level".to_string(),
        });
    };

    map.into_iter()
        .map(|(key, value)| match value {
            Value::String(text) => Ok((key, text)),
            other => Err(UbersetzError::InvalidPhrases {
                origin: origin.to_string(),
                reason: format!("value of \"{}\" is {}, expected a string", key, kind(&other)),
            }),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build [`Params`] inline, keeping the order the pairs are written in.
///
/// ```
/// use ubersetz::params;
///
/// let params = params! { "name" => "Ann", "count" => 3 };
/// assert_eq!(params.keys().collect::<Vec<_>>(), ["name", "count"]);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($key:expr => $value:tt),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert(::std::string::String::from($key), $crate::serde_json::json!($value));
        )+
        params
    }};
}
