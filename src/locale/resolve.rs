//! Message resolution against a single phrase table.
//!
//! Resolution runs in three steps:
//! 1. pick the plural entry when a numeric `count` other than 1 is passed,
//! 2. fall back to the default value, then to the key itself,
//! 3. substitute `{param}` placeholders.

use std::borrow::Cow;

use serde_json::Value;
use tracing::warn;

use super::phrases::{PLURAL_SUFFIX, Params, PhraseTable};

/// Resolve `key` against `table`, applying plural selection, fallbacks and interpolation.
pub fn resolve(table: &PhraseTable, key: &str, params: Option<&Params>, default: &str) -> String {
    let id = select_id(table, key, params);

    let value = match lookup(table, &id) {
        Some(value) => value.to_string(),
        None if !default.is_empty() => {
            warn!("Message '{}' not found, using default: '{}'", key, default);
            default.to_string()
        }
        None => {
            warn!("Message '{}' not found, using key", key);
            key.to_string()
        }
    };

    match params {
        Some(params) => interpolate(value, params),
        None => value,
    }
}

/// Pick the table entry to read: `<key>_plural` when the params ask for a
/// plural and the table has one, `key` otherwise.
pub fn select_id<'a>(table: &PhraseTable, key: &'a str, params: Option<&Params>) -> Cow<'a, str> {
    if params.is_some_and(wants_plural) {
        let plural = format!("{}{}", key, PLURAL_SUFFIX);
        if lookup(table, &plural).is_some() {
            return Cow::Owned(plural);
        }
    }
    Cow::Borrowed(key)
}

/// Whether `count` is a number other than exactly 1. Zero and negatives are plural.
pub fn wants_plural(params: &Params) -> bool {
    params
        .get("count")
        .and_then(Value::as_f64)
        .is_some_and(|count| count != 1.0)
}

/// Replace every `{name}` in `template` with the text of `params[name]`.
///
/// Parameters are applied one at a time in map order. Placeholders without a
/// matching parameter are left as they are.
pub fn interpolate(template: String, params: &Params) -> String {
    params.iter().fold(template, |text, (name, value)| {
        let placeholder = format!("{{{}}}", name);
        if text.contains(&placeholder) {
            text.replace(&placeholder, &param_text(value))
        } else {
            text
        }
    })
}

/// Empty entries count as missing.
fn lookup<'t>(table: &'t PhraseTable, id: &str) -> Option<&'t str> {
    table
        .get(id)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Text substituted for a parameter. Floats use `f64`'s `Display`, so `3.0`
/// renders as `3`.
fn param_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Number(number) if number.is_f64() => match number.as_f64() {
            Some(float) => Cow::Owned(float.to_string()),
            None => Cow::Owned(number.to_string()),
        },
        other => Cow::Owned(other.to_string()),
    }
}
