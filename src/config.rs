use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{UbersetzError, UbersetzResult};

pub const CONFIG_FILE_NAME: &str = ".ubersetzrc.json";

/// Placeholder in pattern text replaced by the configured function name.
pub const FUNCTION_PLACEHOLDER: &str = "{{fn}}";

/// Matches `fn('key', params, 'Default')` calls; the trailing comma before the
/// default is optional.
const SCRIPT_PATTERN: &str =
    r#"{{fn}}\s*\(\s*(?:'(.*?)'|"(.*?)")\s*,\s*.*?\s*,?\s*(?:'(.*?)'|"(.*?)"),?.*?\)"#;

/// Same as [`SCRIPT_PATTERN`] but the comma before the default is required.
const COFFEE_PATTERN: &str =
    r#"{{fn}}\s*\(\s*(?:'(.*?)'|"(.*?)")\s*,\s*.*?\s*,\s*(?:'(.*?)'|"(.*?)"),?.*?\)"#;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_function_name")]
    pub function_name: String,
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    #[serde(default = "default_extraction_file")]
    pub extraction_file: String,
    #[serde(default = "default_patterns")]
    pub patterns: Vec<Pattern>,
}

/// An extraction pattern and the file extensions it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pattern {
    pub pattern: String,
    pub extensions: Vec<String>,
}

impl Pattern {
    /// Pattern text with every `{{fn}}` replaced by `function_name`.
    pub fn source(&self, function_name: &str) -> String {
        self.pattern.replace(FUNCTION_PLACEHOLDER, function_name)
    }

    pub fn compile(&self, function_name: &str) -> UbersetzResult<Regex> {
        let source = self.source(function_name);
        Regex::new(&source).map_err(|source_err| UbersetzError::InvalidPattern {
            pattern: source,
            source: source_err,
        })
    }

    pub fn matches_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }
}

fn default_function_name() -> String {
    "u".to_string()
}

fn default_base_locale() -> String {
    "en".to_string()
}

fn default_extraction_file() -> String {
    "messages.extracted.json".to_string()
}

fn default_patterns() -> Vec<Pattern> {
    vec![
        Pattern {
            pattern: SCRIPT_PATTERN.to_string(),
            extensions: ["js", "jsx", "ts", "tsx"].map(String::from).to_vec(),
        },
        Pattern {
            pattern: COFFEE_PATTERN.to_string(),
            extensions: vec!["coffee".to_string()],
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            function_name: default_function_name(),
            base_locale: default_base_locale(),
            extraction_file: default_extraction_file(),
            patterns: default_patterns(),
        }
    }
}

impl Config {
    /// Every extension covered by a pattern, in pattern order.
    pub fn pattern_extensions(&self) -> Vec<String> {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.extensions.iter().cloned())
            .collect()
    }

    /// The first pattern listing `extension`.
    pub fn pattern_for(&self, extension: &str) -> Option<&Pattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.matches_extension(extension))
    }

    /// Compiled regex for files with `extension`, with `{{fn}}` substituted.
    pub fn pattern_regex(&self, extension: &str) -> UbersetzResult<Regex> {
        self.pattern_for(extension)
            .ok_or_else(|| UbersetzError::UnknownExtension {
                extension: extension.to_string(),
            })?
            .compile(&self.function_name)
    }

    /// Validate configuration values.
    ///
    /// Returns an error if the function name is empty, a pattern lists no
    /// extensions, or a pattern does not compile.
    pub fn validate(&self) -> Result<()> {
        if self.function_name.trim().is_empty() {
            bail!("'functionName' must not be empty");
        }

        for pattern in &self.patterns {
            if pattern.extensions.is_empty() {
                bail!(
                    "Pattern in 'patterns' has no extensions: \"{}\"",
                    pattern.pattern
                );
            }
            pattern
                .compile(&self.function_name)
                .context("Invalid regex in 'patterns'")?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!("Loaded config from {:?}", path);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
