use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["functionName"], "u");
    assert_eq!(parsed["baseLocale"], "en");
    assert_eq!(parsed["extractionFile"], "messages.extracted.json");

    let patterns = parsed["patterns"]
        .as_array()
        .context("Config should have a 'patterns' array")?;
    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns[1]["extensions"], serde_json::json!(["coffee"]));

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\u{2713} Created .ubersetzrc.json\n");

    assert!(test.root().join(".ubersetzrc.json").exists());
    let content = test.read_file(".ubersetzrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".ubersetzrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".ubersetzrc.json already exists"));
    assert_eq!(test.read_file(".ubersetzrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    let output = test.command().args(["patterns", "--extension", "ts"]).output()?;
    assert!(
        output.status.success(),
        "patterns should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).starts_with(r"u\s*\("));

    Ok(())
}
