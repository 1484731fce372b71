use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_patterns_lists_default_extensions() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("patterns").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("js, jsx, ts, tsx  u"));
    assert!(lines[1].starts_with("coffee            u"));

    Ok(())
}

#[test]
fn test_patterns_for_extension_uses_function_name() -> Result<()> {
    let test = CliTest::with_file(".ubersetzrc.json", r#"{ "functionName": "tr" }"#)?;

    let output = test.command().args(["patterns", "-e", ".coffee"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with(r"tr\s*\("));

    Ok(())
}

#[test]
fn test_patterns_unknown_extension() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["patterns", "--extension", "py"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cannot find pattern for extension py"));

    Ok(())
}

#[test]
fn test_patterns_invalid_config() -> Result<()> {
    let test = CliTest::with_file(
        ".ubersetzrc.json",
        r#"{ "patterns": [{ "pattern": "{{fn}}(", "extensions": ["js"] }] }"#,
    )?;

    let output = test.command().arg("patterns").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid regex in 'patterns'"));

    Ok(())
}
