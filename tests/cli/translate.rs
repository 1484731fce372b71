use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const EN: &str = r#"{
  "greet": "Hi",
  "greet_plural": "Hi all",
  "hello": "Hi {name}, you have {count} items"
}"#;

fn translate(test: &CliTest, args: &[&str]) -> Result<String> {
    let output = test.translate_command("en.json").args(args).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    Ok(stdout(&output))
}

#[test]
fn test_translate_plain_key() -> Result<()> {
    let test = CliTest::with_file("en.json", EN)?;
    assert_eq!(translate(&test, &["greet"])?, "Hi\n");
    Ok(())
}

#[test]
fn test_translate_plural() -> Result<()> {
    let test = CliTest::with_file("en.json", EN)?;

    assert_eq!(translate(&test, &["greet", "--param", "count=1"])?, "Hi\n");
    assert_eq!(translate(&test, &["greet", "--param", "count=5"])?, "Hi all\n");
    assert_eq!(translate(&test, &["greet", "--param", "count=0"])?, "Hi all\n");

    Ok(())
}

#[test]
fn test_translate_interpolation() -> Result<()> {
    let test = CliTest::with_file("en.json", EN)?;

    let out = translate(
        &test,
        &["hello", "--param", "name=Ann", "--param", "count=3"],
    )?;
    assert_eq!(out, "Hi Ann, you have 3 items\n");

    Ok(())
}

#[test]
fn test_translate_missing_key_fallbacks() -> Result<()> {
    let test = CliTest::with_file("en.json", EN)?;

    assert_eq!(translate(&test, &["absent", "--default", "Default"])?, "Default\n");
    assert_eq!(translate(&test, &["absent"])?, "absent\n");

    Ok(())
}

#[test]
fn test_translate_locale_from_config() -> Result<()> {
    let test = CliTest::with_file(".ubersetzrc.json", r#"{ "baseLocale": "fr" }"#)?;
    test.write_file("fr.json", r#"{ "bye": "Au revoir" }"#)?;

    let output = test
        .translate_command("fr.json")
        .args(["bye", "--verbose"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Au revoir\n");
    assert!(stderr(&output).contains("Active locale set to 'fr'"));

    Ok(())
}

#[test]
fn test_translate_missing_phrase_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.translate_command("nope.json").arg("greet").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to load phrases"));

    Ok(())
}

#[test]
fn test_translate_rejects_nested_phrases() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{ "Common": { "ok": "OK" } }"#)?;

    let output = test.translate_command("en.json").arg("Common").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("value of \"Common\" is an object"));

    Ok(())
}

#[test]
fn test_translate_malformed_param() -> Result<()> {
    let test = CliTest::with_file("en.json", EN)?;

    let output = test
        .translate_command("en.json")
        .args(["greet", "--param", "count"])
        .output()?;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected NAME=VALUE"));

    Ok(())
}
