use anyhow::{Context, Ok, Result};
use serde_json::Value;

use crate::{CliTest, EN_CATALOG, FR_CATALOG, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["ignores", "ignoreTexts", "translationsRoot", "primaryLocale"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{field}' field:\n{content}"
        );
    }
    assert_eq!(parsed["translationsRoot"], "./translations");
    assert_eq!(parsed["primaryLocale"], "en");

    // serde_json pretty output uses 2-space indentation
    assert!(content.contains("  \"ignores\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, stderr) = run(&mut cmd)?;

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("Created .tscheckrc.json"));
    assert!(test.root().join(".tscheckrc.json").exists());

    let content = test.read_file(".tscheckrc.json")?;
    assert_config_content(&content)?;
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tscheckrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(&mut cmd)?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains(".tscheckrc.json already exists"));

    // The existing file must survive the refused init
    assert_eq!(test.read_file(".tscheckrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, _) = run(&mut cmd)?;
    assert_eq!(code, Some(0));

    test.write_file("translations/en.ts", EN_CATALOG)?;
    test.write_file("translations/fr.ts", FR_CATALOG)?;

    let (code, stdout, stderr) = run(&mut test.check_command())?;
    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("no issues found"));
    Ok(())
}
