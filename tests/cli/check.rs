use std::process::Command;

use anyhow::{Ok, Result};
use insta_cmd::get_cargo_bin;

use crate::{BIN_NAME, CliTest, EN_CATALOG, FR_CATALOG, run};

const EXPORT_ENTRY: &str = r#"    <message>
        <location filename="../src/dashboard.cpp" line="88"/>
        <source>Export Data</source>
        <translation>Export Data</translation>
    </message>
</context>"#;

/// EN_CATALOG with one entry the French catalog does not have.
fn en_with_extra_entry() -> String {
    EN_CATALOG.replace("</context>", EXPORT_ENTRY)
}

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;

    let (code, stdout, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("Checked 2 catalog files - no issues found"));
    Ok(())
}

#[test]
fn test_check_missing_translation_is_error() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;
    test.write_file("translations/en.ts", &en_with_extra_entry())?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, Some(1));
    assert!(stdout.contains("error:"));
    assert!(stdout.contains("\"Export Data\""));
    assert!(stdout.contains("missing-translation"));
    assert!(stdout.contains("./translations/en.ts:"));
    assert!(stdout.contains("missing in: fr"));
    assert!(stdout.contains("= origin: ../src/dashboard.cpp:88"));
    assert!(stdout.contains("1 problems (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_untranslated_is_warning_only() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;
    test.write_file(
        "translations/fr.ts",
        &FR_CATALOG.replace("Qualité des eaux", "Water Quality"),
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    // Warnings alone do not fail the run
    assert_eq!(code, Some(0));
    assert!(stdout.contains("warning:"));
    assert!(stdout.contains("untranslated"));
    assert!(stdout.contains("identical to source in fr"));
    assert!(stdout.contains("1 problems (0 errors, 1 warning)"));
    Ok(())
}

#[test]
fn test_check_placeholder_mismatch() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;
    test.write_file(
        "translations/fr.ts",
        &FR_CATALOG.replace("%1 stations en ligne", "stations en ligne"),
    )?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, Some(1));
    assert!(stdout.contains("placeholder-mismatch"));
    assert!(stdout.contains("source has %1, translation has none"));
    assert!(stdout.contains("./translations/fr.ts:"));
    Ok(())
}

#[test]
fn test_check_rule_filter_skips_other_rules() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;
    test.write_file(
        "translations/fr.ts",
        &FR_CATALOG.replace("%1 stations en ligne", "stations en ligne"),
    )?;

    // Only the untranslated rule runs, so the placeholder error is not seen
    let (code, stdout, _) = run(test.check_command().arg("untranslated"))?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_ignore_texts_config() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;
    test.write_file(
        "translations/fr.ts",
        &FR_CATALOG.replace("Qualité des eaux", "Water Quality"),
    )?;
    test.write_file(".tscheckrc.json", r#"{ "ignoreTexts": ["Water Quality"] }"#)?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_unparseable_replica() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;
    test.write_file("translations/fr.ts", "this is not a catalog")?;

    let (code, stdout, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, Some(1));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("./translations/fr.ts"));
    assert!(stderr.contains("1 file(s) could not be parsed"));
    Ok(())
}

#[test]
fn test_check_missing_primary_is_error() -> Result<()> {
    let test = CliTest::with_file("translations/fr.ts", FR_CATALOG)?;

    let (code, _, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Primary locale 'en' catalog not found"));
    Ok(())
}

#[test]
fn test_check_without_translations_dir() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("does not exist"));
    assert!(stderr.contains("translationsRoot"));
    Ok(())
}

#[test]
fn test_check_primary_locale_from_env() -> Result<()> {
    let test = CliTest::with_file("translations/fr.ts", FR_CATALOG)?;

    let (code, stdout, stderr) = run(test
        .check_command()
        .env("TSCHECK_PRIMARY_LOCALE", "fr"))?;

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("Checked 1 catalog file - no issues found"));
    Ok(())
}

#[test]
fn test_check_with_path_flag() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;

    // Run from outside the project, pointing at it with --path
    let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
    cmd.env_clear();
    cmd.env("NO_COLOR", "1");
    cmd.args(["check", "--path"]);
    cmd.arg(test.root());

    let (code, stdout, stderr) = run(&mut cmd)?;

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("--help"))?;

    assert_eq!(code, Some(0));
    for subcommand in ["check", "stats", "query", "fmt", "clean", "init", "serve"] {
        assert!(stdout.contains(subcommand), "help should list {subcommand}");
    }
    Ok(())
}

#[test]
fn test_no_args_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(&mut test.command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Usage"));
    Ok(())
}

/// The shipped catalogs must pass their own checker, with the one known
/// untranslated template as the only finding.
#[test]
fn test_check_shipped_catalogs() -> Result<()> {
    let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
    cmd.env_clear();
    cmd.env("NO_COLOR", "1");
    cmd.args(["check", "--path", env!("CARGO_MANIFEST_DIR")]);

    let (code, stdout, stderr) = run(&mut cmd)?;

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("warning:"));
    assert!(stdout.contains("%1 Compliant / %2 Total Pollutants"));
    assert!(stdout.contains("untranslated"));
    assert!(stdout.contains("translations/fr.ts:"));
    assert!(stdout.contains("1 problems (0 errors, 1 warning)"));
    Ok(())
}
