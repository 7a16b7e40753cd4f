use anyhow::{Ok, Result};

use crate::{CliTest, EN_CATALOG, run};

/// French catalog with one finished, one unfinished, and one stale entry.
const FR_MIXED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr_FR" sourcelanguage="en_US">
<context>
    <name>Dashboard</name>
    <message>
        <location filename="../src/dashboard.cpp" line="42"/>
        <source>Water Quality</source>
        <translation>Qualité des eaux</translation>
    </message>
    <message>
        <location filename="../src/dashboard.cpp" line="57"/>
        <source>%1 stations online</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Old Label</source>
        <translation type="vanished">Ancienne étiquette</translation>
    </message>
</context>
</TS>
"#;

/// Whitespace-split fields of the table row starting with `prefix`.
fn table_row(stdout: &str, prefix: &str) -> Vec<String> {
    stdout
        .lines()
        .find(|l| l.starts_with(prefix))
        .unwrap_or_else(|| panic!("no row starting with {prefix:?} in:\n{stdout}"))
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_stats_table_counts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/en.ts", EN_CATALOG)?;
    test.write_file("translations/fr.ts", FR_MIXED)?;

    let (code, stdout, stderr) = run(&mut test.stats_command())?;

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("locale"));
    assert!(stdout.contains("unfinished"));

    // locale, file, contexts, messages, finished, unfinished, stale
    let en = table_row(&stdout, "en");
    assert_eq!(en[1], "./translations/en.ts");
    assert_eq!(&en[2..], ["1", "2", "2", "0", "0"]);

    let fr = table_row(&stdout, "fr");
    assert_eq!(fr[1], "./translations/fr.ts");
    assert_eq!(&fr[2..], ["1", "3", "1", "1", "1"]);

    // The total row has no file column to split
    let total = table_row(&stdout, "total");
    assert_eq!(&total[1..], ["2", "5", "3", "1", "1"]);
    Ok(())
}

#[test]
fn test_stats_rows_sorted_by_locale() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;

    let (code, stdout, _) = run(&mut test.stats_command())?;

    assert_eq!(code, Some(0));
    let en_pos = stdout.find("./translations/en.ts").unwrap();
    let fr_pos = stdout.find("./translations/fr.ts").unwrap();
    assert!(en_pos < fr_pos);
    Ok(())
}

#[test]
fn test_stats_primary_only() -> Result<()> {
    let test = CliTest::with_file("translations/en.ts", EN_CATALOG)?;

    let (code, stdout, _) = run(&mut test.stats_command())?;

    assert_eq!(code, Some(0));
    let total = table_row(&stdout, "total");
    assert_eq!(&total[1..], ["1", "2", "2", "0", "0"]);
    Ok(())
}

#[test]
fn test_stats_ignores_unparseable_file() -> Result<()> {
    let test = CliTest::with_clean_catalogs()?;
    test.write_file("translations/de.ts", "broken")?;

    let (code, stdout, stderr) = run(&mut test.stats_command())?;

    // Stats is informational and never fails the run
    assert_eq!(code, Some(0));
    assert!(stdout.contains("./translations/en.ts"));
    assert!(stdout.contains("./translations/fr.ts"));
    assert!(!stdout.contains("de.ts"));
    assert!(stderr.contains("1 file(s) could not be parsed"));
    Ok(())
}
