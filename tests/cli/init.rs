use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (stdout, _, code) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Created .shortcutsrc.json"));
    assert!(test.root().join(".shortcutsrc.json").exists());

    let content = test.read_file(".shortcutsrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["functionName"], "createShortcutRoute");
    assert_eq!(parsed["defaultIcon"], "/icons/icon-192.png");
    assert!(parsed["routeFiles"].is_array());
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".shortcutsrc.json", "{}")?;

    let (_, stderr, code) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));
    assert_eq!(test.read_file(".shortcutsrc.json")?, "{}");

    Ok(())
}
