use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CART_ROUTE, CliTest, SETTINGS_ROUTE, run};

#[test]
fn test_generate_json_to_stdout() -> Result<()> {
    let test = CliTest::with_file("src/routes/cart.tsx", CART_ROUTE)?;
    test.write_file("src/routes/settings.ts", SETTINGS_ROUTE)?;

    let (stdout, stderr, code) = run(test.generate_command())?;

    assert_eq!(code, 0, "stderr: {}", stderr);
    let manifest: Value = serde_json::from_str(&stdout)?;
    assert_eq!(
        manifest,
        json!([
            {
                "name": "Shopping Cart",
                "short_name": "Cart",
                "description": "View your cart",
                "url": "/cart",
                "icons": [{ "src": "/icons/cart.png", "sizes": "96x96" }]
            },
            {
                "name": "Application Settings",
                "short_name": "Application ",
                "description": "Go to Application Settings",
                "url": "/settings",
                "icons": [
                    { "src": "/icons/icon-192.png", "sizes": "192x192", "type": "image/png" },
                    { "src": "/icons/icon-512.png", "sizes": "512x512", "type": "image/png" }
                ]
            }
        ])
    );

    Ok(())
}

#[test]
fn test_generate_module_format() -> Result<()> {
    let test = CliTest::with_file("src/routes/settings.ts", SETTINGS_ROUTE)?;

    let mut cmd = test.generate_command();
    cmd.args(["--format", "module"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    let payload = stdout
        .strip_prefix("export default ")
        .expect("module output should start with export default");
    let manifest: Value = serde_json::from_str(payload)?;
    assert_eq!(manifest[0]["url"], "/settings");

    Ok(())
}

#[test]
fn test_generate_writes_output_file() -> Result<()> {
    let test = CliTest::with_file("src/routes/cart.tsx", CART_ROUTE)?;

    let mut cmd = test.generate_command();
    cmd.args(["--output", "public/shortcuts.json"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Wrote 1 shortcut to public/shortcuts.json"));

    let content = test.read_file("public/shortcuts.json")?;
    assert!(content.ends_with("]\n"));
    let manifest: Value = serde_json::from_str(&content)?;
    assert_eq!(manifest[0]["name"], "Shopping Cart");

    Ok(())
}

#[test]
fn test_generate_missing_root_emits_empty_manifest() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.generate_command();
    cmd.args(["--root", "does-not-exist"]);
    let (stdout, stderr, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "[]");
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("empty manifest"));

    Ok(())
}

#[test]
fn test_generate_custom_default_icon() -> Result<()> {
    let test = CliTest::with_file("src/routes/settings.ts", SETTINGS_ROUTE)?;

    let mut cmd = test.generate_command();
    cmd.args(["--default-icon", "/static/app-192.png"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    let manifest: Value = serde_json::from_str(&stdout)?;
    assert_eq!(manifest[0]["icons"][1]["src"], "/static/app-512.png");

    Ok(())
}

#[test]
fn test_generate_skips_broken_file() -> Result<()> {
    let test = CliTest::with_file("src/routes/a.ts", "export const = ;")?;
    test.write_file("src/routes/b.ts", SETTINGS_ROUTE)?;

    let (stdout, stderr, code) = run(test.generate_command())?;

    assert_eq!(code, 0);
    let manifest: Value = serde_json::from_str(&stdout)?;
    assert_eq!(manifest.as_array().map(Vec::len), Some(1));
    assert!(stderr.contains("a.ts"));

    Ok(())
}

#[test]
fn test_generate_invalid_pattern_emits_empty_manifest() -> Result<()> {
    let test = CliTest::with_file(".shortcutsrc.json", r#"{ "routeFiles": "src/[routes" }"#)?;

    let (stdout, stderr, code) = run(test.generate_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "[]");
    assert!(stderr.contains("Invalid route file pattern"));

    Ok(())
}
