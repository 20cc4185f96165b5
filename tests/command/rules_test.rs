//! Tests `rules` listing.

use super::*;

#[test]
/// Tests the built-in rules are listed in execution order.
fn test_rules_lists_builtin_in_order() {
    let dir = tempdir().unwrap();

    let output = respatch_cmd(dir.path()).arg("rules").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 11);
    assert!(lines[0].contains("responsive-header-gap"));
    assert!(lines[0].contains("re-matches own output"));
    assert!(lines[7].contains("progress-min-width") && lines[7].contains("[regex]"));
    assert!(lines[9].contains("next-level-variants") && lines[9].contains("[structural]"));
    assert!(lines[10].contains("max-level-nowrap"));
}

#[test]
/// Tests an explicit config without built-ins lists only its own rules.
fn test_rules_with_explicit_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        r#"
include_builtin = false

[[rules]]
name = "only-rule"
pattern = "a"
replacement = "b"
"#,
    )
    .unwrap();

    let output = respatch_cmd(dir.path())
        .args(["rules", "--config", config.to_str().unwrap()])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("only-rule"));
}

#[test]
/// Tests a missing explicit config file is an error.
fn test_rules_missing_config_fails() {
    let dir = tempdir().unwrap();
    respatch_cmd(dir.path())
        .args(["rules", "--config", "nope.toml"])
        .assert()
        .failure()
        .code(1);
}
