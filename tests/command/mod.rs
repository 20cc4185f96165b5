//! Shared helpers for the command integration test suite.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use assert_cmd::prelude::*;
use tempfile::{TempDir, tempdir};

mod rules_test;

pub const FIXTURE: &str = include_str!("../data/CompactStatsHeader.tsx");

/// Creates a temp project with the fixture at the default target path.
pub fn setup_project() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let target = dir
        .path()
        .join("src")
        .join("components")
        .join("CompactStatsHeader.tsx");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, FIXTURE).unwrap();
    (dir, target)
}

/// `respatch` command running in `dir`, with any user-level config hidden.
pub fn respatch_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("respatch"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", user_config_dir(dir))
        .env_remove("RUST_LOG");
    cmd
}

/// Where `dirs::config_dir()` resolves inside a `respatch_cmd(dir)` environment.
pub fn user_config_dir(dir: &Path) -> PathBuf {
    if cfg!(target_os = "macos") {
        dir.join("Library").join("Application Support")
    } else {
        dir.join(".config")
    }
}

/// Writes `content` as the user-level config for a `respatch_cmd(dir)` run.
pub fn write_user_config(dir: &Path, content: &str) {
    let config_dir = user_config_dir(dir).join("respatch");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}
