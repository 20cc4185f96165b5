//! `respatch.toml` loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{
    builtin::{DEFAULT_TARGET, builtin_rules},
    rule::Rule,
};
use crate::utils::error::{PatchError, PatchResult};

pub const CONFIG_FILE_NAME: &str = "respatch.toml";

/// What to do with a rule whose pattern matched nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
    /// Skip silently.
    Ignore,
    /// Skip, but log a warning per rule.
    #[default]
    Warn,
    /// Abort the run before anything is written.
    Error,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatchConfig {
    /// File patched when no path is given on the command line.
    #[serde(default = "default_target")]
    pub target: PathBuf,
    #[serde(default)]
    pub on_unmatched: UnmatchedPolicy,
    /// Run the built-in rules before `rules`.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

fn default_target() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET)
}

fn default_include_builtin() -> bool {
    true
}

impl Default for PatchConfig {
    fn default() -> Self {
        PatchConfig {
            target: default_target(),
            on_unmatched: UnmatchedPolicy::default(),
            include_builtin: true,
            rules: Vec::new(),
        }
    }
}

impl PatchConfig {
    /// The rule list to run, in execution order.
    pub fn effective_rules(&self) -> Vec<Rule> {
        let mut rules = if self.include_builtin {
            builtin_rules()
        } else {
            Vec::new()
        };
        rules.extend(self.rules.iter().cloned());
        rules
    }
}

/// Load configuration.
///
/// 1. `explicit` if given (must exist)
/// 2. `{working_dir}/respatch.toml`
/// 3. `~/.config/respatch/config.toml`
///
/// The first file found wins; with none found the defaults apply.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> PatchResult<PatchConfig> {
    if let Some(path) = explicit {
        return read_config_file(path);
    }

    let project = working_dir.join(CONFIG_FILE_NAME);
    if project.is_file() {
        return read_config_file(&project);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join("respatch").join("config.toml");
        if user.is_file() {
            return read_config_file(&user);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(PatchConfig::default())
}

fn read_config_file(path: &Path) -> PatchResult<PatchConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| PatchError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let config: PatchConfig = toml::from_str(&content).map_err(|e| PatchError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!(
        "loaded config {} ({} extra rules)",
        path.display(),
        config.rules.len()
    );
    Ok(config)
}
