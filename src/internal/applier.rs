//! Applies an ordered rule list to text and to files on disk.

use std::path::{Path, PathBuf};

use super::{
    config::UnmatchedPolicy,
    rule::{CompiledRule, compile_all},
};
use crate::{
    internal::rule::Rule,
    utils::error::{PatchError, PatchResult},
};

/// How many times one rule matched during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub name: String,
    pub matches: usize,
}

/// Result of running the rule list over a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub outcomes: Vec<RuleOutcome>,
    pub original: String,
    pub patched: String,
}

impl PatchReport {
    pub fn changed(&self) -> bool {
        self.original != self.patched
    }

    pub fn unmatched(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.matches == 0)
            .map(|o| o.name.as_str())
            .collect()
    }

    /// Unified diff of the original against the patched text.
    pub fn diff(&self) -> String {
        diffy::create_patch(&self.original, &self.patched).to_string()
    }
}

/// Options for [`apply_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    pub on_unmatched: UnmatchedPolicy,
    /// Compute the result without writing it back.
    pub dry_run: bool,
}

/// Run each rule in order, every rule seeing the previous one's output.
pub fn apply_rules(text: &str, rules: &[CompiledRule]) -> (String, Vec<RuleOutcome>) {
    let mut current = text.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());
    for rule in rules {
        let (next, matches) = rule.apply(&current);
        tracing::debug!(rule = rule.name(), matches, "applied rule");
        current = next;
        outcomes.push(RuleOutcome {
            name: rule.name().to_string(),
            matches,
        });
    }
    (current, outcomes)
}

/// Read `path`, apply `rules`, and overwrite `path` with the result.
///
/// The write is a plain overwrite. Unmatched rules are handled per
/// `options.on_unmatched`; under [`UnmatchedPolicy::Error`] nothing is written.
pub fn apply_file(path: &Path, rules: &[Rule], options: ApplyOptions) -> PatchResult<PatchReport> {
    let compiled = compile_all(rules)?;
    for rule in compiled.iter().filter(|r| r.rematches_own_output()) {
        tracing::debug!(
            rule = rule.name(),
            "replacement matches its own pattern; rerunning will apply it again"
        );
    }

    let original = std::fs::read_to_string(path)
        .map_err(|e| PatchError::io(format!("Failed to read file {}", path.display()), e))?;
    let (patched, outcomes) = apply_rules(&original, &compiled);

    let report = PatchReport {
        path: path.to_path_buf(),
        outcomes,
        original,
        patched,
    };

    let unmatched = report.unmatched();
    match options.on_unmatched {
        UnmatchedPolicy::Ignore => {}
        UnmatchedPolicy::Warn => {
            for name in &unmatched {
                tracing::warn!("rule '{}' matched nothing in {}", name, path.display());
            }
        }
        UnmatchedPolicy::Error => {
            if !unmatched.is_empty() {
                return Err(PatchError::Unmatched(
                    unmatched.into_iter().map(String::from).collect(),
                ));
            }
        }
    }

    if !options.dry_run {
        std::fs::write(path, &report.patched)
            .map_err(|e| PatchError::io(format!("Failed to write file {}", path.display()), e))?;
        tracing::info!(
            "wrote {} ({} -> {} bytes)",
            path.display(),
            report.original.len(),
            report.patched.len()
        );
    }

    Ok(report)
}
