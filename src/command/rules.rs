//! Implements `rules` to list the effective rule set in execution order.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::{
    internal::{
        config::load_config,
        rule::{CompiledRule, RuleKind, compile_all},
    },
    utils::error::{PatchError, PatchResult},
};

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Read configuration from this file instead of `respatch.toml`
    #[clap(short, long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: RulesArgs) -> PatchResult<()> {
    let working_dir = std::env::current_dir()
        .map_err(|e| PatchError::io("Failed to resolve working directory", e))?;
    let config = load_config(args.config.as_deref(), &working_dir)?;
    let compiled = compile_all(&config.effective_rules())?;

    for (index, rule) in compiled.iter().enumerate() {
        println!("{}", describe(index + 1, rule));
    }
    Ok(())
}

fn describe(position: usize, rule: &CompiledRule) -> String {
    let kind = match (rule.rule.kind, rule.rule.multiline) {
        (_, true) => "structural",
        (RuleKind::Literal, false) => "literal",
        (RuleKind::Regex, false) => "regex",
    };
    let mut line = format!("{:>2}. {} [{}]", position, rule.name().bold(), kind);
    if rule.rematches_own_output() {
        line.push_str(&format!(" {}", "(re-matches own output)".yellow()));
    }
    line
}
