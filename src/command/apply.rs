//! Implements `apply` to rewrite a component file with the configured rule set.

use std::path::PathBuf;

use clap::Parser;

use crate::{
    internal::{
        applier::{ApplyOptions, apply_file},
        config::{UnmatchedPolicy, load_config},
    },
    utils::error::{PatchError, PatchResult},
};

#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// File to patch; defaults to the configured target
    pub path: Option<PathBuf>,
    /// Read configuration from this file instead of `respatch.toml`
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// Compute the result without writing the file
    #[clap(short = 'n', long)]
    pub dry_run: bool,
    /// Print a unified diff of the changes
    #[clap(long)]
    pub diff: bool,
    /// Fail without writing if any rule matches nothing
    #[clap(long)]
    pub strict: bool,
}

pub fn execute(args: ApplyArgs) -> PatchResult<()> {
    let working_dir = std::env::current_dir()
        .map_err(|e| PatchError::io("Failed to resolve working directory", e))?;
    let config = load_config(args.config.as_deref(), &working_dir)?;

    let path = args.path.unwrap_or_else(|| config.target.clone());
    let on_unmatched = if args.strict {
        UnmatchedPolicy::Error
    } else {
        config.on_unmatched
    };
    let options = ApplyOptions {
        on_unmatched,
        dry_run: args.dry_run,
    };

    let report = apply_file(&path, &config.effective_rules(), options)?;

    if args.diff && report.changed() {
        print!("{}", report.diff());
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if args.dry_run {
        println!("Mobile responsiveness fixes would be applied to {file_name}");
    } else {
        println!("Mobile responsiveness fixes applied to {file_name}");
    }
    Ok(())
}
