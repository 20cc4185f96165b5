//! CLI entry for respatch, defining clap subcommands and dispatching each command handler.

use clap::{Parser, Subcommand};

use crate::{
    command,
    utils::error::{PatchError, PatchResult},
};

// The Cli struct represents the root of the command line interface.
#[derive(Parser, Debug)]
#[command(
    name = "respatch",
    about = "respatch: responsive markup fixes for UI component files",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Subcommands; args and `execute` live in the `command` module.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Apply the rule set to a component file in place")]
    Apply(command::apply::ApplyArgs),
    #[command(about = "List the effective rules in execution order")]
    Rules(command::rules::RulesArgs),
}

/// Parses the command line and runs the selected command.
/// - `args`: parse from the process arguments if `None`, otherwise from the given slice
pub fn parse(args: Option<&[&str]>) -> PatchResult<()> {
    let cli = match args {
        Some(args) => {
            Cli::try_parse_from(args).map_err(|e| PatchError::InvalidArgument(e.to_string()))?
        }
        None => Cli::parse(),
    };
    match cli.command {
        Commands::Apply(args) => command::apply::execute(args),
        Commands::Rules(args) => command::rules::execute(args),
    }
}
