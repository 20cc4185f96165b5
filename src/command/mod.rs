//! Subcommand implementations; each exposes its clap args and an `execute` entry.

pub mod apply;
pub mod rules;
