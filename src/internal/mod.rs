//! Internal layer: rule model, built-in rule set, configuration, and the patch applier.

pub mod applier;
pub mod builtin;
pub mod config;
pub mod rule;
