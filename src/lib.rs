//! respatch rewrites UI component markup for small screens by applying an
//! ordered list of find/replace rules to one source file.

pub mod cli;
pub mod command;
pub mod internal;
pub mod utils;
