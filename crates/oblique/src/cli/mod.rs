//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the oblique binary.

mod commands;
mod extract;
mod generate;

pub use commands::{Cli, Commands, ExtractCommands};
pub use extract::handle_extract_command;
pub use generate::run_generate;
