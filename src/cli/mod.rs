//! CLI module
//!
//! Command-line interface over the pager.
//!
//! # Commands
//!
//! - `show` - Load one page and print it
//! - `walk` - Print every page from the starting one to the last
//! - `bounds` - Print the pagination arithmetic for a limit and count (no I/O)
//! - `validate` - Check a config file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
