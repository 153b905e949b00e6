//! CLI module
//!
//! Command-line interface over both services.
//!
//! # Commands
//!
//! - `search` - Search resources, one batch or `--all`
//! - `supported-types` - List searchable resource types
//! - `instances list|get` - Resource instances
//! - `keys list|get` - Resource keys

mod commands;
mod runner;

pub use commands::{Cli, Commands, InstanceCommands, KeyCommands, PagingArgs};
pub use runner::Runner;
