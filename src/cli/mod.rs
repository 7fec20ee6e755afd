//! Command-line interface for casm-ci.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{BuildArgs, Cli, Commands, EnvArgs, EnvFormat, ResolveArgs};
pub use commands::{Command, CommandDispatcher, RunContext};
