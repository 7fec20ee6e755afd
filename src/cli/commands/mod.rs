//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands. Commands are
//! routed by [`CommandDispatcher`].

pub mod build;
pub mod dispatcher;
pub mod env;

pub use dispatcher::{Command, CommandDispatcher, RunContext};
