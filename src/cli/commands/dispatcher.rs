//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`RunContext`] with everything resolution needs
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{BuildArgs, Cli, Commands};
use crate::environment::{EnvSnapshot, ResolveOverrides};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Any failure is returned as an error and ends the run with exit code 1.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Inputs shared by every command.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Environment captured at start-up.
    pub env: EnvSnapshot,
    /// Command-line overrides.
    pub overrides: ResolveOverrides,
    /// Explicit driver script.
    pub driver: Option<PathBuf>,
}

impl RunContext {
    /// Build the context from parsed arguments and an environment snapshot.
    pub fn from_cli(cli: &Cli, env: EnvSnapshot) -> Self {
        Self {
            env,
            overrides: ResolveOverrides::from(&cli.resolve),
            driver: cli.driver.clone(),
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: RunContext,
}

impl CommandDispatcher {
    pub fn new(context: RunContext) -> Self {
        Self { context }
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand means `build` with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
        match &cli.command {
            Some(Commands::Build(args)) => {
                super::build::BuildCommand::new(self.context.clone(), args.clone()).execute(ui)
            }
            Some(Commands::Env(args)) => {
                super::env::EnvCommand::new(self.context.clone(), args.clone()).execute(ui)
            }
            None => {
                super::build::BuildCommand::new(self.context.clone(), BuildArgs::default())
                    .execute(ui)
            }
        }
    }
}
