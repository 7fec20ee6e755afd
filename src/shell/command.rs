//! Process execution.

use crate::error::{CasmCiError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running a process.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the process succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            duration,
            success: false,
        }
    }
}

/// Run `program` with `args` and wait for it to finish.
///
/// The child inherits stdio and the parent's environment, plus `env`.
pub fn execute(program: &str, args: &[String], env: &[(String, String)]) -> Result<CommandResult> {
    let start = Instant::now();
    let command_line = std::iter::once(program.to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::debug!("Running: {}", command_line);
    let status = cmd.status().map_err(|source| CasmCiError::CommandFailed {
        command: command_line.clone(),
        source,
    })?;

    let duration = start.elapsed();
    tracing::debug!(
        "{} exited with {:?} after {:?}",
        command_line,
        status.code(),
        duration
    );

    if status.success() {
        Ok(CommandResult::success(duration))
    } else {
        Ok(CommandResult::failure(status.code(), duration))
    }
}
