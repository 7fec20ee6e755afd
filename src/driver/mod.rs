//! Downstream build driver.
//!
//! The driver does the actual containerized conda build and upload. From
//! here it is opaque: it receives the resolved variables in its environment
//! and reports success through its exit status.

pub mod script;

pub use script::{ScriptDriver, DEFAULT_DRIVER};

use tracing::debug;

use crate::environment::BuildConfig;
use crate::error::{CasmCiError, Result};
use crate::shell::CommandResult;

/// Runs the build for a resolved configuration.
pub trait BuildDriver {
    /// Name used in diagnostics, e.g. `build_conda_docker.sh`.
    fn name(&self) -> String;

    /// Run the build with `config` exported into its environment.
    fn run(&self, config: &BuildConfig) -> Result<CommandResult>;
}

/// Run the driver and turn a non-zero exit into [`CasmCiError::DriverFailed`].
pub fn run_build(driver: &dyn BuildDriver, config: &BuildConfig) -> Result<CommandResult> {
    let result = driver.run(config)?;
    if result.success {
        debug!("{} finished in {:?}", driver.name(), result.duration);
        Ok(result)
    } else {
        Err(CasmCiError::DriverFailed {
            driver: driver.name(),
            code: result.exit_code,
        })
    }
}
