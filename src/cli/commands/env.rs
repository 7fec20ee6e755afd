//! Env command implementation.
//!
//! `casm-ci env` prints the resolved variables, either as shell exports
//! suitable for `eval` or as JSON.

use crate::cli::args::{EnvArgs, EnvFormat};
use crate::environment::{resolve, BuildConfig};
use crate::error::{CasmCiError, Result};
use crate::helpers::{CheckVar, HostOs};
use crate::ui::UserInterface;

use super::dispatcher::{Command, RunContext};

/// Quote a value for POSIX shells.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// `export NAME='value'` lines for every resolved variable.
pub fn shell_exports(config: &BuildConfig, show_sources: bool) -> Vec<String> {
    let sources = config.sources();
    config
        .to_env_vars()
        .into_iter()
        .zip(sources)
        .map(|((name, value), (_, source))| {
            if show_sources {
                format!("export {}={}  # {}", name, shell_quote(&value), source)
            } else {
                format!("export {}={}", name, shell_quote(&value))
            }
        })
        .collect()
}

fn json_output(config: &BuildConfig, show_sources: bool) -> Result<String> {
    let value = if show_sources {
        serde_json::to_value(config)
    } else {
        Ok(serde_json::Value::Object(
            config
                .to_env_vars()
                .into_iter()
                .map(|(k, v)| (k, serde_json::Value::String(v)))
                .collect(),
        ))
    }
    .map_err(|e| CasmCiError::Other(e.into()))?;

    serde_json::to_string_pretty(&value).map_err(|e| CasmCiError::Other(e.into()))
}

/// The env command implementation.
pub struct EnvCommand {
    context: RunContext,
    args: EnvArgs,
}

impl EnvCommand {
    pub fn new(context: RunContext, args: EnvArgs) -> Self {
        Self { context, args }
    }
}

impl Command for EnvCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let config = {
            let mut check = CheckVar::new(ui);
            resolve(
                &self.context.env,
                &self.context.overrides,
                &HostOs,
                &mut check,
            )?
        };

        match self.args.format {
            EnvFormat::Shell => {
                for line in shell_exports(&config, self.args.show_sources) {
                    ui.output(&line);
                }
            }
            EnvFormat::Json => ui.output(&json_output(&config, self.args.show_sources)?),
        }

        Ok(())
    }
}
