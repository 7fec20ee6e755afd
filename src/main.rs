//! casm-ci entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use casm_ci::cli::{Cli, CommandDispatcher, RunContext};
use casm_ci::environment::{is_ci, EnvSnapshot};
use casm_ci::ui::{create_ui, should_use_colors, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so a successful build prints nothing of its own
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("casm_ci=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("casm_ci=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("casm-ci starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let env = EnvSnapshot::from_process();

    let is_interactive = !cli.non_interactive
        && !is_ci(&env)
        && std::io::stdin().is_terminal()
        && std::io::stderr().is_terminal();

    let colors = !cli.no_color && should_use_colors(&env);
    let mut ui = create_ui(is_interactive, output_mode, colors);

    let dispatcher = CommandDispatcher::new(RunContext::from_cli(&cli, env));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
