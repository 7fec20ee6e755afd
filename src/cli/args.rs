//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::environment::ResolveOverrides;

/// casm-ci - Resolve CI build variables and run the CASM conda docker build.
#[derive(Debug, Parser)]
#[command(name = "casm-ci")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Build driver script (default: <build dir>/build_scripts/build_conda_docker.sh)
    #[arg(long, global = true)]
    pub driver: Option<PathBuf>,

    /// Never prompt; fail when a variable cannot be resolved
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Values that take precedence over every environment variable.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Build root directory [overrides CASM_BUILD_DIR]
    #[arg(long, global = true)]
    pub build_dir: Option<PathBuf>,

    /// Repository slug, owner/repo [overrides CASM_REPO_SLUG]
    #[arg(long, global = true)]
    pub repo_slug: Option<String>,

    /// Git identity user [overrides CASM_GIT_ID_USER]
    #[arg(long, global = true)]
    pub git_id_user: Option<String>,

    /// Branch being built [overrides CASM_BRANCH]
    #[arg(long, global = true)]
    pub branch: Option<String>,

    /// Conda release label [overrides CASM_CONDA_LABEL]
    #[arg(long, global = true)]
    pub conda_label: Option<String>,
}

impl From<&ResolveArgs> for ResolveOverrides {
    fn from(args: &ResolveArgs) -> Self {
        Self {
            build_dir: args.build_dir.clone(),
            repo_slug: args.repo_slug.clone(),
            git_id_user: args.git_id_user.clone(),
            branch: args.branch.clone(),
            conda_label: args.conda_label.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve variables and run the build driver (default if no command specified)
    Build(BuildArgs),

    /// Print the resolved variables
    Env(EnvArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// Resolve and print the variables without running the driver
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = EnvFormat::Shell)]
    pub format: EnvFormat,

    /// Include where each value came from
    #[arg(long)]
    pub show_sources: bool,
}

/// Output format of the `env` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EnvFormat {
    /// `export NAME='value'` lines
    #[default]
    Shell,
    /// JSON object
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["casm-ci"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn build_dry_run_parses() {
        let cli = Cli::try_parse_from(["casm-ci", "build", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Build(BuildArgs { dry_run: true }))));
    }

    #[test]
    fn global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "casm-ci",
            "env",
            "--repo-slug",
            "acme/widgets",
            "--conda-label",
            "main",
        ])
        .unwrap();
        let overrides = ResolveOverrides::from(&cli.resolve);
        assert_eq!(overrides.repo_slug.as_deref(), Some("acme/widgets"));
        assert_eq!(overrides.conda_label.as_deref(), Some("main"));
        assert!(overrides.branch.is_none());
    }

    #[test]
    fn env_format_json() {
        let cli = Cli::try_parse_from(["casm-ci", "env", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Env(args)) => assert_eq!(args.format, EnvFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["casm-ci", "env", "--format", "yaml"]).is_err());
    }
}
