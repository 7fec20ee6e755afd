//! casm-ci - CI build variable resolution for the CASM conda packages.
//!
//! Resolves the repository slug, git user, branch, OS and conda label for
//! a CI build from flags, `CASM_*` overrides and CI platform variables,
//! then runs `build_scripts/build_conda_docker.sh` with them exported.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`driver`] - Downstream build driver
//! - [`environment`] - Environment snapshot, CI platforms and resolution
//! - [`error`] - Error types and result aliases
//! - [`helpers`] - OS detection and variable check capabilities
//! - [`shell`] - Process execution
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use casm_ci::environment::{default_conda_label, git_id_user_from_slug};
//!
//! assert_eq!(git_id_user_from_slug("acme/widgets"), "acme");
//! assert_eq!(default_conda_label(Some("v1.0.0")), "main");
//! assert_eq!(default_conda_label(None), "dev");
//! ```

pub mod cli;
pub mod driver;
pub mod environment;
pub mod error;
pub mod helpers;
pub mod shell;
pub mod ui;

pub use error::{CasmCiError, Result};
