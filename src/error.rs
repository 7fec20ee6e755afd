//! Error types for casm-ci operations.
//!
//! This module defines [`CasmCiError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is fatal to the run; there is no retry or recovery
//! - Resolution and helper failures surface as their own variants
//! - A failed build driver is [`CasmCiError::DriverFailed`], which renders
//!   as the single diagnostic line printed before exiting

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for casm-ci operations.
#[derive(Debug, Error)]
pub enum CasmCiError {
    /// A required variable has no value in any layer of its fallback chain.
    #[error("{name} is not set and {fallback} is empty")]
    MissingVariable { name: String, fallback: String },

    /// The variable check could not produce a value.
    #[error("{name} must be set: {description}")]
    UnresolvedVariable { name: String, description: String },

    /// OS detection does not know the host platform.
    #[error("Unsupported OS: {os}")]
    UnsupportedOs { os: String },

    /// The build root directory could not be determined.
    #[error("Cannot determine build directory from {path}: {message}")]
    BuildRoot { path: PathBuf, message: String },

    /// The downstream build driver script does not exist.
    #[error("Build driver not found: {path}")]
    DriverNotFound { path: PathBuf },

    /// The downstream build driver ran and reported failure.
    #[error("{driver} failed (exit code {})", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    DriverFailed { driver: String, code: Option<i32> },

    /// A process could not be spawned or awaited.
    #[error("Failed to run {command}: {source}")]
    CommandFailed {
        command: String,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for casm-ci operations.
pub type Result<T> = std::result::Result<T, CasmCiError>;
