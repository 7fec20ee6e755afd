//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use casm_ci::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet, false);
//! ui.message("Resolving build variables");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_input;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CasmTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Write command output to stdout regardless of output mode.
    fn output(&mut self, text: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask the user for a value.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A free-form text prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Variable name the answer is assigned to.
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_keeps_key_and_question() {
        let prompt = Prompt::new("CASM_CONDA_LABEL", "Conda label");
        assert_eq!(prompt.key, "CASM_CONDA_LABEL");
        assert_eq!(prompt.question, "Conda label");
    }
}
