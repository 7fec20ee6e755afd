//! Non-interactive UI for CI/headless environments.

use crate::error::{CasmCiError, Result};

use super::{OutputMode, Prompt, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Status lines go to stderr so stdout carries only command output.
/// Prompts never block: they fail with the variable they were asking for.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", msg);
        }
    }

    fn output(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        Err(CasmCiError::UnresolvedVariable {
            name: prompt.key.clone(),
            description: prompt.question.clone(),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_fails_with_the_variable() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        let prompt = Prompt::new("CASM_CONDA_LABEL", "Conda label");
        let err = ui.prompt(&prompt).unwrap_err();
        assert_eq!(err.to_string(), "CASM_CONDA_LABEL must be set: Conda label");
    }

    #[test]
    fn is_never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }
}
