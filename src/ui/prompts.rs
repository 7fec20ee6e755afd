//! Interactive prompts.

use console::Term;
use dialoguer::Input;

use crate::error::{CasmCiError, Result};

use super::Prompt;

/// Convert dialoguer errors to CasmCiError.
fn map_dialoguer_err(e: dialoguer::Error) -> CasmCiError {
    CasmCiError::Io(e.into())
}

/// Prompt the user for a line of text.
pub fn prompt_input(prompt: &Prompt, term: &Term) -> Result<String> {
    Input::<String>::new()
        .with_prompt(&prompt.question)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
