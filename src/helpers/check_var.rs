//! Variable check.
//!
//! Ensures a named variable ends up with a value:
//! 1. An existing non-empty value is kept
//! 2. Otherwise the default is used, if there is one
//! 3. Otherwise an interactive UI is asked
//! 4. Otherwise resolution fails

use tracing::debug;

use crate::environment::{Resolved, ValueSource};
use crate::error::{CasmCiError, Result};
use crate::ui::{Prompt, UserInterface};

/// Makes sure a variable has a usable value.
pub trait VariableCheck {
    /// Resolve `name` from its current value or `default`.
    ///
    /// `description` is the human-readable label used in prompts and errors.
    fn check(
        &mut self,
        name: &str,
        description: &str,
        current: Option<Resolved>,
        default: Option<&str>,
    ) -> Result<Resolved>;
}

/// [`VariableCheck`] backed by a [`UserInterface`] for the prompt fallback.
pub struct CheckVar<'a> {
    ui: &'a mut dyn UserInterface,
}

impl<'a> CheckVar<'a> {
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui }
    }
}

impl VariableCheck for CheckVar<'_> {
    fn check(
        &mut self,
        name: &str,
        description: &str,
        current: Option<Resolved>,
        default: Option<&str>,
    ) -> Result<Resolved> {
        if let Some(current) = current.filter(|c| !c.value.is_empty()) {
            return Ok(current);
        }

        if let Some(default) = default.filter(|d| !d.is_empty()) {
            debug!("{} not set, using default '{}'", name, default);
            return Ok(Resolved::new(default.to_string(), ValueSource::Default));
        }

        if self.ui.is_interactive() {
            let answer = self.ui.prompt(&Prompt::new(name, description))?;
            if !answer.is_empty() {
                return Ok(Resolved::new(answer, ValueSource::Prompt));
            }
        }

        Err(CasmCiError::UnresolvedVariable {
            name: name.to_string(),
            description: description.to_string(),
        })
    }
}
