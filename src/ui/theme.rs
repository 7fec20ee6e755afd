//! Visual theme and styling.

use console::Style;

use crate::environment::EnvSnapshot;

/// Styles for status lines.
#[derive(Debug, Clone)]
pub struct CasmTheme {
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for CasmTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CasmTheme {
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
        }
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(env: &EnvSnapshot) -> bool {
    // https://no-color.org/
    if env.get("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stderr().is_term()
}
