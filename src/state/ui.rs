//! Local UI state for the theme toggle control.
//!
//! DESIGN
//! ======
//! The DOM class list stays the source of truth; this mirror only drives the
//! toggle button's glyph and label.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state shared with the toggle control via Leptos context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// Glyph for the toggle button: the theme a click switches to.
    #[must_use]
    pub fn toggle_glyph(&self) -> &'static str {
        if self.dark_mode() { "☀" } else { "☾" }
    }

    #[must_use]
    pub fn toggle_title(&self) -> &'static str {
        if self.dark_mode() { "Switch to light mode" } else { "Switch to dark mode" }
    }
}
