//! Local UI chrome state shared between layout components.
//!
//! DESIGN
//! ======
//! The sidebar visibility flag is owned here and provided through context:
//! the header toggles it, the sidebar and the landing shell read it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the landing layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// When `true` the sidebar is collapsed and content uses the full width.
    pub sidebar_hidden: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_hidden = !self.sidebar_hidden;
    }
}
