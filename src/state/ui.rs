#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome shared across pages.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Contact menu behind the floating button.
    pub contact_menu_open: bool,
}

impl UiState {
    pub fn toggle_contact_menu(&mut self) {
        self.contact_menu_open = !self.contact_menu_open;
    }

    pub fn close_contact_menu(&mut self) {
        self.contact_menu_open = false;
    }
}
