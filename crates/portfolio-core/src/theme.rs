//! Dark/light theme flag.

/// Single source of truth for the page's style scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeToggle {
    dark_mode: bool,
}

impl ThemeToggle {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Class applied to the root element
    pub fn scope_class(&self) -> &'static str {
        if self.dark_mode {
            "dark"
        } else {
            ""
        }
    }

    /// Glyph for the toggle button: a sun while dark, a moon while light
    pub fn icon(&self) -> &'static str {
        if self.dark_mode {
            "\u{2600}"
        } else {
            "\u{263E}"
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        "Toggle dark mode"
    }
}
