//! Text surface: keeps what a page would show so the CLI can print it.

use palette_core::{ColorName, Surface};

/// Latest rendered state, as plain text.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    /// Name shown in each large slot swatch.
    pub slots: Vec<Option<String>>,
    /// Page background (hex gradient).
    pub background: String,
    /// Code display text.
    pub code: String,
}

impl TerminalSurface {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
            ..Default::default()
        }
    }
}

impl Surface for TerminalSurface {
    fn show_slot(&mut self, index: usize, name: Option<&ColorName>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = name.map(ToString::to_string);
        }
    }

    fn set_background(&mut self, gradient_hex: &str) {
        self.background = gradient_hex.to_string();
    }

    fn set_code(&mut self, code: &str) {
        self.code = code.to_string();
    }
}
