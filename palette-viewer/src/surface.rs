//! The picker's view of what the page currently shows.

use palette_core::{ColorName, Rgb, Surface};

use crate::gradient;

/// Displayed state, updated by the controller.
#[derive(Debug, Default)]
pub struct ViewSurface {
    /// Name in each large slot swatch.
    pub slots: Vec<Option<ColorName>>,
    /// Background gradient as CSS.
    pub background: String,
    /// Background gradient stops, parsed from `background`.
    pub stops: Vec<Option<Rgb>>,
    /// Code display text.
    pub code: String,
}

impl ViewSurface {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
            ..Default::default()
        }
    }
}

impl Surface for ViewSurface {
    fn show_slot(&mut self, index: usize, name: Option<&ColorName>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = name.cloned();
        }
    }

    fn set_background(&mut self, gradient_hex: &str) {
        self.background = gradient_hex.to_string();
        self.stops = gradient::parse_stops(gradient_hex);
    }

    fn set_code(&mut self, code: &str) {
        self.code = code.to_string();
    }
}
