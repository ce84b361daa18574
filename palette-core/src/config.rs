//! Configuration constants and settings for the picker.

use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};

/// Color families, in swatch order.
pub const FAMILIES: [&str; 11] = [
    "gray", "red", "orange", "yellow", "green", "teal", "cyan", "blue", "indigo", "purple", "pink",
];

/// Variant levels, lightest first.
pub const VARIANTS: [&str; 9] = ["100", "200", "300", "400", "500", "600", "700", "800", "900"];

/// Class prefix the stylesheet uses for swatch backgrounds.
pub const CLASS_PREFIX: &str = "bd-";

/// Query parameter carrying one slot color (repeated per slot).
pub const QUERY_KEY: &str = "colour";

/// Smallest supported number of slots.
pub const MIN_SLOTS: usize = 2;

/// Largest supported number of slots.
pub const MAX_SLOTS: usize = 3;

/// Default number of slots (start, middle, end).
pub const DEFAULT_SLOT_COUNT: usize = 3;

/// Picker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Number of gradient slots (2 or 3).
    pub slot_count: usize,
    /// Push a share URL to history on every projection.
    pub url_sync: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            url_sync: true,
        }
    }
}

impl PaletteConfig {
    /// Create a configuration with the given slot count.
    pub fn new(slot_count: usize) -> Result<Self> {
        if !(MIN_SLOTS..=MAX_SLOTS).contains(&slot_count) {
            return Err(PaletteError::InvalidSlotCount {
                count: slot_count,
                min: MIN_SLOTS,
                max: MAX_SLOTS,
            });
        }
        Ok(Self {
            slot_count,
            ..Default::default()
        })
    }

    /// Two slots, no URL sharing.
    pub fn two_slot() -> Self {
        Self {
            slot_count: 2,
            url_sync: false,
        }
    }

    /// Toggle URL sharing.
    pub fn with_url_sync(mut self, url_sync: bool) -> Self {
        self.url_sync = url_sync;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_three_slot_with_urls() {
        let config = PaletteConfig::default();
        assert_eq!(config.slot_count, 3);
        assert!(config.url_sync);
    }

    #[test]
    fn test_slot_count_bounds() {
        assert!(PaletteConfig::new(2).is_ok());
        assert!(PaletteConfig::new(3).is_ok());
        assert!(matches!(
            PaletteConfig::new(1),
            Err(PaletteError::InvalidSlotCount { count: 1, .. })
        ));
        assert!(PaletteConfig::new(4).is_err());
    }
}
