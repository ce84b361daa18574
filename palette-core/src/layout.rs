//! Radial placement of swatches on a palette wheel.
//!
//! Each family gets a spoke (evenly spaced angle), each variant a ring; the
//! lightest variant sits on the outermost ring.

use crate::config::{FAMILIES, VARIANTS};
use crate::model::ColorName;
use serde::Serialize;

/// Where one swatch sits on the wheel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwatchPlacement {
    pub name: ColorName,
    /// Spoke angle in whole degrees.
    pub angle_deg: i32,
    /// Ring number, 1 (innermost) to 9.
    pub level: usize,
}

/// Spoke angle for a family position.
pub fn family_angle(family_index: usize) -> i32 {
    ((360.0 / FAMILIES.len() as f64) * family_index as f64).round() as i32
}

/// Ring for a variant position.
pub fn variant_level(variant_index: usize) -> usize {
    VARIANTS.len() - variant_index
}

/// Placements for the whole palette, in catalog order.
pub fn wheel() -> Vec<SwatchPlacement> {
    FAMILIES
        .iter()
        .enumerate()
        .flat_map(|(fi, family)| {
            VARIANTS
                .iter()
                .enumerate()
                .map(move |(vi, variant)| SwatchPlacement {
                    name: ColorName::from_parts(family, variant),
                    angle_deg: family_angle(fi),
                    level: variant_level(vi),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angles() {
        assert_eq!(family_angle(0), 0);
        assert_eq!(family_angle(1), 33);
        assert_eq!(family_angle(10), 327);
    }

    #[test]
    fn test_levels_reverse_variants() {
        assert_eq!(variant_level(0), 9);
        assert_eq!(variant_level(8), 1);
    }

    #[test]
    fn test_wheel_covers_palette() {
        let wheel = wheel();
        assert_eq!(wheel.len(), 99);
        let blue_100 = wheel
            .iter()
            .find(|p| p.name.as_str() == "blue-100")
            .unwrap();
        assert_eq!(blue_100.angle_deg, 229);
        assert_eq!(blue_100.level, 9);
    }
}
