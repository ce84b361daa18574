//! RGB values and the computed-style string conversions around them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Format as `#rrggbb`, lowercase.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional, any case).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let nibble = |c: u8| -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        };

        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => Some(Self::new(
                nibble(bytes[0])? * 17,
                nibble(bytes[1])? * 17,
                nibble(bytes[2])? * 17,
            )),
            6 => {
                let pair = |i: usize| -> Option<u8> {
                    Some(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?)
                };
                Some(Self::new(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => None,
        }
    }

    /// Parse the numeric components of an `rgb(...)`/`rgba(...)` string.
    ///
    /// Every run of ASCII digits counts as one component; the first three are
    /// used and anything after them (alpha) is ignored. Components above 255
    /// saturate.
    pub fn from_components(s: &str) -> Option<Self> {
        let mut channels = digit_runs(s).map(|run| {
            run.parse::<u32>()
                .map(|v| v.min(255) as u8)
                .unwrap_or(u8::MAX)
        });
        Some(Self::new(channels.next()?, channels.next()?, channels.next()?))
    }

    /// Parse a CSS color value as written in a stylesheet.
    ///
    /// Accepts hex notation and `rgb()`/`rgba()` functions.
    pub fn from_css(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value);
        }
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
            return Self::from_components(value);
        }
        None
    }

    /// Sass-style `mix`: `weight` percent of `other`, the rest of `self`.
    pub fn mix(&self, other: Rgb, weight: u8) -> Rgb {
        let w = u32::from(weight.min(100));
        let channel = |a: u8, b: u8| -> u8 {
            ((u32::from(b) * w + u32::from(a) * (100 - w) + 50) / 100) as u8
        };
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Lighten towards white by `weight` percent.
    pub fn tint(&self, weight: u8) -> Rgb {
        self.mix(Rgb::WHITE, weight)
    }

    /// Darken towards black by `weight` percent.
    pub fn shade(&self, weight: u8) -> Rgb {
        self.mix(Rgb::BLACK, weight)
    }
}

/// Computed-style form, `rgb(r, g, b)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn digit_runs(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}

/// Convert a computed color string such as `rgb(13, 110, 253)` to `#0d6efd`.
///
/// Returns `None` when the string carries fewer than three numeric
/// components.
pub fn rgb_to_hex(rgb: &str) -> Option<String> {
    Rgb::from_components(rgb).map(|c| c.to_hex())
}
