//! Symbolic color names (`<family>-<variant>`).

use crate::config::{CLASS_PREFIX, FAMILIES, VARIANTS};
use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbolic color name such as `blue-500`.
///
/// Names coming from a URL or a click are carried as-is; use
/// [`ColorName::parse`] where only catalog names are acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorName(String);

impl ColorName {
    /// Wrap a name without checking it.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build the name for a family and variant.
    pub fn from_parts(family: &str, variant: &str) -> Self {
        Self(format!("{family}-{variant}"))
    }

    /// Parse a name, accepting only known families and variants.
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        let color = Self::new(name);
        if color.family_index().is_some() && color.variant_index().is_some() {
            Ok(color)
        } else {
            Err(PaletteError::UnknownColor {
                name: name.to_string(),
            })
        }
    }

    /// Every name in the palette, family-major.
    pub fn all() -> Vec<ColorName> {
        FAMILIES
            .iter()
            .flat_map(|family| {
                VARIANTS
                    .iter()
                    .map(move |variant| ColorName::from_parts(family, variant))
            })
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Family part (before the last `-`).
    pub fn family(&self) -> &str {
        self.0.rsplit_once('-').map_or(&self.0, |(family, _)| family)
    }

    /// Variant part (after the last `-`).
    pub fn variant(&self) -> &str {
        self.0.rsplit_once('-').map_or("", |(_, variant)| variant)
    }

    /// Position of the family in [`FAMILIES`].
    pub fn family_index(&self) -> Option<usize> {
        FAMILIES.iter().position(|f| *f == self.family())
    }

    /// Position of the variant in [`VARIANTS`].
    pub fn variant_index(&self) -> Option<usize> {
        VARIANTS.iter().position(|v| *v == self.variant())
    }

    /// Stylesheet class carrying this color's background, `bd-<name>`.
    pub fn class_name(&self) -> String {
        format!("{CLASS_PREFIX}{}", self.0)
    }

    /// Stylesheet variable token, `$<name>`.
    pub fn symbol(&self) -> String {
        format!("${}", self.0)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ColorName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names() {
        let names = ColorName::all();
        assert_eq!(names.len(), 99);
        assert_eq!(names[0].as_str(), "gray-100");
        assert_eq!(names[8].as_str(), "gray-900");
        assert_eq!(names[98].as_str(), "pink-900");
    }

    #[test]
    fn test_parts() {
        let name = ColorName::new("blue-500");
        assert_eq!(name.family(), "blue");
        assert_eq!(name.variant(), "500");
        assert_eq!(name.family_index(), Some(7));
        assert_eq!(name.variant_index(), Some(4));
        assert_eq!(name.class_name(), "bd-blue-500");
        assert_eq!(name.symbol(), "$blue-500");
    }

    #[test]
    fn test_parse() {
        assert!(ColorName::parse("teal-300").is_ok());
        assert!(ColorName::parse(" teal-300 ").is_ok());
        assert!(ColorName::parse("teal-350").is_err());
        assert!(ColorName::parse("mauve-300").is_err());
        assert!(ColorName::parse("teal").is_err());
    }
}
