//! The color catalog: every palette name resolved to its hex value.

use std::collections::HashMap;

use crate::model::{rgb_to_hex, ColorName};
use crate::style::StyleResolver;

/// Mapping from color name to `#rrggbb`, built once per session.
///
/// Entries whose computed color could not be read hold `None`; lookups of
/// names that were never resolved also give `None`.
#[derive(Debug, Clone, Default)]
pub struct ColorCatalog {
    /// Names in resolution order.
    keys: Vec<ColorName>,
    hexes: HashMap<ColorName, Option<String>>,
}

impl ColorCatalog {
    /// Resolve every palette name through the styling layer.
    pub fn resolve(resolver: &impl StyleResolver) -> Self {
        Self::resolve_names(ColorName::all(), resolver)
    }

    /// Resolve a specific list of names.
    pub fn resolve_names(
        names: impl IntoIterator<Item = ColorName>,
        resolver: &impl StyleResolver,
    ) -> Self {
        let mut catalog = Self::default();
        for name in names {
            let computed = resolver.computed_background(&name.class_name());
            let hex = rgb_to_hex(&computed);
            if hex.is_none() {
                tracing::warn!("Could not resolve {} from computed color '{}'", name, computed);
            }
            catalog.insert(name, hex);
        }
        tracing::debug!("Resolved catalog with {} color(s)", catalog.len());
        catalog
    }

    fn insert(&mut self, name: ColorName, hex: Option<String>) {
        if self.hexes.insert(name.clone(), hex).is_none() {
            self.keys.push(name);
        }
    }

    /// Hex value for `name`, if resolved.
    pub fn hex(&self, name: &ColorName) -> Option<&str> {
        self.hexes.get(name).and_then(|h| h.as_deref())
    }

    /// Whether `name` has an entry (resolved or degraded).
    pub fn contains(&self, name: &ColorName) -> bool {
        self.hexes.contains_key(name)
    }

    /// All names, in resolution order.
    pub fn keys(&self) -> &[ColorName] {
        &self.keys
    }

    /// `(name, hex)` pairs in resolution order.
    pub fn entries(&self) -> impl Iterator<Item = (&ColorName, Option<&str>)> {
        self.keys.iter().map(|k| (k, self.hex(k)))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Catalog as a JSON object of name to hex (`null` when degraded).
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries()
                .map(|(name, hex)| {
                    let value = hex.map_or(serde_json::Value::Null, |h| h.into());
                    (name.to_string(), value)
                })
                .collect(),
        )
    }
}
