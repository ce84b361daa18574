//! Style resolution: the styling layer that gives each swatch class its color.
//!
//! Resolvers answer the same question a browser's computed style does: what
//! is the background color of an element carrying class `bd-<name>`? The
//! answer is returned as a computed-style string (`rgb(r, g, b)`), and
//! undefined classes come back transparent.

use std::collections::HashMap;
use std::path::Path;

use crate::config::CLASS_PREFIX;
use crate::error::{PaletteError, Result};
use crate::model::Rgb;

/// Computed background of an element with no background rule.
pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Source of computed background colors for swatch classes.
pub trait StyleResolver {
    /// Computed background color for an element with `class_name`.
    fn computed_background(&self, class_name: &str) -> String;
}

impl<T: StyleResolver + ?Sized> StyleResolver for &T {
    fn computed_background(&self, class_name: &str) -> String {
        (**self).computed_background(class_name)
    }
}

impl<T: StyleResolver + ?Sized> StyleResolver for Box<T> {
    fn computed_background(&self, class_name: &str) -> String {
        (**self).computed_background(class_name)
    }
}

/// Gray scale, 100 through 900.
const GRAYS: [u32; 9] = [
    0xf8f9fa, 0xe9ecef, 0xdee2e6, 0xced4da, 0xadb5bd, 0x6c757d, 0x495057, 0x343a40, 0x212529,
];

/// Base (500) color of every hued family.
const BASES: [(&str, u32); 10] = [
    ("red", 0xdc3545),
    ("orange", 0xfd7e14),
    ("yellow", 0xffc107),
    ("green", 0x198754),
    ("teal", 0x20c997),
    ("cyan", 0x0dcaf0),
    ("blue", 0x0d6efd),
    ("indigo", 0x6610f2),
    ("purple", 0x6f42c1),
    ("pink", 0xd63384),
];

/// Tint/shade weight per variant: negative tints, positive shades.
const SCALE: [(&str, i8); 9] = [
    ("100", -80),
    ("200", -60),
    ("300", -40),
    ("400", -20),
    ("500", 0),
    ("600", 20),
    ("700", 40),
    ("800", 60),
    ("900", 80),
];

/// The built-in framework palette.
///
/// Grays are fixed values; every other family is derived from its base color
/// by tinting (lighter variants) or shading (darker variants).
#[derive(Debug, Clone)]
pub struct BootstrapStyles {
    colors: HashMap<String, Rgb>,
}

impl Default for BootstrapStyles {
    fn default() -> Self {
        Self::new()
    }
}

impl BootstrapStyles {
    pub fn new() -> Self {
        let mut colors = HashMap::new();

        for ((variant, _), gray) in SCALE.iter().zip(GRAYS) {
            colors.insert(format!("gray-{variant}"), Rgb::from_u32(gray));
        }

        for (family, base) in BASES {
            let base = Rgb::from_u32(base);
            for (variant, weight) in SCALE {
                let color = match weight {
                    w if w < 0 => base.tint(w.unsigned_abs()),
                    0 => base,
                    w => base.shade(w as u8),
                };
                colors.insert(format!("{family}-{variant}"), color);
            }
        }

        Self { colors }
    }

    /// Color for a palette name such as `blue-500`.
    pub fn color(&self, name: &str) -> Option<Rgb> {
        self.colors.get(name).copied()
    }
}

impl StyleResolver for BootstrapStyles {
    fn computed_background(&self, class_name: &str) -> String {
        class_name
            .strip_prefix(CLASS_PREFIX)
            .and_then(|name| self.color(name))
            .map_or_else(|| TRANSPARENT.to_string(), |c| c.to_string())
    }
}

/// Background rules read from CSS text.
///
/// Only simple class selectors with a `background-color` (or `background`)
/// declaration are understood:
///
/// ```css
/// .bd-blue-500 { background-color: #0d6efd; }
/// .bd-red-100, .bd-red-200 { background: rgb(248, 215, 218); }
/// ```
///
/// Classes without a rule resolve through the fallback, or transparent.
pub struct Stylesheet {
    rules: HashMap<String, Rgb>,
    fallback: Option<Box<dyn StyleResolver>>,
}

impl std::fmt::Debug for Stylesheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stylesheet")
            .field("rules", &self.rules.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl Stylesheet {
    /// Parse stylesheet text.
    pub fn parse(css: &str) -> Result<Self> {
        let css = strip_comments(css);
        let mut rules = HashMap::new();
        let mut rest = css.as_str();
        let mut line = 1;

        while let Some(open) = rest.find('{') {
            let selectors = &rest[..open];
            if let Some(stray) = selectors.find('}') {
                return Err(PaletteError::StylesheetParse {
                    line: line + selectors[..stray].matches('\n').count(),
                    message: "unexpected '}'".to_string(),
                });
            }
            let Some(close) = rest[open..].find('}') else {
                return Err(PaletteError::StylesheetParse {
                    line: line + selectors.matches('\n').count(),
                    message: "unterminated rule block".to_string(),
                });
            };
            let body = &rest[open + 1..open + close];

            if let Some(color) = background_of(body) {
                for selector in selectors.split(',') {
                    if let Some(class) = selector.trim().strip_prefix('.') {
                        rules.insert(class.to_string(), color);
                    }
                }
            }

            line += rest[..open + close + 1].matches('\n').count();
            rest = &rest[open + close + 1..];
        }

        if rest.contains('}') {
            return Err(PaletteError::StylesheetParse {
                line,
                message: "unexpected '}'".to_string(),
            });
        }

        tracing::debug!("Parsed stylesheet with {} rule(s)", rules.len());
        Ok(Self {
            rules,
            fallback: None,
        })
    }

    /// Read and parse a stylesheet file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PaletteError::StylesheetNotFound {
                path: path.to_path_buf(),
            });
        }
        let css = std::fs::read_to_string(path)?;
        Self::parse(&css)
    }

    /// Resolve classes this sheet does not define through `fallback`.
    pub fn with_fallback(mut self, fallback: impl StyleResolver + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Number of class rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl StyleResolver for Stylesheet {
    fn computed_background(&self, class_name: &str) -> String {
        if let Some(color) = self.rules.get(class_name) {
            return color.to_string();
        }
        match &self.fallback {
            Some(fallback) => fallback.computed_background(class_name),
            None => TRANSPARENT.to_string(),
        }
    }
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => {
                // Keep line numbering intact
                let comment = &rest[start..start + 2 + end + 2];
                out.extend(comment.chars().filter(|c| *c == '\n'));
                rest = &rest[start + 2 + end + 2..];
            }
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn background_of(body: &str) -> Option<Rgb> {
    body.split(';').find_map(|decl| {
        let (property, value) = decl.split_once(':')?;
        match property.trim().to_ascii_lowercase().as_str() {
            "background-color" | "background" => {
                Rgb::from_css(value.trim().trim_end_matches("!important"))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rgb_to_hex;

    fn hex(resolver: &impl StyleResolver, name: &str) -> Option<String> {
        rgb_to_hex(&resolver.computed_background(&format!("bd-{name}")))
    }

    #[test]
    fn test_bootstrap_known_values() {
        let styles = BootstrapStyles::new();
        assert_eq!(hex(&styles, "blue-500").as_deref(), Some("#0d6efd"));
        assert_eq!(hex(&styles, "blue-100").as_deref(), Some("#cfe2ff"));
        assert_eq!(hex(&styles, "blue-600").as_deref(), Some("#0a58ca"));
        assert_eq!(hex(&styles, "red-500").as_deref(), Some("#dc3545"));
        assert_eq!(hex(&styles, "gray-100").as_deref(), Some("#f8f9fa"));
        assert_eq!(hex(&styles, "gray-900").as_deref(), Some("#212529"));
    }

    #[test]
    fn test_bootstrap_unknown_is_transparent() {
        let styles = BootstrapStyles::new();
        assert_eq!(styles.computed_background("bd-mauve-500"), TRANSPARENT);
        assert_eq!(styles.computed_background("blue-500"), TRANSPARENT);
    }

    #[test]
    fn test_stylesheet_rules() {
        let sheet = Stylesheet::parse(
            "/* swatches */\n\
             .bd-blue-500 { background-color: #0d6efd; }\n\
             .bd-red-100, .bd-red-200 { color: white; background: rgb(248, 215, 218) !important; }\n\
             .bd-none { color: red; }\n",
        )
        .unwrap();

        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.computed_background("bd-blue-500"), "rgb(13, 110, 253)");
        assert_eq!(sheet.computed_background("bd-red-200"), "rgb(248, 215, 218)");
        assert_eq!(sheet.computed_background("bd-none"), TRANSPARENT);
    }

    #[test]
    fn test_stylesheet_fallback() {
        let sheet = Stylesheet::parse(".bd-blue-500 { background-color: #000; }")
            .unwrap()
            .with_fallback(BootstrapStyles::new());

        assert_eq!(hex(&sheet, "blue-500").as_deref(), Some("#000000"));
        assert_eq!(hex(&sheet, "red-500").as_deref(), Some("#dc3545"));
    }

    #[test]
    fn test_stylesheet_unterminated() {
        let err = Stylesheet::parse(".a { background: #fff; }\n.b {\n background: #000;").unwrap_err();
        assert!(matches!(err, PaletteError::StylesheetParse { line: 2, .. }));
    }

    #[test]
    fn test_stylesheet_stray_close_brace() {
        let css = ".a { background: #fff; }\n}\n.b { background: #000; }";
        let err = Stylesheet::parse(css).unwrap_err();
        match err {
            PaletteError::StylesheetParse { line, message } => {
                assert_eq!(line, 2);
                assert_eq!(message, "unexpected '}'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
