//! Projection of slot selections into gradient CSS.

use serde::Serialize;

use crate::catalog::ColorCatalog;
use crate::model::SlotState;

/// Everything rendered from one slot state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    /// `linear-gradient(to right, #rrggbb, ...)`
    pub gradient_hex: String,
    /// `linear-gradient(to right, $name, ...)`
    pub gradient_symbolic: String,
    /// Text for the code display: both declarations, dedented.
    pub code: String,
}

/// Project slots through the catalog.
///
/// Stops follow slot order. A name missing from the catalog gives an empty
/// hex stop; an unset slot gives an empty stop in both forms.
pub fn project(slots: &SlotState, catalog: &ColorCatalog) -> Projection {
    let hexes: Vec<&str> = slots
        .iter()
        .map(|slot| slot.and_then(|name| catalog.hex(name)).unwrap_or(""))
        .collect();
    let symbols: Vec<String> = slots
        .iter()
        .map(|slot| slot.map(|name| name.symbol()).unwrap_or_default())
        .collect();

    let gradient_hex = linear_gradient(&hexes);
    let gradient_symbolic = linear_gradient(&symbols);
    let code = code_display(&gradient_symbolic, &gradient_hex);

    Projection {
        gradient_hex,
        gradient_symbolic,
        code,
    }
}

/// `linear-gradient(to right, a, b, ...)`.
pub fn linear_gradient<S: AsRef<str>>(stops: &[S]) -> String {
    let stops: Vec<&str> = stops.iter().map(|s| s.as_ref()).collect();
    format!("linear-gradient(to right, {})", stops.join(", "))
}

/// Code display text: the symbolic declaration, an `/* OR */` marker, then
/// the hex declaration.
pub fn code_display(gradient_symbolic: &str, gradient_hex: &str) -> String {
    dedent(&format!(
        "
        background: {gradient_symbolic};

        /* OR */

        background: {gradient_hex};
        "
    ))
}

/// Strip leading spaces and tabs from every line, then trim the whole text.
pub fn dedent(text: &str) -> String {
    text.lines()
        .map(|line| line.trim_start_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
