//! palette-core - Core library for the gradient palette picker.
//!
//! Colors are picked from a fixed palette (11 families × 9 variants) into
//! two or three slots; the slots project into a CSS `linear-gradient` in
//! both `$name` and `#rrggbb` form, and into a shareable URL.
//!
//! # Example
//!
//! ```
//! use palette_core::{BootstrapStyles, ColorCatalog, ColorName, SlotState, project};
//!
//! let catalog = ColorCatalog::resolve(&BootstrapStyles::new());
//! let mut slots = SlotState::new(2);
//! slots.set(0, ColorName::new("blue-500"));
//! slots.set(1, ColorName::new("red-100"));
//!
//! let out = project(&slots, &catalog);
//! assert_eq!(out.gradient_hex, "linear-gradient(to right, #0d6efd, #f8d7da)");
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod layout;
pub mod model;
pub mod projection;
pub mod share;
pub mod style;

// Re-exports for convenience
pub use catalog::ColorCatalog;
pub use config::PaletteConfig;
pub use controller::{LoadSource, PaletteController, Surface};
pub use error::{PaletteError, Result};
pub use history::{History, SessionHistory};
pub use layout::SwatchPlacement;
pub use model::{rgb_to_hex, ColorName, Rgb, SlotState};
pub use projection::{dedent, project, Projection};
pub use style::{BootstrapStyles, StyleResolver, Stylesheet};
