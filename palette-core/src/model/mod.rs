//! Data model for palette colors and slot selections.

mod color;
mod name;
mod slots;

pub use color::{rgb_to_hex, Rgb};
pub use name::ColorName;
pub use slots::SlotState;
