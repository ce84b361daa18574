//! Fixed-length slot selections.

use serde::{Deserialize, Serialize};

use super::ColorName;

/// The colors currently chosen for each gradient slot, in slot order.
///
/// The length is fixed at construction; slots start unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotState {
    slots: Vec<Option<ColorName>>,
}

impl SlotState {
    /// Create `len` unset slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Set a slot. Returns `false` (and changes nothing) when `index` is out of range.
    pub fn set(&mut self, index: usize, name: ColorName) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(name);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&ColorName> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Iterate slots in order, unset ones as `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<&ColorName>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Set names only, in slot order.
    pub fn names(&self) -> impl Iterator<Item = &ColorName> {
        self.slots.iter().flatten()
    }

    /// Whether every slot holds a name.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Unset every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}
