//! Fixed-capacity registries keyed by short strings.
//!
//! Entries live in an inline array and are scanned linearly. Removing an entry
//! only clears its `active` flag; the slot is reused by the next insert.
//! Inserting into a full registry is rejected and counted as a saturation.

use crate::{
    color::Color,
    config::{MAX_LIBRARY_COLORS, MAX_LIBRARY_NAME_LENGTH, MAX_TAG_COLORS, MAX_TAG_LENGTH},
    fixed_str::FixedStr,
};

#[derive(Clone, Copy, Debug, Default)]
struct Slot<V, const L: usize> {
    key: FixedStr<L>,
    value: V,
    active: bool,
}

/// Up to `N` entries, keys truncated to `L` bytes.
#[derive(Clone, Debug)]
pub struct Registry<V, const N: usize, const L: usize> {
    slots: [Slot<V, L>; N],
    saturation: usize,
}

impl<V: Copy + Default, const N: usize, const L: usize> Default for Registry<V, N, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy + Default, const N: usize, const L: usize> Registry<V, N, L> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::default()),
            saturation: 0,
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.active && slot.key.matches(key))
    }

    /// Inserts or updates `key`. Returns false when the registry is full.
    pub fn insert(&mut self, key: &str, value: V) -> bool {
        if let Some(index) = self.position(key) {
            self.slots[index].value = value;
            return true;
        }
        match self.slots.iter_mut().find(|slot| !slot.active) {
            Some(slot) => {
                *slot = Slot {
                    key: FixedStr::truncated(key),
                    value,
                    active: true,
                };
                true
            }
            None => {
                self.saturation += 1;
                false
            }
        }
    }

    /// Deactivates `key`. Returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => {
                self.slots[index].active = false;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.position(key).map(|index| self.slots[index].value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of inserts rejected because the registry was full.
    pub fn saturation(&self) -> usize {
        self.saturation
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter(|slot| slot.active)
            .map(|slot| slot.key.as_str())
    }
}

/// Presentation colors keyed by tag, independent of filtering.
pub type TagColors = Registry<Color, MAX_TAG_COLORS, MAX_TAG_LENGTH>;

/// Presentation colors keyed by library name.
pub type LibraryColors = Registry<Color, MAX_LIBRARY_COLORS, MAX_LIBRARY_NAME_LENGTH>;
