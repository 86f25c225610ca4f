// Copyright 2025 the Tickwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named axis storage shared across plot elements.
//!
//! A chart owns one [`AxisRegistry`]; elements refer to axes by [`AxisHandle`] and bump a
//! use count while bound. Removing an axis is deterministic: the slot is freed the moment
//! the last user releases it, not at some later sweep.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::axis::AxisOptions;

/// Errors from registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// An axis with this name already exists.
    DuplicateName(String),
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "an axis named {name:?} already exists"),
        }
    }
}

impl core::error::Error for RegistryError {}

/// A stable handle to a registered axis.
///
/// Handles stay valid until the axis is removed; slot indices are recycled afterwards, so
/// a handle must not be held across removal of its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisHandle(usize);

struct AxisSlot {
    name: String,
    options: AxisOptions,
    /// Number of elements currently bound to this axis.
    uses: u32,
    /// Whether the owner asked for removal while the axis was still in use.
    doomed: bool,
}

/// Registry of named axes with use-counted removal.
#[derive(Default)]
pub struct AxisRegistry {
    slots: Vec<Option<AxisSlot>>,
    free: Vec<usize>,
    by_name: HashMap<String, AxisHandle>,
}

impl AxisRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new axis under `name`.
    pub fn create(&mut self, name: &str, options: AxisOptions) -> Result<AxisHandle, RegistryError> {
        let entry = match self.by_name.entry(String::from(name)) {
            Entry::Occupied(_) => return Err(RegistryError::DuplicateName(String::from(name))),
            Entry::Vacant(entry) => entry,
        };
        let slot = AxisSlot {
            name: String::from(name),
            options,
            uses: 0,
            doomed: false,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(slot);
                index
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        };
        let handle = AxisHandle(index);
        entry.insert(handle);
        Ok(handle)
    }

    /// Looks up an axis by name.
    pub fn lookup(&self, name: &str) -> Option<AxisHandle> {
        self.by_name.get(name).copied()
    }

    /// Returns the options of a live axis.
    pub fn options(&self, handle: AxisHandle) -> Option<&AxisOptions> {
        self.slot(handle).map(|slot| &slot.options)
    }

    /// Replaces the options of a live axis. Returns whether the handle was live.
    pub fn configure(&mut self, handle: AxisHandle, options: AxisOptions) -> bool {
        match self.slot_mut(handle) {
            Some(slot) => {
                slot.options = options;
                true
            }
            None => false,
        }
    }

    /// Returns the name of a live axis.
    pub fn name(&self, handle: AxisHandle) -> Option<&str> {
        self.slot(handle).map(|slot| slot.name.as_str())
    }

    /// Records one more element bound to this axis.
    pub fn acquire(&mut self, handle: AxisHandle) {
        if let Some(slot) = self.slot_mut(handle) {
            slot.uses += 1;
        }
    }

    /// Records one element unbinding from this axis.
    ///
    /// If the axis was doomed by [`remove`](Self::remove) and this was its last user, the
    /// slot is freed immediately.
    pub fn release(&mut self, handle: AxisHandle) {
        let Some(slot) = self.slot_mut(handle) else {
            return;
        };
        slot.uses = slot.uses.saturating_sub(1);
        if slot.uses == 0 && slot.doomed {
            self.destroy(handle);
        }
    }

    /// Removes an axis.
    ///
    /// With no bound elements the slot is freed right away; otherwise the axis is doomed,
    /// its name is released for reuse, and the slot is freed when the last user releases.
    pub fn remove(&mut self, handle: AxisHandle) {
        let Some(slot) = self.slot_mut(handle) else {
            return;
        };
        if slot.uses == 0 {
            self.destroy(handle);
        } else if !slot.doomed {
            slot.doomed = true;
            let name = core::mem::take(&mut slot.name);
            self.by_name.remove(&name);
        }
    }

    /// Number of live axes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Whether the registry holds no axes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn destroy(&mut self, handle: AxisHandle) {
        if let Some(slot) = self.slots[handle.0].take() {
            // A doomed slot's name was already released and may have been reclaimed by a
            // newer axis; only evict the index entry if it still points at this handle.
            if self.by_name.get(&slot.name) == Some(&handle) {
                self.by_name.remove(&slot.name);
            }
            self.free.push(handle.0);
        }
    }

    fn slot(&self, handle: AxisHandle) -> Option<&AxisSlot> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, handle: AxisHandle) -> Option<&mut AxisSlot> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn axes_are_found_by_name() {
        let mut registry = AxisRegistry::new();
        let x = registry.create("x", AxisOptions::new()).unwrap();
        let y = registry.create("y", AxisOptions::new()).unwrap();
        assert_eq!(registry.lookup("x"), Some(x));
        assert_eq!(registry.lookup("y"), Some(y));
        assert_eq!(registry.lookup("y2"), None);
        assert_eq!(registry.name(x), Some("x"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = AxisRegistry::new();
        registry.create("x", AxisOptions::new()).unwrap();
        let err = registry.create("x", AxisOptions::new()).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName(String::from("x")));
    }

    #[test]
    fn unused_axes_are_removed_immediately() {
        let mut registry = AxisRegistry::new();
        let x = registry.create("x", AxisOptions::new()).unwrap();
        registry.remove(x);
        assert_eq!(registry.lookup("x"), None);
        assert!(registry.options(x).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn removal_of_a_used_axis_waits_for_the_last_release() {
        let mut registry = AxisRegistry::new();
        let x = registry.create("x", AxisOptions::new()).unwrap();
        registry.acquire(x);
        registry.acquire(x);

        registry.remove(x);
        // Doomed but still live; the name is already free for reuse.
        assert!(registry.options(x).is_some());
        assert_eq!(registry.lookup("x"), None);
        let x2 = registry.create("x", AxisOptions::new()).unwrap();
        assert_ne!(x, x2);

        registry.release(x);
        assert!(registry.options(x).is_some());
        registry.release(x);
        assert!(registry.options(x).is_none());
    }

    #[test]
    fn repeated_removal_of_a_doomed_axis_leaves_other_axes_alone() {
        let mut registry = AxisRegistry::new();
        let x = registry.create("x", AxisOptions::new()).unwrap();
        registry.acquire(x);
        registry.remove(x);

        // The doomed slot holds an emptied name; a second removal (or its eventual
        // destruction) must not evict an axis legitimately registered under "".
        let unnamed = registry.create("", AxisOptions::new()).unwrap();
        registry.remove(x);
        assert_eq!(registry.lookup(""), Some(unnamed));

        registry.release(x);
        assert!(registry.options(x).is_none());
        assert_eq!(registry.lookup(""), Some(unnamed));
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut registry = AxisRegistry::new();
        let x = registry.create("x", AxisOptions::new()).unwrap();
        registry.remove(x);
        let y = registry.create("y", AxisOptions::new()).unwrap();
        assert_eq!(x.0, y.0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn configure_replaces_options_in_place() {
        let mut registry = AxisRegistry::new();
        let x = registry.create("x", AxisOptions::new()).unwrap();
        assert!(registry.configure(x, AxisOptions::new().with_log_scale(true)));
        assert!(registry.options(x).unwrap().log_scale);
    }
}
