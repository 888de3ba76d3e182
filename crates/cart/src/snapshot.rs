//! Snapshot persistence capability.
//!
//! The cart serializes its item sequence to exactly one key-value slot.
//! Abstracting the slot behind [`SnapshotStore`] lets the same aggregate
//! logic run against an in-memory fake in tests and a real on-device file
//! in production.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::line_item::LineItem;

/// The serialized form of the cart: its item sequence and nothing else.
///
/// Transient state (the visibility flag) is deliberately absent. The wire
/// shape is a plain JSON array of line items; there is no version field or
/// migration scheme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
}

impl Snapshot {
    /// Snapshot with no items.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }
}

/// One key-value slot holding a cart snapshot.
///
/// `load` distinguishes "nothing stored" (`Ok(None)`) from "stored bytes
/// are not a snapshot" (`Err`); the cart treats both as an empty cart but
/// logs the latter. `save` replaces the slot wholesale - there is no
/// merging and no atomicity across concurrent holders of the same slot.
pub trait SnapshotStore {
    /// Read the stored snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the slot exists but cannot be read or
    /// decoded.
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError>;

    /// Replace the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the slot cannot be written.
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError>;
}

/// In-memory snapshot slot.
///
/// Used as the test double and for sessions that do not want an on-device
/// cart. Stores the serialized JSON rather than the decoded value so the
/// full encode/decode path is exercised. Cloning yields a handle to the
/// same slot, which is how tests observe writes made through the cart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-filled with raw bytes, valid or not.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// The raw stored JSON, if anything has been saved.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        self.slot
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(SnapshotError::from)
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let encoded = serde_json::to_string(snapshot)?;
        *self.slot.borrow_mut() = Some(encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load().is_ok_and(|snapshot| snapshot.is_none()));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let snapshot = Snapshot::empty();
        store.save(&snapshot).expect("save");
        assert_eq!(store.load().expect("load"), Some(snapshot));
    }

    #[test]
    fn test_corrupt_slot_is_an_error_not_a_panic() {
        let store = MemoryStore::with_raw("{not json");
        assert!(store.load().is_err());
    }

    #[test]
    fn test_snapshot_wire_shape_is_a_bare_array() {
        let store = MemoryStore::new();
        store.save(&Snapshot::empty()).expect("save");
        assert_eq!(store.raw().as_deref(), Some("[]"));
    }
}
