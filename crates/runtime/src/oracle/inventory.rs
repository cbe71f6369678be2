//! [`gesture_core::InventoryOracle`] backed by a shared set of item names.
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use gesture_core::InventoryOracle;

/// Item names the performer currently holds.
///
/// Shared behind an `Arc` so the game's inventory can grant and revoke items
/// between strokes while the session keeps reading from the same instance.
#[derive(Debug, Default)]
pub struct InventoryOracleImpl {
    items: RwLock<HashSet<String>>,
}

impl InventoryOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: RwLock::new(items.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns true if the item was not held before.
    pub fn add_item(&self, name: impl Into<String>) -> bool {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into())
    }

    /// Returns true if the item was held.
    pub fn remove_item(&self, name: &str) -> bool {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }
}

impl InventoryOracle for InventoryOracleImpl {
    fn has_item(&self, name: &str) -> bool {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(name)
    }
}
