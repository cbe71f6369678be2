//! Runtime implementations of the `gesture-core` oracle traits.
//!
//! [`OracleManager`] bundles whichever oracles the host provides and builds
//! the [`gesture_core::GestureEnv`] handed to the recognizer on pointer-up.
//! Hosts with their own inventory or scene code can plug in any
//! implementation of the core traits instead of the ones defined here.
mod inventory;
mod targets;

use std::sync::Arc;

use gesture_core::{Env, GestureEnv, InventoryOracle, TargetOracle};

pub use inventory::InventoryOracleImpl;
pub use targets::{TaggedRegion, TargetOracleImpl};

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Default)]
pub struct OracleManager {
    pub(crate) inventory: Option<Arc<dyn InventoryOracle>>,
    pub(crate) targets: Option<Arc<dyn TargetOracle>>,
}

impl OracleManager {
    pub fn new(inventory: Arc<dyn InventoryOracle>, targets: Arc<dyn TargetOracle>) -> Self {
        Self {
            inventory: Some(inventory),
            targets: Some(targets),
        }
    }

    pub fn with_inventory(mut self, inventory: Arc<dyn InventoryOracle>) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn with_targets(mut self, targets: Arc<dyn TargetOracle>) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Converts oracle manager into GestureEnv for gesture-core
    pub fn as_gesture_env(&self) -> GestureEnv<'_> {
        Env::new(self.inventory.as_deref(), self.targets.as_deref())
    }
}

impl std::fmt::Debug for OracleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleManager")
            .field("inventory", &self.inventory.is_some())
            .field("targets", &self.targets.is_some())
            .finish()
    }
}
