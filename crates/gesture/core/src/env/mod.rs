//! Traits describing the external queries gates rely on.
//!
//! The recognizer never owns inventory or scene data. It asks an
//! [`InventoryOracle`] whether an item is held and a [`TargetOracle`] what lies
//! under a screen point. The [`Env`] aggregate bundles both so callers can
//! supply only what their templates need.
mod error;
mod inventory;
mod targets;

pub use error::OracleError;
pub use inventory::InventoryOracle;
pub use targets::TargetOracle;

/// Aggregates the read-only oracles consulted while gating a match.
#[derive(Debug)]
pub struct Env<'a, I, T>
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
{
    inventory: Option<&'a I>,
    targets: Option<&'a T>,
}

pub type GestureEnv<'a> = Env<'a, dyn InventoryOracle + 'a, dyn TargetOracle + 'a>;

impl<I, T> Clone for Env<'_, I, T>
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T> Copy for Env<'_, I, T>
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
{
}

impl<'a, I, T> Env<'a, I, T>
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
{
    pub fn new(inventory: Option<&'a I>, targets: Option<&'a T>) -> Self {
        Self { inventory, targets }
    }

    pub fn with_all(inventory: &'a I, targets: &'a T) -> Self {
        Self::new(Some(inventory), Some(targets))
    }

    pub fn empty() -> Self {
        Self {
            inventory: None,
            targets: None,
        }
    }

    /// Returns the InventoryOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::InventoryNotAvailable` if no inventory oracle was provided.
    pub fn inventory(&self) -> Result<&'a I, OracleError> {
        self.inventory.ok_or(OracleError::InventoryNotAvailable)
    }

    /// Returns the TargetOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TargetsNotAvailable` if no target oracle was provided.
    pub fn targets(&self) -> Result<&'a T, OracleError> {
        self.targets.ok_or(OracleError::TargetsNotAvailable)
    }
}
