/// Answers whether the performer currently holds a named item.
///
/// Implementations must be side-effect free; the recognizer may ask several
/// times per stroke.
pub trait InventoryOracle: Send + Sync {
    fn has_item(&self, name: &str) -> bool;
}
