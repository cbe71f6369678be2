use crate::geometry::Point;

/// Resolves what lies under a screen-space point.
///
/// `point` uses the same coordinate system as the raw stroke. Implementations
/// typically raycast from the camera and compare the hit object's tag.
pub trait TargetOracle: Send + Sync {
    fn hits_tag(&self, point: Point, tag: &str) -> bool;
}
