//! [`gesture_core::TargetOracle`] over tagged screen-space rectangles.
use std::sync::{PoisonError, RwLock};

use gesture_core::{BoundingBox, Point, TargetOracle};

/// Screen-space footprint of a tagged object.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedRegion {
    pub tag: String,
    pub bounds: BoundingBox,
}

impl TaggedRegion {
    pub fn new(tag: impl Into<String>, min: Point, max: Point) -> Self {
        Self {
            tag: tag.into(),
            bounds: BoundingBox { min, max },
        }
    }
}

/// Stand-in for a camera raycast: a point hits a tag if it falls inside any
/// region carrying that tag.
///
/// The scene layer refreshes the regions as objects move on screen.
#[derive(Debug, Default)]
pub struct TargetOracleImpl {
    regions: RwLock<Vec<TaggedRegion>>,
}

impl TargetOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regions(regions: Vec<TaggedRegion>) -> Self {
        Self {
            regions: RwLock::new(regions),
        }
    }

    pub fn add_region(&self, region: TaggedRegion) {
        self.regions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(region);
    }

    /// Replaces every region, e.g. after the camera moved.
    pub fn set_regions(&self, regions: Vec<TaggedRegion>) {
        *self.regions.write().unwrap_or_else(PoisonError::into_inner) = regions;
    }
}

impl TargetOracle for TargetOracleImpl {
    fn hits_tag(&self, point: Point, tag: &str) -> bool {
        self.regions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|region| region.tag == tag && region.bounds.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_requires_matching_tag_and_containment() {
        let targets = TargetOracleImpl::with_regions(vec![TaggedRegion::new(
            "Enemy",
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
        )]);
        assert!(targets.hits_tag(Point::new(15.0, 15.0), "Enemy"));
        assert!(!targets.hits_tag(Point::new(15.0, 15.0), "Door"));
        assert!(!targets.hits_tag(Point::new(25.0, 15.0), "Enemy"));

        targets.set_regions(Vec::new());
        assert!(!targets.hits_tag(Point::new(15.0, 15.0), "Enemy"));
    }
}
