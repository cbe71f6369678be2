//! Raw and normalized point sequences.
use crate::geometry::Point;

/// Raw pointer positions in drawing order.
///
/// Grows while the pointer is held down; the normalizer only ever reads it,
/// so the original samples stay available for target gating.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Evenly strided subset of the raw points, starting at the first one.
    ///
    /// The stride is `max(1, len / target)`, so long strokes yield roughly
    /// `target` samples and short strokes yield every point.
    pub fn strided_samples(&self, target: usize) -> impl Iterator<Item = Point> + '_ {
        let stride = (self.points.len() / target.max(1)).max(1);
        self.points.iter().copied().step_by(stride)
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Stroke after resampling, unit-box scaling and centroid translation.
///
/// Produced by [`crate::Normalizer`]; an empty value marks a template that
/// has not been recorded yet.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NormalizedStroke {
    points: Vec<Point>,
}

impl NormalizedStroke {
    /// Wraps points that were normalized elsewhere (for example, loaded from
    /// a template library). No invariants are re-checked.
    pub fn from_normalized(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
