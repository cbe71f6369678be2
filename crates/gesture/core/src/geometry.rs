//! Planar geometry primitives shared by the normalizer and matcher.
//!
//! Everything here is pure: no allocation beyond the returned values and no
//! state. Coordinates are `f32` screen-space units for raw strokes and
//! unit-box units after normalization.
use core::ops::{Add, Div, Mul, Sub};

/// 2D coordinate. Value type without identity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation towards `other`; `t = 0` yields `self`.
    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Point {
    type Output = Point;
    fn div(self, rhs: f32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned bounds of a point set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Returns `None` for an empty slice.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Sum of consecutive segment lengths. Zero for fewer than two points.
pub fn path_length(points: &[Point]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Arithmetic mean of the points, or `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::ORIGIN, |acc, p| acc + *p);
    Some(sum / points.len() as f32)
}

/// Mean pointwise distance between two equally long sequences.
///
/// Returns `None` when the lengths differ or both are empty.
pub fn mean_pointwise_distance(a: &[Point], b: &[Point]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let total: f32 = a.iter().zip(b).map(|(p, q)| p.distance(*q)).sum();
    Some(total / a.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn path_length_sums_segments() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 10.0),
        ];
        assert_eq!(path_length(&points), 11.0);
        assert_eq!(path_length(&points[..1]), 0.0);
    }

    #[test]
    fn centroid_of_square_is_center() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert_eq!(centroid(&square), Some(Point::new(1.0, 1.0)));
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn bounding_box_tracks_extremes() {
        let bounds = BoundingBox::of(&[
            Point::new(1.0, -2.0),
            Point::new(-3.0, 5.0),
            Point::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point::new(-3.0, -2.0));
        assert_eq!(bounds.max, Point::new(1.0, 5.0));
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 7.0);
        assert!(bounds.contains(Point::new(1.0, 5.0)));
        assert!(!bounds.contains(Point::new(1.1, 5.0)));
    }

    #[test]
    fn mean_distance_requires_equal_lengths() {
        let a = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let b = [Point::new(0.0, 1.0), Point::new(1.0, 3.0)];
        assert_eq!(mean_pointwise_distance(&a, &b), Some(2.0));
        assert_eq!(mean_pointwise_distance(&a, &b[..1]), None);
    }
}
