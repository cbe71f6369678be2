//! Stroke normalization pipeline.
//!
//! A raw stroke goes through three pure stages, always in this order:
//!
//! 1. [`resample`] to exactly `n` points evenly spaced along the path
//! 2. [`scale_to_unit_box`] so the bounding box becomes `[0,1]²`
//! 3. [`translate_to_origin`] so the centroid sits on `(0,0)`
//!
//! Resampling first keeps the bounding box independent of the input sampling
//! rate, and scaling before translating keeps the centroid in unit-box space.
//! Reordering the stages changes match scores.
use crate::error::{ErrorSeverity, GestureError};
use crate::geometry::{self, BoundingBox, Point};
use crate::stroke::{NormalizedStroke, Stroke};

/// Span substituted for a zero-width or zero-height bounding box.
pub const DEGENERATE_SPAN: f32 = 0.01;

/// Errors raised when a stroke cannot be normalized.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalizeError {
    /// Path length is undefined below two points.
    #[error("stroke has {len} point(s), at least 2 are required")]
    TooFewPoints { len: usize },

    /// Interval `L / (n - 1)` is undefined below two output points.
    #[error("resample count {count} is below the minimum of 2")]
    ResampleCountTooSmall { count: usize },

    /// All points coincide (a tap without movement).
    #[error("stroke has zero path length")]
    ZeroLength,
}

impl GestureError for NormalizeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TooFewPoints { .. } => ErrorSeverity::Internal,
            Self::ResampleCountTooSmall { .. } | Self::ZeroLength => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewPoints { .. } => "NORMALIZE_TOO_FEW_POINTS",
            Self::ResampleCountTooSmall { .. } => "NORMALIZE_RESAMPLE_COUNT_TOO_SMALL",
            Self::ZeroLength => "NORMALIZE_ZERO_LENGTH",
        }
    }
}

/// Runs the three-stage pipeline with a fixed output size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Normalizer {
    resample_count: usize,
}

impl Normalizer {
    pub const fn new(resample_count: usize) -> Self {
        Self { resample_count }
    }

    pub const fn resample_count(&self) -> usize {
        self.resample_count
    }

    /// Normalizes `stroke` without modifying it.
    ///
    /// # Errors
    ///
    /// See [`NormalizeError`]; callers that enforce a minimum raw point count
    /// and a minimum movement per point never hit these.
    pub fn normalize(&self, stroke: &Stroke) -> Result<NormalizedStroke, NormalizeError> {
        let mut points = resample(stroke.points(), self.resample_count)?;
        scale_to_unit_box(&mut points);
        translate_to_origin(&mut points);
        Ok(NormalizedStroke::from_normalized(points))
    }
}

/// Rewrites `points` as exactly `n` points evenly spaced by arc length.
///
/// Each interpolated point becomes the waypoint the walk continues from, so a
/// long segment can emit several points. The walk keeps that waypoint in a
/// pending slot instead of inserting into the input.
pub fn resample(points: &[Point], n: usize) -> Result<Vec<Point>, NormalizeError> {
    if n < 2 {
        return Err(NormalizeError::ResampleCountTooSmall { count: n });
    }
    let (first, last) = match points {
        [first, .., last] => (*first, *last),
        _ => return Err(NormalizeError::TooFewPoints { len: points.len() }),
    };
    let length = geometry::path_length(points);
    if !(length > f32::EPSILON) {
        return Err(NormalizeError::ZeroLength);
    }

    let interval = length / (n - 1) as f32;
    let mut resampled = Vec::with_capacity(n);
    resampled.push(first);

    let mut accumulated = 0.0_f32;
    let mut waypoint = first;
    let mut index = 1;
    while index < points.len() && resampled.len() < n {
        let next = points[index];
        let segment = waypoint.distance(next);
        if segment > 0.0 && accumulated + segment >= interval {
            let t = (interval - accumulated) / segment;
            let q = waypoint.lerp(next, t);
            resampled.push(q);
            waypoint = q;
            accumulated = 0.0;
        } else {
            accumulated += segment;
            waypoint = next;
            index += 1;
        }
    }

    // Rounding can leave the walk one point short of the end.
    resampled.resize(n, last);
    Ok(resampled)
}

/// Rescales points into `[0,1]²` using their bounding box.
///
/// A zero span on either axis is replaced by [`DEGENERATE_SPAN`].
pub fn scale_to_unit_box(points: &mut [Point]) {
    let Some(bounds) = BoundingBox::of(points) else {
        return;
    };
    let width = non_degenerate(bounds.width());
    let height = non_degenerate(bounds.height());
    for p in points.iter_mut() {
        p.x = (p.x - bounds.min.x) / width;
        p.y = (p.y - bounds.min.y) / height;
    }
}

/// Shifts points so their centroid becomes the origin.
pub fn translate_to_origin(points: &mut [Point]) {
    let Some(center) = geometry::centroid(points) else {
        return;
    };
    for p in points.iter_mut() {
        *p = *p - center;
    }
}

fn non_degenerate(span: f32) -> f32 {
    if span == 0.0 { DEGENERATE_SPAN } else { span }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 30.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 30.0),
            Point::new(40.0, 0.0),
            Point::new(55.0, 12.0),
        ]
    }

    fn square_path(subdivisions: usize) -> Vec<Point> {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
            Point::new(0.0, 0.0),
        ];
        let mut points = vec![corners[0]];
        for pair in corners.windows(2) {
            for step in 1..=subdivisions {
                points.push(pair[0].lerp(pair[1], step as f32 / subdivisions as f32));
            }
        }
        points
    }

    fn assert_close(a: &[Point], b: &[Point], tolerance: f32) {
        assert_eq!(a.len(), b.len());
        for (i, (p, q)) in a.iter().zip(b).enumerate() {
            assert!(
                p.distance(*q) <= tolerance,
                "point {i} differs: {p:?} vs {q:?}"
            );
        }
    }

    #[test]
    fn resample_always_yields_exact_count() {
        let inputs = [
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            zigzag(),
            square_path(1),
            square_path(25),
        ];
        for input in &inputs {
            for n in [2, 3, 7, 16, 64, 65, 200] {
                let out = resample(input, n).unwrap();
                assert_eq!(out.len(), n, "input of {} points, n = {n}", input.len());
            }
        }
    }

    #[test]
    fn resample_spaces_points_evenly() {
        let out = resample(&[Point::new(0.0, 0.0), Point::new(9.0, 0.0)], 4).unwrap();
        let xs: Vec<f32> = out.iter().map(|p| p.x).collect();
        assert_close(
            &out,
            &[
                Point::new(0.0, 0.0),
                Point::new(3.0, 0.0),
                Point::new(6.0, 0.0),
                Point::new(9.0, 0.0),
            ],
            1e-4,
        );
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn resample_leaves_input_untouched() {
        let input = zigzag();
        let copy = input.clone();
        let _ = resample(&input, 64).unwrap();
        assert_eq!(input, copy);
    }

    #[test]
    fn resample_rejects_degenerate_input() {
        assert_eq!(
            resample(&[Point::new(1.0, 1.0)], 64),
            Err(NormalizeError::TooFewPoints { len: 1 })
        );
        assert_eq!(
            resample(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)], 64),
            Err(NormalizeError::ZeroLength)
        );
        assert_eq!(
            resample(&zigzag(), 1),
            Err(NormalizeError::ResampleCountTooSmall { count: 1 })
        );
    }

    #[test]
    fn scale_fits_unit_box_and_touches_edges() {
        let mut points = resample(&zigzag(), 64).unwrap();
        scale_to_unit_box(&mut points);
        assert!(points
            .iter()
            .all(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)));
        let bounds = BoundingBox::of(&points).unwrap();
        assert!(bounds.min.x.abs() < 1e-6 && bounds.min.y.abs() < 1e-6);
        assert!((bounds.max.x - 1.0).abs() < 1e-6 && (bounds.max.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scale_substitutes_span_for_flat_axis() {
        let mut points = vec![
            Point::new(10.0, 5.0),
            Point::new(20.0, 5.0),
            Point::new(30.0, 5.0),
        ];
        scale_to_unit_box(&mut points);
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.5, 0.0),
                Point::new(1.0, 0.0)
            ]
        );
    }

    #[test]
    fn translate_centers_on_origin() {
        let mut points = resample(&zigzag(), 64).unwrap();
        scale_to_unit_box(&mut points);
        translate_to_origin(&mut points);
        let center = geometry::centroid(&points).unwrap();
        assert!(center.x.abs() < 1e-5, "mean x = {}", center.x);
        assert!(center.y.abs() < 1e-5, "mean y = {}", center.y);
    }

    #[test]
    fn normalize_is_scale_invariant() {
        let normalizer = Normalizer::new(64);
        let base = Stroke::from_points(zigzag());
        let doubled: Stroke = zigzag().into_iter().map(|p| p * 2.0).collect();
        let a = normalizer.normalize(&base).unwrap();
        let b = normalizer.normalize(&doubled).unwrap();
        assert_close(a.points(), b.points(), TOLERANCE);
    }

    #[test]
    fn normalize_is_translation_invariant() {
        let normalizer = Normalizer::new(64);
        let base = Stroke::from_points(zigzag());
        let shifted: Stroke = zigzag()
            .into_iter()
            .map(|p| p + Point::new(340.0, -125.0))
            .collect();
        let a = normalizer.normalize(&base).unwrap();
        let b = normalizer.normalize(&shifted).unwrap();
        assert_close(a.points(), b.points(), TOLERANCE);
    }

    #[test]
    fn normalize_is_sampling_rate_invariant() {
        let normalizer = Normalizer::new(64);
        let sparse = normalizer.normalize(&Stroke::from_points(square_path(1))).unwrap();
        let dense = normalizer.normalize(&Stroke::from_points(square_path(8))).unwrap();
        assert_close(sparse.points(), dense.points(), TOLERANCE);
    }
}
