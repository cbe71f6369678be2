//! Synthetic strokes standing in for mouse or touch input.
use std::f32::consts::TAU;

use gesture_core::Point;

pub fn circle(center: Point, radius: f32, segments: usize) -> Vec<Point> {
    (0..=segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            center + Point::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Circle with a deterministic radial wobble, like a hand-drawn loop.
pub fn wobbly_circle(center: Point, radius: f32, segments: usize) -> Vec<Point> {
    (0..=segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            let wobble = 1.0 + 0.06 * (angle * 5.0).sin();
            center + Point::new(angle.cos(), angle.sin()) * (radius * wobble)
        })
        .collect()
}

pub fn line(start: Point, end: Point, steps: usize) -> Vec<Point> {
    (0..=steps)
        .map(|i| start.lerp(end, i as f32 / steps as f32))
        .collect()
}

/// Closed zigzag through the given corners.
pub fn polyline(corners: &[Point], steps_per_edge: usize) -> Vec<Point> {
    let mut points = Vec::new();
    for pair in corners.windows(2) {
        let edge = line(pair[0], pair[1], steps_per_edge);
        let skip = usize::from(!points.is_empty());
        points.extend(edge.into_iter().skip(skip));
    }
    points
}
