use super::catmull_rom::*;
use super::super::coordinate::*;

use itertools::*;
use log::*;
use thiserror::Error;

///
/// Errors that can occur while smoothing a path
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum SmoothPathError {
    /// The granularity must call for at least one point per captured segment
    #[error("granularity must be at least 1 (was {0})")]
    InvalidGranularity(usize)
}

///
/// Smooths a path of captured pointer samples by interpolating along a uniform
/// Catmull-Rom spline
///
/// `granularity` is the number of points every captured segment contributes to the
/// result: each segment gains `granularity - 1` interpolated points ahead of its end
/// point. A path with fewer than `granularity + 2` points is returned as it was
/// captured, as it has too few samples to interpolate between.
///
/// The result is always a new sequence. The first and last captured points appear
/// unchanged at the ends, every captured point in between appears unchanged at its
/// segment boundary, and only new points are inserted between them, so a qualifying
/// path of `n` points smooths to `(n - 1) * granularity + 2` points.
///
pub fn smooth_path<Point: Coordinate>(points: &[Point], granularity: usize) -> Result<Vec<Point>, SmoothPathError> {
    if granularity < 1 {
        return Err(SmoothPathError::InvalidGranularity(granularity));
    }

    // Too short to interpolate: hand back the captured points unchanged
    if points.len() < granularity + 2 {
        trace!("Not smoothing a path of {} points at granularity {}", points.len(), granularity);
        return Ok(points.to_vec());
    }

    // Duplicate the two endpoints so every captured point has a tangent neighbour on both sides
    let num_points          = points.len();
    let mut control_points  = Vec::with_capacity(num_points + 2);

    control_points.push(points[0]);
    control_points.extend_from_slice(points);
    control_points.push(points[num_points-1]);

    let mut smoothed = Vec::with_capacity((num_points-1)*granularity + 2);
    smoothed.push(points[0]);

    // Each window of four control points generates the interpolated points leading up to the window's end point
    for (p0, p1, p2, p3) in control_points.iter().tuple_windows() {
        for step in 1..granularity {
            let t = (step as f64)/(granularity as f64);

            smoothed.push(catmull_rom_basis(t, *p0, *p1, *p2, *p3));
        }

        smoothed.push(*p2);
    }

    // The path finishes at the final captured position
    smoothed.push(points[num_points-1]);

    trace!("Smoothed {} points to {} at granularity {}", num_points, smoothed.len(), granularity);

    Ok(smoothed)
}
