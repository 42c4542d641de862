use super::super::coordinate::*;

///
/// The uniform Catmull-Rom weighted basis function
///
/// Given four consecutive control points, returns the point at `t` (from 0 to 1) along
/// the spline segment running from `w2` to `w3`. The outer weights `w1` and `w4` only
/// pick the tangent directions at the ends of the segment, which is what makes the
/// spline pass through every control point it is given.
///
#[inline]
pub fn catmull_rom_basis<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t_squared   = t*t;
    let t_cubed     = t_squared*t;

    let linear      = (w3-w1)*t;
    let quadratic   = (w1*2.0 - w2*5.0 + w3*4.0 - w4)*t_squared;
    let cubic       = (w2*3.0 - w1 - w3*3.0 + w4)*t_cubed;

    (w2*2.0 + linear + quadratic + cubic)*0.5
}
