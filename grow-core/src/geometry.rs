//! Planar predicates used by the growth step.
//!
//! Exactly colinear inputs are not special-cased: [`ccw`] reports `false`
//! for a zero cross product, so overlapping colinear segments can slip
//! through [`segments_intersect`] as non-intersecting. Touching segments
//! (a T-junction at an attachment point) are decided by round-off, so the
//! answer can change when the two segments are passed in the other order.

use crate::types::Point;

/// Returns `true` if `a`, `b`, `c` are arranged counterclockwise.
#[inline]
pub fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Returns `true` if segment `ab` crosses segment `cd`.
///
/// ### Parameters
/// - `a`, `b` - Endpoints of the first segment.
/// - `c`, `d` - Endpoints of the second segment.
#[inline]
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

/// Returns `true` if `p` lies inside or on the origin-centered disk.
#[inline]
pub fn inside_disk(p: Point, radius: f64) -> bool {
    p.length() <= radius
}
