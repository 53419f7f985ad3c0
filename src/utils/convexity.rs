use crate::{
    point::{Coord, Point},
    predicates::{collinear, left_or_on, left_strictly},
};

/// Checks that every vertex of the closed polygon is a strict left turn.
///
/// Polygons with less than 3 vertices are trivially convex.
pub fn is_convex_polygon<T: Coord>(polygon: &[Point<T>]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return true;
    }

    (0..n).all(|i| left_strictly(&polygon[i], &polygon[(i + 1) % n], &polygon[(i + 2) % n]))
}

/// Checks if `p` is inside or on the boundary of a convex, counter-clockwise polygon.
///
/// Polygons with 1 or 2 vertices are treated as a point or a segment.
pub fn polygon_contains<T: Coord>(polygon: &[Point<T>], p: &Point<T>) -> bool {
    match polygon {
        [] => false,
        [a] => a == p,
        [a, b] => collinear(a, b, p) && on_segment_side(a, b, p),
        _ => {
            let n = polygon.len();
            (0..n).all(|i| left_or_on(&polygon[i], &polygon[(i + 1) % n], p))
        }
    }
}

// for collinear p: p lies between a and b iff (a - p) and (b - p) do not point the same way
fn on_segment_side<T: Coord>(a: &Point<T>, b: &Point<T>, p: &Point<T>) -> bool {
    let (pax, pay) = a.delta(p);
    let (pbx, pby) = b.delta(p);
    let dot_prod = pax * pbx + pay * pby;

    dot_prod <= T::Wide::default()
}
