//! Orientation predicates.
//!
//! All predicates are evaluated exactly in the coordinate type's wide type (see [`Coord`]),
//! so for coordinates inside the supported range there is no rounding and no overflow.

use core::cmp;

use crate::point::{Coord, Point};

/// Position of a point relative to a directed line.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Orientation {
    /// Strictly left of the line, i.e. a counter-clockwise turn.
    Left,
    Collinear,
    /// Strictly right of the line, i.e. a clockwise turn.
    Right,
}

/// Twice the signed area of triangle `abc`.
///
/// Positive if `c` is left of the directed line `a -> b`, negative if it is right of it, and zero
/// if the three points are collinear.
#[inline]
pub fn signed_area<T: Coord>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T::Wide {
    let (abx, aby) = b.delta(a);
    let (acx, acy) = c.delta(a);

    abx * acy - aby * acx
}

/// Where `c` lies relative to the directed line `a -> b`.
#[inline]
pub fn orientation<T: Coord>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation {
    match signed_area(a, b, c).cmp(&T::Wide::default()) {
        cmp::Ordering::Greater => Orientation::Left,
        cmp::Ordering::Equal => Orientation::Collinear,
        cmp::Ordering::Less => Orientation::Right,
    }
}

#[inline]
pub fn collinear<T: Coord>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> bool {
    orientation(p, q, r) == Orientation::Collinear
}

/// `c` is strictly left of `a -> b`.
#[inline]
pub fn left_strictly<T: Coord>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> bool {
    orientation(a, b, c) == Orientation::Left
}

/// `c` is left of `a -> b` or on the line through `a` and `b`.
#[inline]
pub fn left_or_on<T: Coord>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> bool {
    orientation(a, b, c) != Orientation::Right
}
