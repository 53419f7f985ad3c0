//! Radial (polar angle) ordering of points around a center.

use core::cmp;

use crate::{
    point::{Coord, Point},
    predicates::{orientation, Orientation},
};

/// How points at the same angle around the center are ordered.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum TieBreak {
    /// Ascending distance from the center.
    #[default]
    ClosestFirst,
    /// Descending distance from the center.
    FarthestFirst,
}

/// How the angles of two points around the center are compared.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum AngleOrdering {
    /// Compare `atan2` angles in `(-π, π]`.
    #[default]
    Atan2,
    /// Same order as [`AngleOrdering::Atan2`] but derived from orientation signs only, so it is
    /// exact for every supported coordinate.
    CrossProduct,
}

/// Angle of `p` around `center` in `(-π, π]`, or `None` if `p == center`.
pub fn radial_angle<T: Coord>(p: &Point<T>, center: &Point<T>) -> Option<f64> {
    if p == center {
        return None;
    }

    let (dx, dy) = p.delta(center);
    Some(T::wide_to_f64(dy).atan2(T::wide_to_f64(dx)))
}

/// The lowest point, the rightmost one among several lowest.
///
/// Returns `None` for an empty slice.
pub fn find_pivot<T: Coord>(points: &[Point<T>]) -> Option<Point<T>> {
    let (first, rest) = points.split_first()?;

    let mut pivot = *first;
    for p in rest {
        if p.y < pivot.y || (p.y == pivot.y && p.x > pivot.x) {
            pivot = *p;
        }
    }

    Some(pivot)
}

/// Ranks a non-center point's direction into the four pieces `atan2` orders as
/// `(-π, 0)`, `0`, `(0, π)`, `π`.
fn half_plane<W: Ord + Default>(dx: W, dy: W) -> u8 {
    let zero = W::default();
    match (dy.cmp(&zero), dx > zero) {
        (cmp::Ordering::Less, _) => 0,
        (cmp::Ordering::Equal, true) => 1,
        (cmp::Ordering::Greater, _) => 2,
        (cmp::Ordering::Equal, false) => 3,
    }
}

/// A total order of points by angle around a fixed center.
///
/// Points equal to the center come first. Others are ordered by ascending angle, and points on
/// the same ray by distance according to the [`TieBreak`].
#[derive(Copy, Clone, Debug)]
pub struct RadialOrder<T> {
    center: Point<T>,
    tie_break: TieBreak,
    angle_ordering: AngleOrdering,
}

impl<T: Coord> RadialOrder<T> {
    pub const fn new(center: Point<T>) -> Self {
        Self {
            center,
            tie_break: TieBreak::ClosestFirst,
            angle_ordering: AngleOrdering::Atan2,
        }
    }

    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub const fn with_angle_ordering(mut self, angle_ordering: AngleOrdering) -> Self {
        self.angle_ordering = angle_ordering;
        self
    }

    pub const fn center(&self) -> &Point<T> {
        &self.center
    }

    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Compare two points, `Less` meaning `a` sorts before `b`.
    pub fn compare(&self, a: &Point<T>, b: &Point<T>) -> cmp::Ordering {
        match (*a == self.center, *b == self.center) {
            (true, true) => return cmp::Ordering::Equal,
            (true, false) => return cmp::Ordering::Less,
            (false, true) => return cmp::Ordering::Greater,
            (false, false) => (),
        }

        match self.compare_angles(a, b) {
            cmp::Ordering::Equal => self.compare_distances(a, b),
            ord => ord,
        }
    }

    /// Whether `a` and `b` lie on the same ray leaving the center.
    ///
    /// Always `false` if either point is the center.
    pub fn same_direction(&self, a: &Point<T>, b: &Point<T>) -> bool {
        *a != self.center
            && *b != self.center
            && self.compare_angles(a, b) == cmp::Ordering::Equal
    }

    // both points must differ from the center
    fn compare_angles(&self, a: &Point<T>, b: &Point<T>) -> cmp::Ordering {
        match self.angle_ordering {
            AngleOrdering::Atan2 => {
                let (dax, day) = a.delta(&self.center);
                let (dbx, dby) = b.delta(&self.center);
                let angle_a = T::wide_to_f64(day).atan2(T::wide_to_f64(dax));
                let angle_b = T::wide_to_f64(dby).atan2(T::wide_to_f64(dbx));

                angle_a.total_cmp(&angle_b)
            }
            AngleOrdering::CrossProduct => {
                let (dax, day) = a.delta(&self.center);
                let (dbx, dby) = b.delta(&self.center);

                half_plane(dax, day)
                    .cmp(&half_plane(dbx, dby))
                    .then_with(|| match orientation(&self.center, a, b) {
                        // b is counter-clockwise of a
                        Orientation::Left => cmp::Ordering::Less,
                        Orientation::Collinear => cmp::Ordering::Equal,
                        Orientation::Right => cmp::Ordering::Greater,
                    })
            }
        }
    }

    fn compare_distances(&self, a: &Point<T>, b: &Point<T>) -> cmp::Ordering {
        let dist_a = a.dist_sq(&self.center);
        let dist_b = b.dist_sq(&self.center);

        match self.tie_break {
            TieBreak::ClosestFirst => dist_a.cmp(&dist_b),
            TieBreak::FarthestFirst => dist_b.cmp(&dist_a),
        }
    }
}

/// Sorts points radially around `center`, using [`TieBreak::ClosestFirst`] and `atan2` angles.
///
/// Returns a new vector containing every input point exactly once, the input is left untouched.
///
/// ```
/// use graham_hull::{radial_sort, Point};
///
/// let center = Point::new(0, 0);
/// let points = [Point::new(0, 3), Point::new(2, 0), center, Point::new(-1, -1)];
///
/// assert_eq!(
///     radial_sort(&points, &center),
///     vec![center, Point::new(-1, -1), Point::new(2, 0), Point::new(0, 3)]
/// );
/// ```
pub fn radial_sort<T: Coord>(points: &[Point<T>], center: &Point<T>) -> Vec<Point<T>> {
    radial_sort_by(points, &RadialOrder::new(*center))
}

/// Sorts points with an explicitly configured [`RadialOrder`].
pub fn radial_sort_by<T: Coord>(points: &[Point<T>], order: &RadialOrder<T>) -> Vec<Point<T>> {
    let mut sorted_points = points.to_vec();
    sorted_points.sort_by(|a, b| order.compare(a, b));

    sorted_points
}
