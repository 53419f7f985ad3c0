//! # graham_hull
//!
//! 2D convex hulls of integer point sets via Graham's scan.
//!
//! The points are ordered radially around the pivot, the lowest (then rightmost) point, and
//! walked once while popping every vertex that is not a strict left turn. Orientation tests are
//! exact for every supported coordinate type, see [`Coord`].
//!
//! ```
//! use graham_hull::{convex_hull, Point};
//!
//! let points = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)];
//!
//! assert_eq!(
//!     convex_hull(&points).unwrap(),
//!     vec![Point::new(1, 0), Point::new(1, 1), Point::new(0, 1), Point::new(0, 0)]
//! );
//! ```
#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::all, clippy::missing_const_for_fn)]

pub use error::HullError;
pub use graham_scan::{convex_hull, GrahamScan, HullConfig};
#[cfg(feature = "logging")]
pub use observer::LogObserver;
pub use observer::{HullObserver, NoopObserver};
pub use point::{points_from_coords, Coord, Point};
pub use radial::{
    find_pivot, radial_angle, radial_sort, radial_sort_by, AngleOrdering, RadialOrder, TieBreak,
};
pub use utils::convexity::{is_convex_polygon, polygon_contains};

mod error;
pub mod graham_scan;
pub mod observer;
pub mod point;
pub mod predicates;
pub mod radial;
mod utils;
