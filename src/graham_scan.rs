use core::fmt;

use crate::{
    error::HullError,
    observer::{HullObserver, NoopObserver},
    point::{Coord, Point},
    predicates::left_strictly,
    radial::{find_pivot, radial_sort_by, AngleOrdering, RadialOrder, TieBreak},
    utils::convexity::{is_convex_polygon, polygon_contains},
};
use anyhow::Result as HowResult;
use rayon::prelude::*;

/// Parameters of the radial order the scan walks along.
///
/// The default is closest-first tie breaking on `atan2` angles.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct HullConfig {
    pub tie_break: TieBreak,
    pub angle_ordering: AngleOrdering,
}

impl HullConfig {
    /// Exact cross product ordering, closest-first.
    pub const fn exact() -> Self {
        Self {
            tie_break: TieBreak::ClosestFirst,
            angle_ordering: AngleOrdering::CrossProduct,
        }
    }

    fn radial_order<T: Coord>(&self, pivot: Point<T>) -> RadialOrder<T> {
        RadialOrder::new(pivot)
            .with_tie_break(self.tie_break)
            .with_angle_ordering(self.angle_ordering)
    }
}

/// A 2D convex hull computed with Graham's scan.
///
/// The hull starts at the pivot, the lowest (then rightmost) input point, and runs
/// counter-clockwise. Collinear boundary points are not part of it.
///
/// ```
/// use graham_hull::{GrahamScan, HullConfig, Point};
///
/// let points = vec![
///     Point::new(0, 0),
///     Point::new(0, 1),
///     Point::new(1, 1),
///     Point::new(1, 0),
/// ];
///
/// let mut graham_scan = GrahamScan::new(HullConfig::default());
/// graham_scan.compute(&points).unwrap();
///
/// assert_eq!(
///     graham_scan.hull(),
///     &[Point::new(1, 0), Point::new(1, 1), Point::new(0, 1), Point::new(0, 0)]
/// );
/// assert!(graham_scan.is_convex());
/// ```
#[derive(Clone, Debug)]
pub struct GrahamScan<T = i32> {
    config: HullConfig,
    hull: Vec<Point<T>>,
    pivot: Option<Point<T>>,
    num_input_points: usize,

    #[cfg(feature = "timing")]
    time_sorting: u128,
    #[cfg(feature = "timing")]
    time_scanning: u128,
}

impl<T: Coord> Default for GrahamScan<T> {
    fn default() -> Self {
        Self::new(HullConfig::default())
    }
}

/// Create a [`GrahamScan`] from points, with an optional [`HullConfig`].
///
/// An empty input yields an empty hull, use [`GrahamScan::compute`] to get the error instead.
///
/// ## Example
/// ```
/// # use graham_hull::{graham_scan, HullConfig, Point};
/// let points = [Point::new(0, 0), Point::new(3, 1), Point::new(1, 2)];
///
/// assert_eq!(graham_scan!(&points).hull().len(), 3);
/// // with config
/// assert_eq!(graham_scan!(&points, config = HullConfig::exact()).hull().len(), 3);
/// ```
#[macro_export]
macro_rules! graham_scan {
    ($points:expr) => {{
        let mut graham_scan =
            $crate::GrahamScan::with_capacity($crate::HullConfig::default(), $points.len());
        let _ = graham_scan.compute($points);
        graham_scan
    }};
    ($points:expr, config = $config:expr) => {{
        let mut graham_scan = $crate::GrahamScan::with_capacity($config, $points.len());
        let _ = graham_scan.compute($points);
        graham_scan
    }};
}

impl<T: Coord> GrahamScan<T> {
    pub const fn new(config: HullConfig) -> Self {
        Self {
            config,
            hull: Vec::new(),
            pivot: None,
            num_input_points: 0,
            #[cfg(feature = "timing")]
            time_sorting: 0,
            #[cfg(feature = "timing")]
            time_scanning: 0,
        }
    }

    /// Create a new `GrahamScan` with a pre-allocated capacity for hull points
    pub fn with_capacity(config: HullConfig, capacity: usize) -> Self {
        Self {
            hull: Vec::with_capacity(capacity),
            ..Self::new(config)
        }
    }

    pub const fn config(&self) -> &HullConfig {
        &self.config
    }

    /// The hull of the last computation, empty if nothing was computed yet.
    pub fn hull(&self) -> &[Point<T>] {
        &self.hull
    }

    pub fn into_hull(self) -> Vec<Point<T>> {
        self.hull
    }

    /// The pivot of the last successful computation.
    pub const fn pivot(&self) -> Option<&Point<T>> {
        self.pivot.as_ref()
    }

    pub const fn num_input_points(&self) -> usize {
        self.num_input_points
    }

    /// Compute the convex hull of `points`, discarding any previous hull.
    ///
    /// ## Errors
    /// Returns [`HullError::EmptyInput`] if `points` is empty.
    pub fn compute(&mut self, points: &[Point<T>]) -> HowResult<()> {
        self.compute_with_observer(points, &mut NoopObserver)
    }

    /// Like [`GrahamScan::compute`], notifying `observer` at the start and the end.
    ///
    /// On error `on_end` is not called.
    pub fn compute_with_observer<O: HullObserver>(
        &mut self,
        points: &[Point<T>],
        observer: &mut O,
    ) -> HowResult<()> {
        observer.on_start(points.len());

        self.hull.clear();
        self.pivot = None;
        self.num_input_points = points.len();

        let pivot = find_pivot(points).ok_or(HullError::EmptyInput)?;
        self.pivot = Some(pivot);

        #[cfg(any(feature = "timing", feature = "logging"))]
        let now = std::time::Instant::now();

        let order = self.config.radial_order(pivot);
        let mut sorted_points = radial_sort_by(points, &order);
        if self.config.tie_break == TieBreak::FarthestFirst {
            closest_first_on_extreme_rays(&mut sorted_points, &order);
        }

        #[cfg(feature = "timing")]
        {
            self.time_sorting = now.elapsed().as_micros();
        }
        #[cfg(feature = "logging")]
        log::trace!("Radial sort computed in {} μs", now.elapsed().as_micros());

        #[cfg(any(feature = "timing", feature = "logging"))]
        let now = std::time::Instant::now();

        self.scan(&sorted_points);

        #[cfg(feature = "timing")]
        {
            self.time_scanning = now.elapsed().as_micros();
        }
        #[cfg(feature = "logging")]
        log::trace!("Scan computed in {} μs", now.elapsed().as_micros());

        observer.on_end(self.hull.len());

        Ok(())
    }

    /// Walks the radially sorted points, keeping only strict left turns on the stack.
    fn scan(&mut self, sorted_points: &[Point<T>]) {
        // the pivot and its successor are extreme by construction
        let (first_two, rest) = sorted_points.split_at(sorted_points.len().min(2));
        self.hull.extend_from_slice(first_two);

        for next in rest {
            while self.hull.len() >= 2 {
                let top = self.hull[self.hull.len() - 1];
                let second = self.hull[self.hull.len() - 2];

                if left_strictly(&second, &top, next) {
                    break;
                }
                self.hull.pop();
            }

            self.hull.push(*next);
        }
    }

    /// Check if every consecutive triple of the closed hull is a strict left turn.
    pub fn is_convex(&self) -> bool {
        is_convex_polygon(&self.hull)
    }

    /// Check if `p` is inside the hull or on its boundary.
    pub fn contains(&self, p: &Point<T>) -> bool {
        polygon_contains(&self.hull, p)
    }

    pub fn contains_all(&self, points: &[Point<T>]) -> bool {
        points.iter().all(|p| self.contains(p))
    }

    /// Same as [`GrahamScan::contains_all`] with the points checked in parallel.
    pub fn par_contains_all(&self, points: &[Point<T>]) -> bool {
        points.par_iter().all(|p| self.contains(p))
    }

    /// Time spent in the radial sort of the last computation, in μs.
    #[cfg(feature = "timing")]
    pub const fn time_sorting(&self) -> u128 {
        self.time_sorting
    }

    /// Time spent in the scan of the last computation, in μs.
    #[cfg(feature = "timing")]
    pub const fn time_scanning(&self) -> u128 {
        self.time_scanning
    }
}

/// Reverses the first and the last ray of a farthest-first order.
///
/// Walking the first or last ray from the far end would keep a collinear point that is not a
/// hull vertex, closest-first on those two rays lets the scan pop it.
fn closest_first_on_extreme_rays<T: Coord>(
    sorted_points: &mut [Point<T>],
    order: &RadialOrder<T>,
) {
    let num_centers = sorted_points
        .iter()
        .take_while(|p| *p == order.center())
        .count();
    let rest = &mut sorted_points[num_centers..];

    let Some(&first) = rest.first() else {
        return;
    };
    let leading = rest
        .iter()
        .take_while(|p| order.same_direction(&first, p))
        .count();
    rest[..leading].reverse();

    // everything on one ray
    if leading == rest.len() {
        return;
    }

    let last = rest[rest.len() - 1];
    let trailing = rest
        .iter()
        .rev()
        .take_while(|p| order.same_direction(&last, p))
        .count();
    let n = rest.len();
    rest[n - trailing..].reverse();
}

/// Compute the convex hull of `points` with the default [`HullConfig`].
///
/// ```
/// use graham_hull::{convex_hull, Point};
///
/// let points = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(1, 1)];
/// let hull = convex_hull(&points).unwrap();
///
/// assert_eq!(hull, vec![Point::new(2, 0), Point::new(1, 1), Point::new(0, 0)]);
/// ```
///
/// ## Errors
/// Returns [`HullError::EmptyInput`] if `points` is empty.
pub fn convex_hull<T: Coord>(points: &[Point<T>]) -> HowResult<Vec<Point<T>>> {
    let mut graham_scan = GrahamScan::with_capacity(HullConfig::default(), points.len());
    graham_scan.compute(points)?;

    Ok(graham_scan.into_hull())
}

impl<T: Coord> fmt::Display for GrahamScan<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Convex hull with {} vertices of {} points",
            self.hull.len(),
            self.num_input_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::points_from_coords;
    use hull_test_utils::{sample_points, sample_points_normal, sample_points_on_circle};

    const NUM_POINTS_LIST: [usize; 8] = [1, 2, 3, 5, 10, 50, 100, 1000];

    const CONFIGS: [HullConfig; 4] = [
        HullConfig {
            tie_break: TieBreak::ClosestFirst,
            angle_ordering: AngleOrdering::Atan2,
        },
        HullConfig {
            tie_break: TieBreak::ClosestFirst,
            angle_ordering: AngleOrdering::CrossProduct,
        },
        HullConfig {
            tie_break: TieBreak::FarthestFirst,
            angle_ordering: AngleOrdering::Atan2,
        },
        HullConfig {
            tie_break: TieBreak::FarthestFirst,
            angle_ordering: AngleOrdering::CrossProduct,
        },
    ];

    fn p(x: i32, y: i32) -> Point<i32> {
        Point::new(x, y)
    }

    fn sorted(mut points: Vec<Point<i32>>) -> Vec<Point<i32>> {
        points.sort_by_key(|p| (p.x, p.y));
        points
    }

    fn verify_hull(graham_scan: &GrahamScan<i32>, points: &[Point<i32>]) {
        let hull = graham_scan.hull();

        assert!(!hull.is_empty());
        assert!(hull.iter().all(|h| points.contains(h)), "hull is not a subset");
        assert_eq!(hull.first(), find_pivot(points).as_ref());
        assert!(graham_scan.is_convex(), "hull {hull:?} is not convex");
        assert!(graham_scan.contains_all(points));
    }

    #[test]
    fn test_empty_input() {
        let mut graham_scan = GrahamScan::<i32>::default();

        let err = graham_scan.compute(&[]).unwrap_err();

        assert_eq!(err.downcast_ref::<HullError>(), Some(&HullError::EmptyInput));
        assert!(graham_scan.hull().is_empty());
        assert!(convex_hull::<i32>(&[]).is_err());
        assert!(graham_scan!(&Vec::<Point<i32>>::new()).hull().is_empty());
    }

    #[test]
    fn test_minimum_input() {
        assert_eq!(convex_hull(&[p(3, 4)]).unwrap(), vec![p(3, 4)]);

        // pivot first, no turn check
        assert_eq!(convex_hull(&[p(0, 5), p(1, 2)]).unwrap(), vec![p(1, 2), p(0, 5)]);
        assert_eq!(convex_hull(&[p(0, 0), p(9, 0)]).unwrap(), vec![p(9, 0), p(0, 0)]);
        assert_eq!(convex_hull(&[p(2, 2), p(2, 2)]).unwrap(), vec![p(2, 2), p(2, 2)]);
    }

    #[test]
    fn test_square() {
        let points = [p(0, 0), p(0, 1), p(1, 1), p(1, 0)];

        for config in CONFIGS {
            let graham_scan = graham_scan!(&points, config = config);

            assert_eq!(graham_scan.pivot(), Some(&p(1, 0)));
            assert_eq!(graham_scan.hull(), &[p(1, 0), p(1, 1), p(0, 1), p(0, 0)]);
        }
    }

    #[test]
    fn test_collinear_point_removed() {
        let points = [p(0, 0), p(1, 0), p(2, 0), p(1, 1)];

        for config in CONFIGS {
            let graham_scan = graham_scan!(&points, config = config);

            assert_eq!(graham_scan.hull(), &[p(2, 0), p(1, 1), p(0, 0)]);
        }
    }

    #[test]
    fn test_collinear_runs_on_every_edge() {
        // 4x4 grid: only the corners are hull vertices
        let points: Vec<_> = (0..4).flat_map(|x| (0..4).map(move |y| p(x, y))).collect();

        for config in CONFIGS {
            let graham_scan = graham_scan!(&points, config = config);

            assert_eq!(graham_scan.hull(), &[p(3, 0), p(3, 3), p(0, 3), p(0, 0)]);
            verify_hull(&graham_scan, &points);
        }
    }

    #[test]
    fn test_all_points_collinear() {
        let points = [p(2, 2), p(0, 0), p(3, 3), p(1, 1), p(2, 2)];

        for config in CONFIGS {
            let graham_scan = graham_scan!(&points, config = config);

            assert_eq!(graham_scan.hull(), &[p(0, 0), p(3, 3)]);
            verify_hull(&graham_scan, &points);
        }
    }

    #[test]
    fn test_duplicates() {
        let points = [p(1, 0), p(0, 2), p(1, 0), p(-2, 1), p(0, 2), p(1, 0), p(0, 1)];

        for config in CONFIGS {
            let graham_scan = graham_scan!(&points, config = config);

            assert_eq!(graham_scan.hull(), &[p(1, 0), p(0, 2), p(-2, 1)]);
            verify_hull(&graham_scan, &points);
        }
    }

    #[test]
    fn test_all_points_identical() {
        let points = [p(5, -5); 6];

        let hull = convex_hull(&points).unwrap();

        assert!(!hull.is_empty() && hull.len() <= 2);
        assert!(hull.iter().all(|&h| h == p(5, -5)));
    }

    #[test]
    fn test_recompute_discards_previous_hull() {
        let mut graham_scan = GrahamScan::default();

        graham_scan.compute(&[p(0, 0), p(4, 0), p(0, 4), p(4, 4)]).unwrap();
        assert_eq!(graham_scan.hull().len(), 4);

        graham_scan.compute(&[p(7, 7)]).unwrap();
        assert_eq!(graham_scan.hull(), &[p(7, 7)]);
        assert_eq!(graham_scan.num_input_points(), 1);

        assert!(graham_scan.compute(&[]).is_err());
        assert!(graham_scan.hull().is_empty());
        assert_eq!(graham_scan.pivot(), None);
    }

    #[test]
    fn test_random_hulls() {
        for config in CONFIGS {
            for n in NUM_POINTS_LIST {
                let points = points_from_coords(&sample_points(n, None));

                let graham_scan = graham_scan!(&points, config = config);

                verify_hull(&graham_scan, &points);
            }
        }
    }

    #[test]
    fn test_random_hulls_normal() {
        for n in NUM_POINTS_LIST {
            let points = points_from_coords(&sample_points_normal(n, None));

            for config in CONFIGS {
                verify_hull(&graham_scan!(&points, config = config), &points);
            }
        }
    }

    #[test]
    fn test_random_hulls_with_many_duplicates() {
        for n in NUM_POINTS_LIST {
            // tiny range to force duplicates and collinear runs
            let points = points_from_coords(&sample_points(n, Some(-3..=3)));

            for config in CONFIGS {
                verify_hull(&graham_scan!(&points, config = config), &points);
            }
        }
    }

    #[test]
    fn test_convex_position_keeps_all_points() {
        let points = points_from_coords(&sample_points_on_circle(64, 1_000_000));
        let mut unique = sorted(points.clone());
        unique.dedup();

        let hull = convex_hull(&points).unwrap();

        assert_eq!(sorted(hull), unique);
    }

    #[test]
    fn test_idempotence() {
        for n in NUM_POINTS_LIST {
            let points = points_from_coords(&sample_points(n, None));

            let hull = convex_hull(&points).unwrap();
            let hull_of_hull = convex_hull(&hull).unwrap();

            assert_eq!(sorted(hull_of_hull), sorted(hull));
        }
    }

    #[test]
    fn test_configs_agree() {
        for n in NUM_POINTS_LIST {
            let points = points_from_coords(&sample_points(n, Some(-20..=20)));
            let reference = convex_hull(&points).unwrap();

            for config in CONFIGS {
                assert_eq!(graham_scan!(&points, config = config).into_hull(), reference);
            }
        }
    }

    #[test]
    fn test_parallel_containment() {
        let points = points_from_coords(&sample_points(5000, None));
        let graham_scan = graham_scan!(&points);

        assert!(graham_scan.par_contains_all(&points));
        assert!(!graham_scan.par_contains_all(&[p(1_000_000, 0)]));
    }

    #[test]
    fn test_extreme_coordinates() {
        let points = [
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MIN),
            Point::new(0, 0),
            Point::new(i32::MAX, i32::MAX),
            Point::new(i32::MIN, i32::MAX),
        ];

        let graham_scan = graham_scan!(&points, config = HullConfig::exact());

        assert_eq!(
            graham_scan.hull(),
            &[points[1], points[3], points[4], points[0]]
        );
    }

    #[test]
    fn test_other_coordinate_types() {
        let points: Vec<Point<i8>> = vec![
            Point::new(i8::MIN, 0),
            Point::new(0, i8::MIN),
            Point::new(i8::MAX, 0),
            Point::new(0, i8::MAX),
            Point::new(1, 1),
        ];
        let hull = convex_hull(&points).unwrap();
        assert_eq!(hull, vec![points[1], points[2], points[3], points[0]]);

        let big = 1_i64 << 60;
        let points: Vec<Point<i64>> = vec![
            Point::new(-big, -big),
            Point::new(big, -big),
            Point::new(big, big),
            Point::new(-big, big),
            Point::new(0, 0),
        ];
        let mut graham_scan = GrahamScan::new(HullConfig::exact());
        graham_scan.compute(&points).unwrap();
        assert_eq!(
            graham_scan.hull(),
            &[points[1], points[2], points[3], points[0]]
        );
    }

    #[derive(Default)]
    struct RecordingObserver {
        started: Option<usize>,
        ended: Option<usize>,
    }

    impl HullObserver for RecordingObserver {
        fn on_start(&mut self, num_points: usize) {
            self.started = Some(num_points);
        }

        fn on_end(&mut self, num_hull_points: usize) {
            self.ended = Some(num_hull_points);
        }
    }

    #[test]
    fn test_observer() {
        let mut graham_scan = GrahamScan::default();

        let mut observer = RecordingObserver::default();
        graham_scan
            .compute_with_observer(&[p(0, 0), p(2, 0), p(1, 1), p(1, 3)], &mut observer)
            .unwrap();
        assert_eq!(observer.started, Some(4));
        assert_eq!(observer.ended, Some(3));

        let mut observer = RecordingObserver::default();
        assert!(graham_scan.compute_with_observer(&[], &mut observer).is_err());
        assert_eq!(observer.started, Some(0));
        assert_eq!(observer.ended, None);
    }

    #[cfg(feature = "logging")]
    #[test]
    fn test_log_observer() {
        let _ = env_logger::builder().is_test(true).try_init();

        let points = points_from_coords(&sample_points(100, None));
        let mut graham_scan = GrahamScan::default();

        graham_scan
            .compute_with_observer(&points, &mut crate::observer::LogObserver)
            .unwrap();

        verify_hull(&graham_scan, &points);
    }

    #[test]
    fn test_display() {
        let graham_scan = graham_scan!(&[p(0, 0), p(2, 0), p(1, 1), p(1, 0)]);

        assert_eq!(
            format!("{graham_scan}"),
            "Convex hull with 3 vertices of 4 points"
        );
    }
}
