#![no_main]

use graham_hull::{find_pivot, AngleOrdering, GrahamScan, HullConfig, Point};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<Point<i32>>, HullConfig)| {
    let (points, config) = data;

    let mut graham_scan = GrahamScan::new(config);
    if graham_scan.compute(&points).is_err() {
        assert!(points.is_empty());
        return;
    }

    let hull = graham_scan.hull();
    assert_eq!(hull.first(), find_pivot(&points).as_ref());
    assert!(hull.iter().all(|h| points.contains(h)));

    // atan2 may misorder nearly parallel directions, only the exact ordering guarantees a hull
    if config.angle_ordering == AngleOrdering::CrossProduct {
        assert!(graham_scan.is_convex());
        assert!(graham_scan.contains_all(&points));
    }
});
