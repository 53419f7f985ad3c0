//! utils for graham_hull tests
#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::all, clippy::missing_const_for_fn)]

use rand::{distr::Uniform, prelude::Distribution, Rng};
use rand_distr::Normal;
use std::{f64::consts::TAU, ops::RangeInclusive};

pub type Coords2 = [i32; 2];

/// Samples `n` integer points from the [Uniform] distribution.
///
/// If no range is specified, both coordinates are drawn from `[-1000, 1000]`.
pub fn sample_points(n: usize, range: Option<RangeInclusive<i32>>) -> Vec<Coords2> {
    let mut rng = rand::rng();
    let range = range.unwrap_or(-1000..=1000);
    let uniform = Uniform::try_from(range).expect("Expected range with a greater start then end");

    let mut points: Vec<Coords2> = Vec::with_capacity(n);
    for _ in 0..n {
        let x = uniform.sample(&mut rng);
        let y = uniform.sample(&mut rng);
        points.push([x, y]);
    }

    points
}

/// Samples `n` points evenly spaced on a circle of radius `radius` around the origin, rounded to
/// integer coordinates. The angle of the first point is random.
pub fn sample_points_on_circle(n: usize, radius: i32) -> Vec<Coords2> {
    let mut rng = rand::rng();
    let phase: f64 = rng.random_range(0.0..TAU);
    let r = radius as f64;

    (0..n)
        .map(|i| {
            let angle = phase + TAU * i as f64 / n as f64;
            [(r * angle.cos()).round() as i32, (r * angle.sin()).round() as i32]
        })
        .collect()
}

/// Samples `n` points from a [Normal] distribution around the origin, rounded to integers.
///
/// The default standard deviation is `σ = 100.0`.
pub fn sample_points_normal(n: usize, std_dev: Option<f64>) -> Vec<Coords2> {
    let mut rng = rand::rng();
    let normal = Normal::new(0.0, std_dev.unwrap_or(100.0)).unwrap();

    let mut points: Vec<Coords2> = Vec::with_capacity(n);
    for _ in 0..n {
        let x: f64 = normal.sample(&mut rng);
        let y: f64 = normal.sample(&mut rng);
        points.push([x.round() as i32, y.round() as i32]);
    }

    points
}
