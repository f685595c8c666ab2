#![allow(dead_code)]

use chatcorr::Point;
use rand::Rng;
use std::cmp::Ordering;

pub type FP = Point<f64, f64>;

/// Points `(dx * i, i)` for `i` in `0..n`.
pub fn line(n: usize, dx: f64) -> Vec<FP> {
    (0..n).map(|i| Point::new(dx * i as f64, i as f64)).collect()
}

/// Moves every coordinate by a uniform offset in `(-radius, radius)`.
pub fn fuzz<R: Rng>(points: &mut [FP], radius: f64, rng: &mut R) {
    for p in points.iter_mut() {
        p.x += radius * (2.0 * rng.random::<f64>() - 1.0);
        p.y += radius * (2.0 * rng.random::<f64>() - 1.0);
    }
}

/// Adds `cycles` periods of a sine wave of amplitude `ampl` to Y.
pub fn sin(points: &mut [FP], cycles: f64, ampl: f64) {
    let len = points.len() as f64;
    for (i, p) in points.iter_mut().enumerate() {
        let theta = cycles * 2.0 * std::f64::consts::PI * (i as f64 / len);
        p.y += ampl * theta.sin();
    }
}

/// Collapses every block of four consecutive X values onto the first one.
pub fn step_x(points: &mut [FP]) {
    for block in points.chunks_exact_mut(4) {
        let x = block[0].x;
        block.iter_mut().for_each(|p| p.x = x);
    }
}

/// Collapses every block of four consecutive Y values onto the first one.
pub fn step_y(points: &mut [FP]) {
    for block in points.chunks_exact_mut(4) {
        let y = block[0].y;
        block.iter_mut().for_each(|p| p.y = y);
    }
}

pub fn fcmp(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub fn scmp(a: &String, b: &String) -> Ordering {
    a.cmp(b)
}

pub fn icmp(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

/// Value of xi for `n` distinct points on a strictly increasing curve.
pub fn perfect_xi(n: usize) -> f64 {
    1.0 - 3.0 / (n as f64 + 1.0)
}
