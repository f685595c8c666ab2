//! # Chatcorr
//!
//! `chatcorr` computes [**Chatterjee's rank correlation coefficient**](https://arxiv.org/pdf/1909.10140.pdf)
//! ξ(X, Y) for a sequence of paired observations. Unlike Pearson or Spearman correlation,
//! ξ detects whether Y is a *function* of X, monotone or not: it tends to 1 when Y is a
//! noiseless function of X and to 0 when X and Y are independent.
//!
//! ## Key Features
//!
//! - **O(N log N)**: one sort by Y, one stable sort by X and two linear scans.
//! - **Exact tie handling**: runs of equal Y share their rank counts, runs of equal X are
//!   broken by a uniform shuffle instead of the order a stable sort happens to leave behind.
//! - **Reproducible**: every entry point has a form taking a caller-owned [`rand::Rng`];
//!   the same seed and the same input order give bit-identical results.
//! - **Any ordering**: built-in order for primitive types and strings, one shared comparator,
//!   or independent comparators for X and Y of different types.
//! - **Total over its input**: comparators that break strict weak ordering produce a
//!   meaningless estimate, never a panic.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! The free functions sort the caller's slice by Y **in place** and return ξ.
//!
//! ```rust
//! use chatcorr::{Point, xi_f64};
//!
//! let mut data: Vec<Point<f64, f64>> = (0..20).map(|i| Point::new(i as f64, i as f64)).collect();
//! let xi = xi_f64(&mut data);
//!
//! // A noiseless line of n distinct points scores 1 - 3 / (n + 1).
//! assert!((xi - (1.0 - 3.0 / 21.0)).abs() < 1e-12);
//! ```
//!
//! ### Reproducible Tie-Breaking
//!
//! ```rust
//! use chatcorr::{Point, xi_rand};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let data: Vec<Point<u32, u32>> = (0..100).map(|i| Point::new(i / 4, i)).collect();
//!
//! let a = xi_rand(&mut data.clone(), &mut StdRng::seed_from_u64(7));
//! let b = xi_rand(&mut data.clone(), &mut StdRng::seed_from_u64(7));
//! assert_eq!(a, b);
//! ```
//!
//! ### Custom Orderings
//!
//! [`Chatterjee`] holds one ordering per axis. Its borrowing methods leave the input untouched.
//!
//! ```rust
//! use chatcorr::{Chatterjee, Point};
//!
//! let data = vec![
//!     Point::new("ant", 1),
//!     Point::new("bat", 2),
//!     Point::new("cat", 3),
//!     Point::new("dog", 4),
//! ];
//!
//! let xi = Chatterjee::new()
//!     .x_order(|a: &&str, b: &&str| a.len().cmp(&b.len()).then(a.cmp(b)))
//!     .xi(&data);
//! assert_eq!(xi, 0.4);
//! ```
//!
//! ## Degenerate Inputs
//!
//! With fewer than two observations the statistic is undefined and the result is `NaN`.
//! This is returned, not raised, so it propagates naturally through aggregates of many trials.

pub mod algo;
pub mod core;
pub mod error;
pub mod perm;
pub mod rank;
pub mod seed;
pub mod sort;

pub use algo::{
    Chatterjee, xi, xi_by, xi_by_rand, xi_f64, xi_f64_rand, xi_mixed, xi_mixed_rand, xi_rand,
};
pub use core::{Comparator, NaturalOrder, Observation, Ordered, Point};
pub use error::{ChatterjeeError, Result};

pub mod prelude {
    pub use crate::algo::{
        Chatterjee, xi, xi_by, xi_by_rand, xi_f64, xi_f64_rand, xi_mixed, xi_mixed_rand, xi_rand,
    };
    pub use crate::core::{Comparator, NaturalOrder, Observation, Ordered, Point};
    pub use crate::seed::{ClockSeed, FixedSeed, SeedSource};
}
