//! The ξ estimator pipeline and its entry points.
//!
//! The pipeline is implemented once, in [`Chatterjee::xi_mut_with`]:
//! 1. Sort the observations by Y.
//! 2. Count, per position, how many observations have `Y <= y` (`r`) and `Y >= y` (`l`).
//! 3. Order the positions by X, shuffling each run of equal X.
//! 4. Aggregate: `1 - n * sum |r[perm[i+1]] - r[perm[i]]| / (2 * sum l[i] * (n - l[i]))`.
//!
//! The free functions only choose orderings and a generator, then forward to it.
//! Functions without a `_rand` suffix seed their generator from the clock.

use std::cmp::Ordering;

use rand::Rng;
use tracing::{debug, trace};

use crate::core::{Comparator, NaturalOrder, Observation, Ordered, Point};
use crate::perm::x_permutation;
use crate::rank::RankCounts;
use crate::seed::clock_rng;
use crate::sort::sort_by;

/// Chatterjee's ξ estimator configured with one ordering per axis.
///
/// # Examples
///
/// ```
/// use chatcorr::{Chatterjee, Point};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// // y = x^2 is not monotone, but it is a function of x.
/// let data: Vec<Point<i64, i64>> = (-50..50).map(|x| Point::new(x, x * x)).collect();
///
/// let xi = Chatterjee::new().xi_with(&data, &mut StdRng::seed_from_u64(3));
/// assert!(xi > 0.9);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Chatterjee<CX = NaturalOrder, CY = NaturalOrder> {
    cmp_x: CX,
    cmp_y: CY,
}

impl Chatterjee {
    /// Estimator using the built-in order of both coordinates.
    pub const fn new() -> Self {
        Self {
            cmp_x: NaturalOrder,
            cmp_y: NaturalOrder,
        }
    }
}

impl<CX, CY> Chatterjee<CX, CY> {
    /// Estimator using `cmp_x` for X and `cmp_y` for Y.
    pub const fn with_orders(cmp_x: CX, cmp_y: CY) -> Self {
        Self { cmp_x, cmp_y }
    }

    /// Replaces the X ordering.
    pub fn x_order<C>(self, cmp_x: C) -> Chatterjee<C, CY> {
        Chatterjee {
            cmp_x,
            cmp_y: self.cmp_y,
        }
    }

    /// Replaces the Y ordering.
    pub fn y_order<C>(self, cmp_y: C) -> Chatterjee<CX, C> {
        Chatterjee {
            cmp_x: self.cmp_x,
            cmp_y,
        }
    }

    /// Computes ξ, sorting `data` by Y in place and breaking X ties with `rng`.
    ///
    /// Returns `NaN` when `data` holds fewer than two observations. Comparators that are
    /// not strict weak orderings give a meaningless value but never panic.
    pub fn xi_mut_with<P, R>(&self, data: &mut [P], rng: &mut R) -> f64
    where
        P: Observation,
        CX: Comparator<P::X>,
        CY: Comparator<P::Y>,
        R: Rng + ?Sized,
    {
        let n = data.len();
        // Stable: the working order depends on the input order only, not on the element type.
        sort_by(data, |a, b| self.cmp_y.compare(a.y(), b.y()));

        let ranks = RankCounts::from_sorted(data, &self.cmp_y);
        let (perm, shuffled_runs) = x_permutation(data, &self.cmp_x, rng);
        let estimate = aggregate(&perm, &ranks);

        if n < 2 {
            debug!(n, "fewer than two observations, xi is undefined");
        }
        trace!(
            n,
            y_runs = ranks.runs,
            shuffled_x_runs = shuffled_runs,
            xi = estimate,
            "computed chatterjee xi"
        );
        estimate
    }

    /// [`Self::xi_mut_with`] with a clock-seeded generator.
    pub fn xi_mut<P>(&self, data: &mut [P]) -> f64
    where
        P: Observation,
        CX: Comparator<P::X>,
        CY: Comparator<P::Y>,
    {
        self.xi_mut_with(data, &mut clock_rng())
    }

    /// Computes ξ without reordering `data`.
    ///
    /// Sorts a vector of references instead of the observations themselves. For the same
    /// input order and generator state the result equals [`Self::xi_mut_with`], ties included.
    pub fn xi_with<P, R>(&self, data: &[P], rng: &mut R) -> f64
    where
        P: Observation,
        CX: Comparator<P::X>,
        CY: Comparator<P::Y>,
        R: Rng + ?Sized,
    {
        let mut working: Vec<&P> = data.iter().collect();
        self.xi_mut_with(&mut working, rng)
    }

    /// [`Self::xi_with`] with a clock-seeded generator.
    pub fn xi<P>(&self, data: &[P]) -> f64
    where
        P: Observation,
        CX: Comparator<P::X>,
        CY: Comparator<P::Y>,
    {
        self.xi_with(data, &mut clock_rng())
    }
}

/// Applies the closed-form ξ formula.
///
/// `ranks` is indexed by working-sequence position, so it is read through `perm`
/// for the numerator. With fewer than two elements the denominator is zero and the
/// result is `NaN`.
///
/// ```
/// use chatcorr::algo::aggregate;
/// use chatcorr::rank::RankCounts;
///
/// let ranks = RankCounts { r: vec![1, 2, 3, 4], l: vec![4, 3, 2, 1], runs: 4 };
/// assert_eq!(aggregate(&[0, 1, 2, 3], &ranks), 0.4);
/// assert!(aggregate(&[], &RankCounts::default()).is_nan());
/// ```
pub fn aggregate(perm: &[usize], ranks: &RankCounts) -> f64 {
    let n = perm.len() as f64;

    let variation: f64 = perm
        .windows(2)
        .map(|pair| (ranks.r[pair[1]] as f64 - ranks.r[pair[0]] as f64).abs())
        .sum();
    let numerator = n * variation;

    let spread: f64 = ranks
        .l
        .iter()
        .map(|&l| {
            let l = l as f64;
            l * (n - l)
        })
        .sum();
    let denominator = 2.0 * spread;

    1.0 - numerator / denominator
}

/// Computes ξ for `f64` observations, sorting `data` by Y in place.
///
/// `NaN` coordinates sort after all numbers and tie with each other.
///
/// ```
/// use chatcorr::{Point, xi_f64};
///
/// let mut data = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
/// assert_eq!(xi_f64(&mut data), 0.25);
/// assert!(xi_f64(&mut data[..1]).is_nan());
/// ```
pub fn xi_f64(data: &mut [Point<f64, f64>]) -> f64 {
    xi_f64_rand(data, &mut clock_rng())
}

/// [`xi_f64`] with an explicit generator for repeatable tie-breaking.
pub fn xi_f64_rand<R: Rng + ?Sized>(data: &mut [Point<f64, f64>], rng: &mut R) -> f64 {
    Chatterjee::new().xi_mut_with(data, rng)
}

/// Computes ξ using the built-in order of both coordinates, sorting `data` by Y in place.
///
/// ```
/// use chatcorr::{Point, xi};
///
/// let mut data = vec![Point::new("ant", 1), Point::new("bat", 2), Point::new("cat", 3), Point::new("dog", 4)];
/// assert_eq!(xi(&mut data), 0.4);
/// ```
pub fn xi<T: Ordered, U: Ordered>(data: &mut [Point<T, U>]) -> f64 {
    xi_rand(data, &mut clock_rng())
}

/// [`xi`] with an explicit generator for repeatable tie-breaking.
pub fn xi_rand<T, U, R>(data: &mut [Point<T, U>], rng: &mut R) -> f64
where
    T: Ordered,
    U: Ordered,
    R: Rng + ?Sized,
{
    Chatterjee::new().xi_mut_with(data, rng)
}

/// Computes ξ with one comparator shared by both coordinates, sorting `data` by Y in place.
pub fn xi_by<T, F>(data: &mut [Point<T, T>], compare: F) -> f64
where
    F: Fn(&T, &T) -> Ordering,
{
    xi_by_rand(data, compare, &mut clock_rng())
}

/// [`xi_by`] with an explicit generator for repeatable tie-breaking.
pub fn xi_by_rand<T, F, R>(data: &mut [Point<T, T>], compare: F, rng: &mut R) -> f64
where
    F: Fn(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    Chatterjee::with_orders(&compare, &compare).xi_mut_with(data, rng)
}

/// Computes ξ with independent comparators for X and Y, sorting `data` by Y in place.
pub fn xi_mixed<T, U, FT, FU>(data: &mut [Point<T, U>], compare_x: FT, compare_y: FU) -> f64
where
    FT: Fn(&T, &T) -> Ordering,
    FU: Fn(&U, &U) -> Ordering,
{
    xi_mixed_rand(data, compare_x, compare_y, &mut clock_rng())
}

/// [`xi_mixed`] with an explicit generator for repeatable tie-breaking.
pub fn xi_mixed_rand<T, U, FT, FU, R>(
    data: &mut [Point<T, U>],
    compare_x: FT,
    compare_y: FU,
    rng: &mut R,
) -> f64
where
    FT: Fn(&T, &T) -> Ordering,
    FU: Fn(&U, &U) -> Ordering,
    R: Rng + ?Sized,
{
    Chatterjee::with_orders(compare_x, compare_y).xi_mut_with(data, rng)
}
