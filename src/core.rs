//! Core traits and types for Chatcorr.
//!
//! This module defines:
//! - [`Point`] and the [`Observation`] trait: how the estimator reads an (X, Y) pair.
//! - [`Comparator`], [`Ordered`] and [`NaturalOrder`]: the ordering capability supplied per axis.
//! - [`TieRuns`]: maximal runs of equal elements in an already sorted sequence.

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::{ChatterjeeError, Result};

/// A paired observation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<T, U> {
    pub x: T,
    pub y: U,
}

impl<T, U> Point<T, U> {
    pub const fn new(x: T, y: U) -> Self {
        Self { x, y }
    }

    /// Pairs two columns element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`ChatterjeeError::LengthMismatch`] when the columns differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatcorr::Point;
    ///
    /// let points = Point::zip_columns(vec![1, 2], vec!["a", "b"]).unwrap();
    /// assert_eq!(points[1], Point::new(2, "b"));
    ///
    /// assert!(Point::<i32, i32>::zip_columns(vec![1], vec![]).is_err());
    /// ```
    pub fn zip_columns<I, J>(xs: I, ys: J) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
        J: IntoIterator<Item = U>,
        J::IntoIter: ExactSizeIterator,
    {
        let xs = xs.into_iter();
        let ys = ys.into_iter();
        if xs.len() != ys.len() {
            return Err(ChatterjeeError::LengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        Ok(xs.zip(ys).map(|(x, y)| Self { x, y }).collect())
    }
}

impl<T, U> From<(T, U)> for Point<T, U> {
    fn from((x, y): (T, U)) -> Self {
        Self { x, y }
    }
}

/// Read access to the two coordinates of an observation.
///
/// Implemented for [`Point`], for `(T, U)` tuples and for references to any observation,
/// so the estimator can run over owned data or over a vector of borrowed views.
pub trait Observation {
    type X;
    type Y;

    fn x(&self) -> &Self::X;
    fn y(&self) -> &Self::Y;
}

impl<T, U> Observation for Point<T, U> {
    type X = T;
    type Y = U;

    #[inline(always)]
    fn x(&self) -> &T {
        &self.x
    }

    #[inline(always)]
    fn y(&self) -> &U {
        &self.y
    }
}

impl<T, U> Observation for (T, U) {
    type X = T;
    type Y = U;

    #[inline(always)]
    fn x(&self) -> &T {
        &self.0
    }

    #[inline(always)]
    fn y(&self) -> &U {
        &self.1
    }
}

impl<P: Observation + ?Sized> Observation for &P {
    type X = P::X;
    type Y = P::Y;

    #[inline(always)]
    fn x(&self) -> &P::X {
        (**self).x()
    }

    #[inline(always)]
    fn y(&self) -> &P::Y {
        (**self).y()
    }
}

/// A three-way comparison over one coordinate domain.
///
/// Implementations should be a strict weak ordering: tie runs are detected by comparing
/// against the first element of a run, so an inconsistent comparator produces wrong
/// tie groups and a meaningless estimate. The estimator still terminates without
/// panicking, since its sorts never assume consistency.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use chatcorr::Comparator;
/// use std::cmp::Ordering;
///
/// let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
/// assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
/// assert!(by_abs.equal(&-2, &2));
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    #[inline(always)]
    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Types whose built-in order is total.
///
/// Implemented for the integer types, `bool`, `char`, `str`, `String`, the floating-point
/// types and references to any of them. Floats are made total by sorting `NaN` after every
/// number and treating all `NaN`s as equal; `-0.0 == 0.0` still forms a tie.
///
/// Other `Ord` types go through a comparator, e.g. `xi_by(&mut data, Ord::cmp)`.
pub trait Ordered {
    fn order(&self, other: &Self) -> Ordering;
}

macro_rules! ordered_by_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                #[inline(always)]
                fn order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

ordered_by_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

macro_rules! ordered_float {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                #[inline(always)]
                fn order(&self, other: &Self) -> Ordering {
                    match self.partial_cmp(other) {
                        Some(ordering) => ordering,
                        None => self.is_nan().cmp(&other.is_nan()),
                    }
                }
            }
        )*
    };
}

ordered_float!(f32, f64);

impl<T: Ordered + ?Sized> Ordered for &T {
    #[inline(always)]
    fn order(&self, other: &Self) -> Ordering {
        (**self).order(*other)
    }
}

/// The built-in order of an [`Ordered`] type.
///
/// ```
/// use chatcorr::{Comparator, NaturalOrder};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&f64::NAN, &1.0), Ordering::Greater);
/// assert!(NaturalOrder.equal(&-0.0_f64, &0.0));
/// assert_eq!(NaturalOrder.compare("ant", "bat"), Ordering::Less);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ordered + ?Sized> Comparator<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.order(b)
    }
}

/// Iterator over the maximal tie runs of a sorted sequence of length `len`.
///
/// `same(first, i)` decides whether element `i` belongs to the run that starts at `first`.
/// Every element is compared against the first element of its run, never its neighbour.
///
/// ```
/// use chatcorr::core::TieRuns;
///
/// let v = [1, 1, 2, 3, 3, 3];
/// let runs: Vec<_> = TieRuns::new(v.len(), |a, b| v[a] == v[b]).collect();
/// assert_eq!(runs, vec![0..2, 2..3, 3..6]);
/// ```
pub struct TieRuns<F> {
    start: usize,
    len: usize,
    same: F,
}

impl<F> TieRuns<F>
where
    F: FnMut(usize, usize) -> bool,
{
    pub fn new(len: usize, same: F) -> Self {
        Self {
            start: 0,
            len,
            same,
        }
    }
}

impl<F> Iterator for TieRuns<F>
where
    F: FnMut(usize, usize) -> bool,
{
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.start >= self.len {
            return None;
        }

        let first = self.start;
        let mut end = first + 1;
        while end < self.len && (self.same)(first, end) {
            end += 1;
        }
        self.start = end;
        Some(first..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.start);
        (usize::from(remaining > 0), Some(remaining))
    }
}
