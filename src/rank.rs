//! Tie-aware rank counting over a sequence sorted by Y.

use crate::core::{Comparator, Observation, TieRuns};

/// Per-position rank counts of a Y-sorted working sequence.
///
/// * `r[i]`: number of observations with `Y <= Y[i]`.
/// * `l[i]`: number of observations with `Y >= Y[i]`.
///
/// All members of one Y-tie run share the same `r` and `l`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankCounts {
    pub r: Vec<usize>,
    pub l: Vec<usize>,
    /// Number of distinct Y-tie runs.
    pub runs: usize,
}

impl RankCounts {
    /// Computes rank counts for `sorted`, which must already be ordered by `cmp_y`.
    ///
    /// Each run `start..end` of equal Y closes with `r = end` and `l = n - start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatcorr::NaturalOrder;
    /// use chatcorr::rank::RankCounts;
    ///
    /// let sorted = [(0, 1), (0, 2), (0, 2), (0, 5)];
    /// let ranks = RankCounts::from_sorted(&sorted, &NaturalOrder);
    ///
    /// assert_eq!(ranks.r, vec![1, 3, 3, 4]);
    /// assert_eq!(ranks.l, vec![4, 3, 3, 1]);
    /// ```
    pub fn from_sorted<P, C>(sorted: &[P], cmp_y: &C) -> Self
    where
        P: Observation,
        C: Comparator<P::Y> + ?Sized,
    {
        let n = sorted.len();
        let mut r = vec![0; n];
        let mut l = vec![0; n];
        let mut runs = 0;

        TieRuns::new(n, |first, i| cmp_y.equal(sorted[first].y(), sorted[i].y())).for_each(
            |run| {
                let (start, end) = (run.start, run.end);
                r[run.clone()].fill(end);
                l[run].fill(n - start);
                runs += 1;
            },
        );

        Self { r, l, runs }
    }

    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }
}
