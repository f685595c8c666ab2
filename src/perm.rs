//! X-order permutation with randomized tie-breaking.
//!
//! A stable sort leaves tied X values in the order of the preceding Y sort, which would
//! correlate the tie-break with Y. Each X-tie run is therefore shuffled after sorting.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::{Comparator, Observation, TieRuns};
use crate::sort::sorted_indices;

/// Returns the indices of `working` in ascending X order, with every run of equal X
/// uniformly shuffled using `rng`.
///
/// Only runs of two or more elements consume randomness, so input without X ties yields
/// the same permutation for any generator state. Identical generator state and input
/// order always reproduce the same permutation.
///
/// Also returns the number of runs that were shuffled.
///
/// # Examples
///
/// ```
/// use chatcorr::NaturalOrder;
/// use chatcorr::perm::x_permutation;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let working = [(3, 0), (1, 1), (2, 2)];
/// let (perm, shuffled) = x_permutation(&working, &NaturalOrder, &mut StdRng::seed_from_u64(1));
///
/// assert_eq!(perm, vec![1, 2, 0]);
/// assert_eq!(shuffled, 0);
/// ```
pub fn x_permutation<P, C, R>(working: &[P], cmp_x: &C, rng: &mut R) -> (Vec<usize>, usize)
where
    P: Observation,
    C: Comparator<P::X> + ?Sized,
    R: Rng + ?Sized,
{
    let n = working.len();
    let mut perm = sorted_indices(n, |a, b| cmp_x.compare(working[a].x(), working[b].x()));

    let runs: Vec<_> = TieRuns::new(n, |first, i| {
        cmp_x.equal(working[perm[first]].x(), working[perm[i]].x())
    })
    .filter(|run| run.len() > 1)
    .collect();

    for run in &runs {
        perm[run.clone()].shuffle(rng);
    }

    (perm, runs.len())
}
