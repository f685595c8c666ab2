//! Comparator-driven sorts used by the estimator.
//!
//! These make no assumption about the comparator beyond it returning an [`Ordering`]:
//! an inconsistent comparator yields some permutation, never a panic or a lost element.
//! For a strict weak ordering the result is the unique stable order.

use std::cmp::Ordering;

/// Runs shorter than this are sorted by insertion before merging.
const INSERTION_SORT_THRESHOLD: usize = 16;

/// Returns the indices `0..len` in stable ascending order under `compare`.
///
/// Bottom-up merge sort: insertion-sorted blocks, then pairwise merges through a
/// scratch buffer of the same length.
///
/// ```
/// use chatcorr::sort::sorted_indices;
///
/// let keys = [3, 1, 2, 1];
/// let order = sorted_indices(keys.len(), |a, b| keys[a].cmp(&keys[b]));
/// assert_eq!(order, vec![1, 3, 2, 0]);
/// ```
pub fn sorted_indices<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut indices: Vec<usize> = (0..len).collect();
    indices
        .chunks_mut(INSERTION_SORT_THRESHOLD)
        .for_each(|block| insertion_sort(block, &mut compare));

    let mut buffer = vec![0; len];
    let mut width = INSERTION_SORT_THRESHOLD;
    while width < len {
        indices
            .chunks(2 * width)
            .zip(buffer.chunks_mut(2 * width))
            .for_each(|(src, dst)| {
                let mid = width.min(src.len());
                merge(&src[..mid], &src[mid..], dst, &mut compare);
            });
        std::mem::swap(&mut indices, &mut buffer);
        width *= 2;
    }

    indices
}

/// Stable-sorts `data` in place under `compare`.
///
/// ```
/// use chatcorr::sort::sort_by;
///
/// let mut data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// sort_by(&mut data, |a, b| a.0.cmp(&b.0));
/// assert_eq!(data, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn sort_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let indices = sorted_indices(data.len(), |a, b| compare(&data[a], &data[b]));
    apply_permutation(data, indices);
}

/// Moves `data[indices[i]]` to position `i` by following permutation cycles.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}

fn insertion_sort<F>(block: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    for i in 1..block.len() {
        let mut j = i;
        // Strictly less, so equal elements keep their order.
        while j > 0 && compare(block[j], block[j - 1]) == Ordering::Less {
            block.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merges `left` and `right` into `out`, preferring `left` on ties.
fn merge<F>(left: &[usize], right: &[usize], out: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_right = j < right.len()
            && (i >= left.len() || compare(right[j], left[i]) == Ordering::Less);
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}
