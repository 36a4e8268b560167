//! Demonstration sorting algorithms
//!
//! The classic quadratic sorts from the complexity notes plus the linear
//! two-finger merge of pre-sorted arrays. These exist to make the algorithms
//! themselves inspectable; use `slice::sort` for real workloads.

/// Bubble sort: adjacent-swap passes with early exit
///
/// Each pass bubbles the largest unsorted element to the end; a pass without
/// swaps means the slice is sorted and the remaining passes are skipped.
/// O(n^2) worst case, O(n) on already-sorted input.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for i in 0..n - 1 - pass {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort: repeatedly swap the minimum of the unsorted tail forward
///
/// O(n^2) comparisons but at most n - 1 swaps.
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            data.swap(i, min_idx);
        }
    }
}

/// Merge two already-sorted slices into one sorted vector
///
/// Two-finger merge, O(m + n). Stable with respect to the inputs: on ties the
/// left slice's element is taken first.
///
/// # Examples
///
/// ```rust
/// use algolab::sorting::merge_sorted;
///
/// assert_eq!(merge_sorted(&[1, 2, 3], &[2, 5, 6]), vec![1, 2, 2, 3, 5, 6]);
/// ```
pub fn merge_sorted<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Check whether a slice is in non-decreasing order
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}
