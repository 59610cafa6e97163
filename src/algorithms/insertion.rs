use std::cmp::Ordering;

use crate::progress::SortProgress;

/// Insertion sort: `O(n^2)` worst case, `O(n)` on nearly-sorted input.
///
/// Grows a sorted prefix one element at a time, sinking each new element
/// through the prefix by adjacent swaps. Elements only move past strictly
/// greater neighbors, so equal elements keep their input order: stable.
pub fn sort<T, F>(block: &mut [T], compare: &F, progress: &SortProgress)
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let len = block.len();
    if len == 0 {
        return;
    }
    // A single element is already a sorted prefix.
    progress.add(1);
    for i in 1..len {
        let mut j = i;
        while j > 0 && compare(&block[j - 1], &block[j]) == Ordering::Greater {
            block.swap(j - 1, j);
            j -= 1;
        }
        progress.add(1);
    }
}
