use std::cmp::Ordering;

use crate::progress::SortProgress;

/// Selection sort: `O(n^2)` comparisons, at most `n - 1` swaps.
///
/// Each pass scans the unsettled tail for its smallest element and swaps it
/// into place, settling one slot per pass. The scan keeps the first of
/// several equal minima, but the long-range swap can carry an equal element
/// past its peers: not stable. Its low swap count makes it the small-block
/// finisher for the optimized quicksort.
pub fn sort<T, F>(block: &mut [T], compare: &F, progress: &SortProgress)
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let len = block.len();
    if len < 2 {
        progress.add(len);
        return;
    }
    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if compare(&block[min], &block[j]) == Ordering::Greater {
                min = j;
            }
        }
        if min != i {
            block.swap(i, min);
        }
        progress.add(1);
    }
    // The last element is in place once every other slot is settled.
    progress.add(1);
}
