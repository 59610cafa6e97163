use std::cmp::Ordering;

use crate::progress::SortProgress;

/// Exchange sort: `O(n^2)` comparisons and up to `O(n^2)` swaps.
///
/// Compares each slot against every later element and swaps whenever the
/// pair is inverted, so the smallest remaining element lands in the slot by
/// the end of its pass. Same settle-one-slot-per-pass shape as selection
/// sort, with eager swaps instead of a tracked minimum. Not stable.
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
        for j in i + 1..len {
            if compare(&block[i], &block[j]) == Ordering::Greater {
                block.swap(i, j);
            }
        }
        progress.add(1);
    }
    progress.add(1);
}
