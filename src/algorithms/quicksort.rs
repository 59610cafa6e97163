use std::cmp::Ordering;

use crate::algorithms::selection;
use crate::partition::{partition, partition_random};
use crate::progress::SortProgress;

/// Blocks at or below this length are finished by selection sort in
/// [`sort_optimized`].
const SMALL_BLOCK: usize = 7;

/// Iterative quicksort with last-element pivots.
///
/// Pending blocks live on an explicit stack rather than the call stack.
/// The fixed pivot choice degrades to `O(n^2)` on sorted or reverse-sorted
/// input; [`sort_optimized`] randomizes the pivot to dodge that case. Not
/// stable.
pub fn sort<T, F>(block: &mut [T], compare: &F, progress: &SortProgress)
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let len = block.len();
    if len < 2 {
        progress.add(len);
        return;
    }
    let mut stack = vec![(0usize, len)];
    while let Some((start, end)) = stack.pop() {
        let block_len = end - start;
        let split = start + partition(&mut block[start..end], compare);
        let mut deferred = 0;
        if split - start > 1 {
            stack.push((start, split));
            deferred += split - start;
        }
        if end - split - 1 > 1 {
            stack.push((split + 1, end));
            deferred += end - split - 1;
        }
        // The pivot slot and any empty or singleton children settle here.
        progress.add(block_len - deferred);
    }
}

/// Quicksort with randomized pivots and a small-block cutoff.
///
/// Random pivot selection makes adversarial input no worse than average
/// with high probability, and blocks of [`SMALL_BLOCK`] or fewer elements
/// skip the partition machinery in favor of selection sort, which wins on
/// tiny blocks through sheer simplicity. Not stable.
pub fn sort_optimized<T, F>(block: &mut [T], compare: &F, progress: &SortProgress)
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let len = block.len();
    if len <= SMALL_BLOCK {
        selection::sort(block, compare, progress);
        return;
    }
    let mut stack = vec![(0usize, len)];
    while let Some((start, end)) = stack.pop() {
        let block_len = end - start;
        let split = start + partition_random(&mut block[start..end], compare);
        let mut deferred = 0;
        for (child_start, child_end) in [(start, split), (split + 1, end)] {
            let child_len = child_end - child_start;
            if child_len <= 1 {
                continue;
            }
            // Selection sort credits its own progress, so its elements are
            // deferred here just like stacked blocks.
            deferred += child_len;
            if child_len <= SMALL_BLOCK {
                selection::sort(&mut block[child_start..child_end], compare, progress);
            } else {
                stack.push((child_start, child_end));
            }
        }
        progress.add(block_len - deferred);
    }
}
