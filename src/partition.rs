//! The shared partition primitive.
//!
//! Every quicksort variant and the order-statistic query rearrange blocks
//! through this one routine, so they all agree on the same contract: after
//! [`partition`] returns `p`, every element before `p` compares `Less` than
//! the pivot, every element from `p + 1` on compares equal or greater, and
//! the pivot itself rests at `p`.

use rand::Rng;
use std::cmp::Ordering;

/// Partition `block` around its last element, returning the pivot's final
/// index.
///
/// Single forward scan: elements comparing `Less` than the pivot are swapped
/// to the front, then the pivot is swapped into the split point. Equal
/// elements end up on the right of the pivot.
///
/// `block` must be non-empty.
#[inline]
pub fn partition<T, F>(block: &mut [T], compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    debug_assert!(!block.is_empty());
    let last = block.len() - 1;
    let mut split = 0;
    for i in 0..last {
        if compare(&block[i], &block[last]) == Ordering::Less {
            block.swap(split, i);
            split += 1;
        }
    }
    block.swap(split, last);
    split
}

/// Partition `block` around a uniformly-chosen pivot.
///
/// The chosen index is swapped with the last position and the scan proceeds
/// as in [`partition`]. The random choice defeats adversarial pre-sorted and
/// reverse-sorted inputs that degrade a fixed-pivot scan to quadratic time.
///
/// `block` must be non-empty.
#[inline]
pub fn partition_random<T, F>(block: &mut [T], compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    debug_assert!(!block.is_empty());
    let last = block.len() - 1;
    let pivot = rand::rng().random_range(0..=last);
    block.swap(pivot, last);
    partition(block, compare)
}
