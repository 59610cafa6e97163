use std::cmp::Ordering;

use crate::progress::SortProgress;

/// Bubble sort: `O(n^2)` worst case, `O(n)` on sorted input.
///
/// Each forward pass swaps inverted neighbors, floating the largest
/// remaining element to the top of the window. A pass with no swaps proves
/// the rest is ordered and ends the sort early. Adjacent swaps on strict
/// inversions only: stable.
pub fn sort<T, F>(block: &mut [T], compare: &F, progress: &SortProgress)
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let len = block.len();
    if len < 2 {
        progress.add(len);
        return;
    }
    let mut settled = 0;
    for end in (1..len).rev() {
        let mut swapped = false;
        for j in 0..end {
            if compare(&block[j], &block[j + 1]) == Ordering::Greater {
                block.swap(j, j + 1);
                swapped = true;
            }
        }
        settled += 1;
        progress.add(1);
        if !swapped {
            // Swap-free pass: the remaining prefix is already ordered.
            progress.add(len - settled);
            return;
        }
    }
    // The final pass over two elements settles both ends.
    progress.add(1);
}

/// Cocktail shaker sort: bubble sort run in alternating directions.
///
/// A forward pass floats the window's largest element to the top, then a
/// backward pass sinks its smallest to the bottom, shrinking the window from
/// both ends. The backward pass clears low-index stragglers ("turtles") that
/// plain bubble sort moves only one slot per pass. Stable, with the same
/// swap-free early exit.
pub fn cocktail_sort<T, F>(block: &mut [T], compare: &F, progress: &SortProgress)
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let len = block.len();
    if len < 2 {
        progress.add(len);
        return;
    }
    let mut lo = 0;
    let mut hi = len - 1;
    let mut settled = 0;
    while lo < hi {
        let mut swapped = false;
        for j in lo..hi {
            if compare(&block[j], &block[j + 1]) == Ordering::Greater {
                block.swap(j, j + 1);
                swapped = true;
            }
        }
        hi -= 1;
        settled += 1;
        progress.add(1);
        if !swapped || lo >= hi {
            break;
        }
        swapped = false;
        for j in (lo..hi).rev() {
            if compare(&block[j], &block[j + 1]) == Ordering::Greater {
                block.swap(j, j + 1);
                swapped = true;
            }
        }
        lo += 1;
        settled += 1;
        progress.add(1);
        if !swapped {
            break;
        }
    }
    // Whatever the window exits with is already ordered.
    progress.add(len - settled);
}
