use std::cmp::Ordering;

use crate::progress::SortProgress;

/// Bottom-up merge sort: `O(n log n)` time, `O(n)` auxiliary space.
///
/// Runs of doubling width are merged pass by pass, no recursion. Only the
/// left run is staged in the auxiliary buffer, which is reused across every
/// merge of the sort. On ties the right run's element is taken
/// first, so equal elements can cross runs: this realization is not
/// stable.
///
/// Progress is credited per completed pass in proportion to pass depth,
/// reaching the block length exactly when the last pass finishes.
pub fn sort<T, F>(block: &mut [T], compare: &F, progress: &SortProgress)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let len = block.len();
    if len < 2 {
        progress.add(len);
        return;
    }
    let passes = (len - 1).ilog2() + 1;
    let mut aux: Vec<T> = Vec::with_capacity(len);
    let mut credited = 0usize;
    let mut width = 1usize;
    let mut pass = 0u32;
    while width < len {
        let mut start = 0;
        while start + width < len {
            let mid = start + width;
            let end = (start + 2 * width).min(len);
            merge_runs(&mut block[start..end], mid - start, compare, &mut aux);
            start = end;
        }
        width *= 2;
        pass += 1;
        let target = (len as u128 * u128::from(pass) / u128::from(passes)) as usize;
        progress.add(target - credited);
        credited = target;
    }
}

/// Merge `run[..mid]` and `run[mid..]`, both already sorted, in place.
fn merge_runs<T, F>(run: &mut [T], mid: usize, compare: &F, aux: &mut Vec<T>)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    aux.clear();
    aux.extend_from_slice(&run[..mid]);
    let mut left = 0;
    let mut right = mid;
    let mut out = 0;
    while left < aux.len() && right < run.len() {
        if compare(&aux[left], &run[right]) == Ordering::Less {
            run[out] = aux[left].clone();
            left += 1;
        } else {
            run[out] = run[right].clone();
            right += 1;
        }
        out += 1;
    }
    // Right-run leftovers are already in place; only the staged left run
    // can have a tail to copy back.
    while left < aux.len() {
        run[out] = aux[left].clone();
        left += 1;
        out += 1;
    }
}
