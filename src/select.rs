//! Order-statistic queries without a full sort.
//!
//! [`select_nth_by`] answers "which element would land at position `k` if this
//! slice were sorted" in expected linear time by partitioning with random
//! pivots and descending only into the half that contains `k`. The slice is
//! partially reordered as a side effect; elements outside the answer's final
//! position are left in unspecified order.

use crate::partition::partition_random;
use std::cmp::Ordering;

/// Return the element that would occupy position `nth` in the sorted slice,
/// partially reordering `data` in the process.
///
/// After the call, `data[nth]` holds the answer, everything before it compares
/// at or below it, and everything after compares at or above it. The rest of
/// the slice is not sorted.
///
/// # Panics
///
/// Panics if `nth >= data.len()`.
///
/// # Example
/// ```
/// use spansort::select::select_nth_by;
///
/// let mut data = vec![5, 3, 3, 1];
/// assert_eq!(*select_nth_by(&mut data, 0, &i32::cmp), 1);
/// assert_eq!(*select_nth_by(&mut data, 3, &i32::cmp), 5);
/// ```
pub fn select_nth_by<'a, T, F>(data: &'a mut [T], nth: usize, compare: &F) -> &'a T
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    assert!(
        nth < data.len(),
        "order statistic {nth} out of bounds for slice of length {}",
        data.len()
    );
    let mut lo = 0;
    let mut hi = data.len();
    loop {
        if hi - lo == 1 {
            return &data[lo];
        }
        let split = lo + partition_random(&mut data[lo..hi], compare);
        match nth.cmp(&split) {
            Ordering::Equal => return &data[split],
            Ordering::Less => hi = split,
            Ordering::Greater => lo = split + 1,
        }
    }
}

/// [`select_nth_by`] under the natural ordering.
pub fn select_nth<T: Ord>(data: &mut [T], nth: usize) -> &T {
    select_nth_by(data, nth, &T::cmp)
}
