//! Live progress reporting for running sorts.
//!
//! Every algorithm routine credits elements to a shared [`SortProgress`] as it
//! proves them placed, so observers polling [`SortProgress::fraction`] see
//! realistic movement instead of a jump from 0 to 1 at the end of the call.
//! The pair is safe to read from any thread while a sort is running.

use cuneiform::cuneiform;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Atomically-updated `(sorted, total)` pair backing progress queries.
///
/// `sorted` counts elements proven to occupy their final position; `total` is
/// the length of the range under sort. The counters are reset at the start of
/// every sort call and `sorted` is monotonically non-decreasing for the
/// duration of one call. A freshly-constructed tracker reads as `0.0`.
///
/// The struct is cache-line padded: during a concurrent sort many workers
/// hammer the `sorted` counter, and padding keeps it off lines shared with
/// unrelated data.
///
/// # Example
/// ```
/// use spansort::SortProgress;
///
/// let progress = SortProgress::new();
/// progress.reset(4);
/// progress.add(1);
/// assert_eq!(progress.fraction(), 0.25);
/// progress.complete();
/// assert_eq!(progress.fraction(), 1.0);
/// ```
#[cuneiform]
pub struct SortProgress {
    sorted: AtomicUsize,
    total: AtomicUsize,
}

impl SortProgress {
    /// Create a tracker with no work recorded; [`fraction`](Self::fraction)
    /// reads `0.0` until the first [`reset`](Self::reset).
    pub fn new() -> Self {
        Self { sorted: AtomicUsize::new(0), total: AtomicUsize::new(0) }
    }

    /// Begin a new sort over `total` elements, clearing the sorted count.
    ///
    /// Called once per sort invocation before any algorithm work; callers
    /// composing the algorithm routines directly must do the same.
    pub fn reset(&self, total: usize) {
        self.sorted.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    /// Credit `placed` more elements as sorted, returning the new count.
    ///
    /// The return value is the basis of concurrent completion detection: the
    /// counter is only ever added to during a call, so exactly one caller
    /// observes the count crossing the total.
    pub fn add(&self, placed: usize) -> usize {
        self.sorted.fetch_add(placed, Ordering::Relaxed) + placed
    }

    /// Force the pair to its completed state (`sorted == total`).
    pub fn complete(&self) {
        self.sorted.store(self.total.load(Ordering::Relaxed), Ordering::Relaxed);
    }

    /// Number of elements proven sorted so far.
    pub fn sorted(&self) -> usize {
        self.sorted.load(Ordering::Relaxed)
    }

    /// Number of elements the current sort covers.
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Completed fraction in `[0, 1]`.
    ///
    /// Reads `0.0` before the first sort. Reads taken while another thread is
    /// resetting the pair are clamped rather than allowed past `1.0`.
    pub fn fraction(&self) -> f64 {
        let total = self.total.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }
        let sorted = self.sorted.load(Ordering::Relaxed);
        (sorted as f64 / total as f64).min(1.0)
    }
}

impl Default for SortProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SortProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortProgress")
            .field("sorted", &self.sorted())
            .field("total", &self.total())
            .finish()
    }
}
