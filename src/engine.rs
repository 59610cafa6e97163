//! The [`SortEngine`] façade and its [`Algorithm`] selector.
//!
//! The engine owns the buffer being sorted plus the persistent
//! configuration around it: the comparator, the selected algorithm, the
//! copy-on-sort flag, a shared progress tracker, and an optional completion
//! callback. Setters mutate the configuration between runs; `sort` and the
//! order-statistic queries borrow the engine exclusively, so overlapping
//! runs on one engine are rejected at compile time.
//!
//! # Examples
//!
//! ```
//! use spansort::{Algorithm, SortEngine};
//!
//! let mut engine = SortEngine::new(vec![9, 1, 8, 2]);
//! engine.set_algorithm(Algorithm::MergeSort);
//! engine.sort().unwrap();
//! assert_eq!(engine.data(), &[1, 2, 8, 9]);
//! assert_eq!(engine.progress(), 1.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::algorithms::{bubble, concurrent, exchange, insertion, merge, quicksort, selection};
use crate::error::{Result, SortError};
use crate::progress::SortProgress;
use crate::select::select_nth_by;

/// The sorting algorithms a [`SortEngine`] can run.
///
/// The default is [`QuickSortOptimized`](Algorithm::QuickSortOptimized):
/// randomized pivots with a selection-sort finish on small blocks, the best
/// single-threaded general choice here.
/// [`QuickSortConcurrent`](Algorithm::QuickSortConcurrent) fans the same
/// partitioning out over a worker pool and pays off on large buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Worker-pool quicksort, one worker per available core.
    QuickSortConcurrent,
    /// Randomized-pivot quicksort with a small-block selection-sort finish.
    #[default]
    QuickSortOptimized,
    /// Plain iterative quicksort, last-element pivots.
    QuickSort,
    /// Selection sort.
    SelectionSort,
    /// Bubble sort with swap-free early exit.
    BubbleSort,
    /// Bidirectional bubble sort.
    CocktailSort,
    /// Eager-swap quadratic sort.
    ExchangeSort,
    /// Insertion sort; stable, and linear on nearly sorted input.
    InsertionSort,
    /// Bottom-up merge sort (non-stable tie handling).
    MergeSort,
}

impl Algorithm {
    /// Every selectable algorithm, in dispatch order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::QuickSortConcurrent,
        Algorithm::QuickSortOptimized,
        Algorithm::QuickSort,
        Algorithm::SelectionSort,
        Algorithm::BubbleSort,
        Algorithm::CocktailSort,
        Algorithm::ExchangeSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
    ];

    /// Stable identifier for logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::QuickSortConcurrent => "quicksort_concurrent",
            Algorithm::QuickSortOptimized => "quicksort_optimized",
            Algorithm::QuickSort => "quicksort",
            Algorithm::SelectionSort => "selection_sort",
            Algorithm::BubbleSort => "bubble_sort",
            Algorithm::CocktailSort => "cocktail_sort",
            Algorithm::ExchangeSort => "exchange_sort",
            Algorithm::InsertionSort => "insertion_sort",
            Algorithm::MergeSort => "merge_sort",
        }
    }
}

/// A reusable sorting engine over an owned buffer.
///
/// Construction takes the buffer; everything else is configuration with a
/// setter and a default. The engine is long-lived: swap buffers in and out
/// with [`set_data`](SortEngine::set_data) / [`into_data`](SortEngine::into_data)
/// and re-run as often as needed.
///
/// Progress of a running sort is observable from other threads through the
/// shared handle returned by
/// [`progress_tracker`](SortEngine::progress_tracker).
///
/// # Examples
///
/// Sorting under a custom ordering:
///
/// ```
/// use spansort::SortEngine;
///
/// let mut engine = SortEngine::with_comparator(
///     vec!["pear", "fig", "plum"],
///     |a: &&str, b: &&str| a.len().cmp(&b.len()),
/// );
/// engine.sort().unwrap();
/// assert_eq!(engine.data(), &["fig", "pear", "plum"]);
/// ```
pub struct SortEngine<T> {
    data: Vec<T>,
    comparator: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
    algorithm: Algorithm,
    clonable: bool,
    progress: Arc<SortProgress>,
    on_complete: Option<Box<dyn FnMut(&[T]) + Send>>,
}

impl<T: Ord + 'static> SortEngine<T> {
    /// An engine over `data` under the type's natural ordering.
    pub fn new(data: Vec<T>) -> Self {
        Self::with_comparator(data, T::cmp)
    }
}

impl<T> SortEngine<T> {
    /// An engine over `data` under `compare`.
    ///
    /// `compare` must be a total, deterministic order. The engine never
    /// verifies this; a comparator that is neither leaves the buffer in an
    /// unspecified (but valid) permutation, exactly as `slice::sort_by`
    /// would.
    pub fn with_comparator<F>(data: Vec<T>, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            data,
            comparator: Arc::new(compare),
            algorithm: Algorithm::default(),
            clonable: false,
            progress: Arc::new(SortProgress::new()),
            on_complete: None,
        }
    }

    /// Replace the buffer, keeping the rest of the configuration.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
    }

    /// The current buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the engine, returning the buffer.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Replace the comparator.
    pub fn set_comparator<F>(&mut self, compare: F)
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Arc::new(compare);
    }

    /// Select the algorithm future sorts run. `None` restores the default.
    pub fn set_algorithm(&mut self, algorithm: impl Into<Option<Algorithm>>) {
        self.algorithm = algorithm.into().unwrap_or_default();
    }

    /// The currently selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Enable or disable copy-on-sort. Off by default.
    ///
    /// When enabled, [`sort`](SortEngine::sort) installs a fresh clone of
    /// the buffer and sorts that, and order-statistic queries run on a
    /// private copy so the buffer stays untouched. When disabled, both
    /// work directly on the engine's buffer, and a query visibly
    /// partially reorders it.
    pub fn set_clonable(&mut self, clonable: bool) {
        self.clonable = clonable;
    }

    /// Whether copy-on-sort is enabled.
    pub fn is_clonable(&self) -> bool {
        self.clonable
    }

    /// Register a callback invoked with the final buffer after every
    /// successful sort, before `sort` returns. The latest registration
    /// wins. Failed sorts do not notify.
    pub fn on_complete<F>(&mut self, callback: F)
    where
        F: FnMut(&[T]) + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    /// Completed fraction of the most recent sort, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        self.progress.fraction()
    }

    /// A shared handle on the progress tracker, for observing a running
    /// sort from another thread.
    pub fn progress_tracker(&self) -> Arc<SortProgress> {
        Arc::clone(&self.progress)
    }

    /// Whether the buffer is currently ordered under the comparator.
    pub fn is_sorted(&self) -> bool {
        let compare = &*self.comparator;
        self.data
            .windows(2)
            .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
    }

    /// Sort the whole buffer with the selected algorithm.
    ///
    /// # Errors
    ///
    /// [`SortError::PoolTimeout`] if the concurrent variant's worker pool
    /// exceeds its operational bound.
    pub fn sort(&mut self) -> Result<()>
    where
        T: Clone + Send,
    {
        self.sort_range(0, self.data.len())
    }

    /// Sort the half-open range `[start, end)` of the buffer.
    ///
    /// An empty range (including `end <= start`, both within bounds) is a
    /// successful no-op with progress reporting complete.
    ///
    /// # Errors
    ///
    /// [`SortError::RangeOutOfBounds`] if either bound exceeds the buffer
    /// length, before anything is mutated. [`SortError::PoolTimeout`] as
    /// for [`sort`](SortEngine::sort).
    pub fn sort_range(&mut self, start: usize, end: usize) -> Result<()>
    where
        T: Clone + Send,
    {
        let len = self.data.len();
        if start > len || end > len {
            return Err(SortError::RangeOutOfBounds { start, end, len });
        }
        if self.clonable {
            self.data = self.data.clone();
        }
        if end > start {
            self.progress.reset(end - start);
            debug!(
                "sorting {count} of {len} elements with {name}",
                count = end - start,
                name = self.algorithm.name()
            );
            dispatch(
                self.algorithm,
                &mut self.data[start..end],
                &*self.comparator,
                &self.progress,
            )?;
        } else {
            // Nothing to reorder, but the run still reports as complete.
            self.progress.reset(1);
        }
        self.progress.complete();
        if let Some(callback) = self.on_complete.as_mut() {
            callback(&self.data);
        }
        Ok(())
    }

    /// The element that would land at `index` if the buffer were sorted,
    /// without fully sorting it.
    ///
    /// Index 0 answers the minimum, `len - 1` the maximum. With
    /// copy-on-sort enabled the query runs on a private copy; otherwise
    /// the buffer is left partially reordered around the answer.
    ///
    /// # Errors
    ///
    /// [`SortError::IndexOutOfRange`] if `index` is not a valid buffer
    /// index.
    pub fn sorted_element(&mut self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.sorted_element_in(index, 0, self.data.len())
    }

    /// The element that would land at `index` if `[start, end)` were
    /// sorted, considering only that range.
    ///
    /// # Errors
    ///
    /// [`SortError::RangeOutOfBounds`] if either bound exceeds the buffer
    /// length; [`SortError::IndexOutOfRange`] if `index` lies outside
    /// `[start, end)`, which an empty range guarantees.
    pub fn sorted_element_in(&mut self, index: usize, start: usize, end: usize) -> Result<T>
    where
        T: Clone,
    {
        let len = self.data.len();
        if start > len || end > len {
            return Err(SortError::RangeOutOfBounds { start, end, len });
        }
        if index < start || index >= end {
            return Err(SortError::IndexOutOfRange { index, start, end });
        }
        let compare = &*self.comparator;
        if self.clonable {
            let mut copy = self.data.clone();
            Ok(select_nth_by(&mut copy[start..end], index - start, compare).clone())
        } else {
            Ok(select_nth_by(&mut self.data[start..end], index - start, compare).clone())
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortEngine")
            .field("data", &self.data)
            .field("algorithm", &self.algorithm)
            .field("clonable", &self.clonable)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

fn dispatch<T: Clone + Send>(
    algorithm: Algorithm,
    block: &mut [T],
    compare: &(dyn Fn(&T, &T) -> Ordering + Send + Sync),
    progress: &SortProgress,
) -> Result<()> {
    match algorithm {
        Algorithm::QuickSortConcurrent => concurrent::sort(block, compare, progress)?,
        Algorithm::QuickSortOptimized => quicksort::sort_optimized(block, compare, progress),
        Algorithm::QuickSort => quicksort::sort(block, compare, progress),
        Algorithm::SelectionSort => selection::sort(block, compare, progress),
        Algorithm::BubbleSort => bubble::sort(block, compare, progress),
        Algorithm::CocktailSort => bubble::cocktail_sort(block, compare, progress),
        Algorithm::ExchangeSort => exchange::sort(block, compare, progress),
        Algorithm::InsertionSort => insertion::sort(block, compare, progress),
        Algorithm::MergeSort => merge::sort(block, compare, progress),
    }
    Ok(())
}
