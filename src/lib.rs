//! # Spansort
//!
//! `spansort` is an in-memory sorting engine built around interchangeable
//! algorithms: hand the engine a buffer and a total order, pick one of nine
//! sorting strategies, and observe live progress while it runs.
//!
//! Beyond plain sorting it answers order-statistic queries ("which element
//! would land at index k?") in expected linear time via quickselect, and
//! ships a counting-sort family that sorts integer-keyed data in
//! `O(n + span)` without comparisons.
//!
//! ## Key Features
//!
//! - **Interchangeable algorithms**: nine variants behind one [`Algorithm`]
//!   selector, from teaching-grade quadratic sorts through iterative and
//!   randomized quicksorts to a worker-pool concurrent quicksort.
//! - **Live progress**: every algorithm credits a shared, cache-padded
//!   [`SortProgress`] tracker as elements settle into final position;
//!   observe a running sort from any thread via
//!   [`SortEngine::progress_tracker`].
//! - **Order statistics without sorting**: [`SortEngine::sorted_element`]
//!   and the standalone [`select_nth_by`](select::select_nth_by) find the
//!   k-th smallest element by partitioning only the half that matters.
//! - **Counting sorts**: stable and in-place variants in the [`counting`]
//!   module, generic over every primitive integer key width, ascending or
//!   descending, with checked key bounds.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! [`SortEngine::new`] sorts under the type's natural ordering with the
//! default algorithm (randomized quicksort with a small-block finish):
//!
//! ```rust
//! use spansort::SortEngine;
//!
//! let mut engine = SortEngine::new(vec![30, 10, 40, 20]);
//! engine.sort().unwrap();
//!
//! assert_eq!(engine.data(), &[10, 20, 30, 40]);
//! assert_eq!(engine.progress(), 1.0);
//! ```
//!
//! ### Order Statistics
//!
//! Asking for one sorted position does not pay for a full sort:
//!
//! ```rust
//! use spansort::SortEngine;
//!
//! let mut engine = SortEngine::new(vec![5, 3, 3, 1]);
//!
//! // The minimum, and the element a full sort would put at index 3.
//! assert_eq!(engine.sorted_element(0).unwrap(), 1);
//! assert_eq!(engine.sorted_element(3).unwrap(), 5);
//! ```
//!
//! ### Custom Orderings
//!
//! Any total, deterministic comparison function works, and the algorithm
//! can be swapped per run:
//!
//! ```rust
//! use spansort::{Algorithm, SortEngine};
//!
//! let mut engine = SortEngine::with_comparator(
//!     vec![1u32, 2, 3, 4, 5],
//!     |a: &u32, b: &u32| b.cmp(a),
//! );
//! engine.set_algorithm(Algorithm::CocktailSort);
//! engine.sort().unwrap();
//!
//! assert_eq!(engine.data(), &[5, 4, 3, 2, 1]);
//! ```
//!
//! ## Choosing an Algorithm
//!
//! - [`Algorithm::QuickSortOptimized`] (the default): expected O(n log n)
//!   with randomized pivots and a selection-sort finish on small blocks.
//! - [`Algorithm::QuickSortConcurrent`]: the same partitioning fanned out
//!   across one worker per core; pays off on large buffers.
//! - [`Algorithm::MergeSort`]: O(n log n) guaranteed, at the cost of an
//!   auxiliary buffer; its tie handling is not stable.
//! - [`Algorithm::InsertionSort`]: stable, and O(n) on nearly-sorted
//!   input.
//! - The remaining quadratic variants (selection, bubble, cocktail,
//!   exchange) are for small inputs and for teaching.
//!
//! For integer keys in a known range, comparison sorting can be skipped
//! entirely: the [`counting`] module sorts in `O(n + span)`.

pub mod algorithms;
pub mod counting;
pub mod engine;
pub mod error;
pub mod partition;
pub mod progress;
pub mod select;

pub use engine::{Algorithm, SortEngine};
pub use error::{Result, SortError};
pub use progress::SortProgress;

pub mod prelude {
    pub use crate::counting::{CountingKey, KeyedElement, SortKey};
    pub use crate::engine::{Algorithm, SortEngine};
    pub use crate::error::SortError;
    pub use crate::progress::SortProgress;
    pub use crate::select::{select_nth, select_nth_by};
}
