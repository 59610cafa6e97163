//! The interchangeable sorting routines behind [`SortEngine`].
//!
//! Every routine here has the same shape: reorder `block` under `compare`
//! and credit `progress` as elements reach their final position, so that
//! the credited count equals the block length exactly when the routine
//! returns. [`SortEngine`] resets the tracker and picks the routine; the
//! routines themselves are plain functions and can be called directly with
//! a tracker of their own.
//!
//! Comparators are taken as `&F` with `F: ?Sized`, so both plain closures
//! and `dyn Fn` trait objects fit without an adapter.
//!
//! [`SortEngine`]: crate::SortEngine

pub mod bubble;
pub mod concurrent;
pub mod exchange;
pub mod insertion;
pub mod merge;
pub mod quicksort;
pub mod selection;
