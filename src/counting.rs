//! Counting sorts for integer-keyed data.
//!
//! When keys are known to lie in a bounded interval `[min, max]`, counting
//! sort arranges `n` elements in `O(n + (max - min))` time without a single
//! comparison. Two variants with different guarantees:
//!
//! - The **in-place** family ([`counting_sort_in_place`] and friends) works on
//!   slices of bare keys. It histograms the keys and rewrites the buffer by
//!   walking the bins, materializing each bin's key value directly. Fast, but
//!   element identity is the key itself and equal keys have no preserved
//!   order: it is **not stable**.
//! - The **stable** family ([`counting_sort`], [`counting_sort_by_key`])
//!   carries arbitrary payloads. Elements sharing a key keep their input
//!   order. Keys come from the payload's own [`SortKey`] implementation, an
//!   external extractor closure, or a [`KeyedElement`] pair for payloads with
//!   no intrinsic key.
//!
//! Any observed key outside the declared bounds fails with
//! [`SortError::KeyOutOfBounds`](crate::SortError::KeyOutOfBounds) before the
//! buffer is touched.
//!
//! # Examples
//!
//! ```
//! use spansort::counting::{counting_sort, counting_sort_in_place, KeyedElement};
//!
//! // Stable: the two 3-keyed records keep their input order.
//! let mut records = vec![
//!     KeyedElement::new(5u8, "eve"),
//!     KeyedElement::new(3, "ada"),
//!     KeyedElement::new(3, "bob"),
//!     KeyedElement::new(1, "zed"),
//! ];
//! counting_sort(&mut records, 1, 5).unwrap();
//! let names: Vec<_> = records.iter().map(|r| *r.value()).collect();
//! assert_eq!(names, ["zed", "ada", "bob", "eve"]);
//!
//! // In-place: bare keys, no payload, no stability guarantee.
//! let mut keys = [5u8, 3, 3, 1];
//! counting_sort_in_place(&mut keys, 0, 5).unwrap();
//! assert_eq!(keys, [1, 3, 3, 5]);
//! ```

use crate::error::{Result, SortError};

/// An integer type usable as a counting-sort key.
///
/// One generic routine serves every key width and signedness by widening keys
/// to `i128` for bounds arithmetic and materializing bin values back from the
/// widened form. Implemented for the primitive integers up to 64 bits.
pub trait CountingKey: Copy + Ord {
    /// Widen to `i128` for uniform bounds arithmetic.
    fn widen(self) -> i128;

    /// Materialize a key from a widened value.
    ///
    /// Only called with values between the widened bounds of the sort, so the
    /// value is always representable.
    fn from_widened(widened: i128) -> Self;
}

/// A payload that can describe its own counting-sort key.
///
/// Implemented for the primitive integers themselves, so slices of bare
/// integers go straight through [`counting_sort`]. Payload types with an
/// intrinsic integer key implement this once instead of threading an
/// extractor closure through every call.
pub trait SortKey {
    /// The key type this payload sorts by.
    type Key: CountingKey;

    /// The key to sort this payload under.
    fn sort_key(&self) -> Self::Key;
}

macro_rules! impl_counting_key {
    ($($int:ty),* $(,)?) => {$(
        impl CountingKey for $int {
            #[inline]
            fn widen(self) -> i128 {
                self as i128
            }

            #[inline]
            fn from_widened(widened: i128) -> Self {
                widened as $int
            }
        }

        impl SortKey for $int {
            type Key = $int;

            fn sort_key(&self) -> $int {
                *self
            }
        }
    )*};
}

impl_counting_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// An immutable `(key, payload)` pair for payloads with no intrinsic key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedElement<K, V> {
    key: K,
    value: V,
}

impl<K: CountingKey, V> KeyedElement<K, V> {
    /// Pair `value` with the key it sorts under.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The sort key.
    pub fn key(&self) -> K {
        self.key
    }

    /// The payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the pair, returning the payload.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<K: CountingKey, V> SortKey for KeyedElement<K, V> {
    type Key = K;

    fn sort_key(&self) -> K {
        self.key
    }
}

/// Declared key interval, widened for arithmetic.
#[derive(Clone, Copy, Debug)]
struct KeyBounds {
    min: i128,
    max: i128,
    span: usize,
}

impl KeyBounds {
    fn new(min: i128, max: i128) -> Result<Self> {
        if min > max {
            return Err(SortError::InvalidKeyBounds { min, max });
        }
        let span = max - min + 1;
        if span > usize::MAX as i128 {
            return Err(SortError::InvalidKeyBounds { min, max });
        }
        Ok(Self { min, max, span: span as usize })
    }

    fn bin(&self, key: i128) -> Result<usize> {
        if key < self.min || key > self.max {
            return Err(SortError::KeyOutOfBounds { key, min: self.min, max: self.max });
        }
        Ok((key - self.min) as usize)
    }
}

/// Sort bare keys ascending in `O(n + (max - min))`, overwriting the buffer.
///
/// Builds a histogram over the declared `[min, max]` interval and rewrites
/// the slice by walking the bins in key order. Not stable: elements are
/// reconstructed from their key value, so equal keys have no distinguishable
/// order afterwards.
///
/// # Errors
///
/// [`SortError::InvalidKeyBounds`] if `min > max` or the interval spans more
/// bins than addressable memory; [`SortError::KeyOutOfBounds`] if any element
/// lies outside `[min, max]`. The buffer is untouched on error.
pub fn counting_sort_in_place<K: CountingKey>(data: &mut [K], min: K, max: K) -> Result<()> {
    in_place(data, min, max, false)
}

/// [`counting_sort_in_place`] with the bins walked in reverse key order.
pub fn counting_sort_in_place_desc<K: CountingKey>(data: &mut [K], min: K, max: K) -> Result<()> {
    in_place(data, min, max, true)
}

/// [`counting_sort_in_place`] with the bounds taken from the data itself.
///
/// Scans once for the observed minimum and maximum, so no key can be out of
/// bounds. Still fails with [`SortError::InvalidKeyBounds`] if the observed
/// spread spans more bins than addressable memory.
pub fn counting_sort_in_place_auto<K: CountingKey>(data: &mut [K]) -> Result<()> {
    in_place_auto(data, false)
}

/// [`counting_sort_in_place_auto`], descending.
pub fn counting_sort_in_place_auto_desc<K: CountingKey>(data: &mut [K]) -> Result<()> {
    in_place_auto(data, true)
}

/// Stable counting sort, ascending, keyed by the payload's [`SortKey`].
///
/// Elements sharing a key keep their relative input order. The payload slice
/// is permuted in place after a histogram pass; the auxiliary state is the
/// histogram plus one index per element.
///
/// # Errors
///
/// As [`counting_sort_in_place`]: bad bounds or an out-of-bounds key fail
/// before any element moves.
pub fn counting_sort<T: SortKey>(data: &mut [T], min: T::Key, max: T::Key) -> Result<()> {
    stable_sort_by_key(data, min, max, T::sort_key, false)
}

/// Stable counting sort, descending, keyed by the payload's [`SortKey`].
///
/// The final arrangement mirrors the ascending one, so elements sharing a key
/// appear in reverse input order.
pub fn counting_sort_desc<T: SortKey>(data: &mut [T], min: T::Key, max: T::Key) -> Result<()> {
    stable_sort_by_key(data, min, max, T::sort_key, true)
}

/// Stable counting sort, ascending, with an external key extractor.
///
/// The extractor is called exactly once per element.
///
/// # Example
/// ```
/// use spansort::counting::counting_sort_by_key;
///
/// let mut words = vec!["sort", "by", "length", "now"];
/// counting_sort_by_key(&mut words, 0, 16, |word| word.len()).unwrap();
/// assert_eq!(words, ["by", "now", "sort", "length"]);
/// ```
pub fn counting_sort_by_key<T, K, F>(data: &mut [T], min: K, max: K, key: F) -> Result<()>
where
    K: CountingKey,
    F: Fn(&T) -> K,
{
    stable_sort_by_key(data, min, max, key, false)
}

/// [`counting_sort_by_key`], descending (mirrored arrangement).
pub fn counting_sort_by_key_desc<T, K, F>(data: &mut [T], min: K, max: K, key: F) -> Result<()>
where
    K: CountingKey,
    F: Fn(&T) -> K,
{
    stable_sort_by_key(data, min, max, key, true)
}

fn in_place<K: CountingKey>(data: &mut [K], min: K, max: K, descending: bool) -> Result<()> {
    let bounds = KeyBounds::new(min.widen(), max.widen())?;
    if data.is_empty() {
        return Ok(());
    }
    let mut counts = vec![0usize; bounds.span];
    for key in data.iter() {
        counts[bounds.bin(key.widen())?] += 1;
    }
    fill_from_bins(data, &counts, &bounds, descending);
    Ok(())
}

fn in_place_auto<K: CountingKey>(data: &mut [K], descending: bool) -> Result<()> {
    let Some((min, max)) = observed_bounds(data) else {
        return Ok(());
    };
    let bounds = KeyBounds::new(min.widen(), max.widen())?;
    let mut counts = vec![0usize; bounds.span];
    for key in data.iter() {
        // Observed bounds cover every key, no range check needed.
        counts[(key.widen() - bounds.min) as usize] += 1;
    }
    fill_from_bins(data, &counts, &bounds, descending);
    Ok(())
}

fn observed_bounds<K: CountingKey>(data: &[K]) -> Option<(K, K)> {
    let (&first, rest) = data.split_first()?;
    let mut min = first;
    let mut max = first;
    for &key in rest {
        if key < min {
            min = key;
        }
        if key > max {
            max = key;
        }
    }
    Some((min, max))
}

fn fill_from_bins<K: CountingKey>(
    data: &mut [K],
    counts: &[usize],
    bounds: &KeyBounds,
    descending: bool,
) {
    let mut out = 0usize;
    if descending {
        for (bin, &count) in counts.iter().enumerate().rev() {
            if count == 0 {
                continue;
            }
            let value = K::from_widened(bounds.min + bin as i128);
            data[out..out + count].fill(value);
            out += count;
        }
    } else {
        for (bin, &count) in counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let value = K::from_widened(bounds.min + bin as i128);
            data[out..out + count].fill(value);
            out += count;
        }
    }
}

fn stable_sort_by_key<T, K, F>(
    data: &mut [T],
    min: K,
    max: K,
    key: F,
    descending: bool,
) -> Result<()>
where
    K: CountingKey,
    F: Fn(&T) -> K,
{
    let bounds = KeyBounds::new(min.widen(), max.widen())?;
    if data.is_empty() {
        return Ok(());
    }

    // Histogram pass; bins are cached so the extractor runs once per element
    // and any key error surfaces before the buffer moves.
    let mut bins = Vec::with_capacity(data.len());
    let mut counts = vec![0usize; bounds.span];
    for item in data.iter() {
        let bin = bounds.bin(key(item).widen())?;
        counts[bin] += 1;
        bins.push(bin);
    }

    // Exclusive prefix sum: starting slot per bin.
    let mut sum = 0usize;
    for count in counts.iter_mut() {
        let start = sum;
        sum += *count;
        *count = start;
    }

    // Forward scan hands equal keys increasing slots, which is what makes the
    // sort stable. Descending mirrors the final index, reversing ties too.
    let len = data.len();
    let mut indices = vec![0usize; len];
    for (i, &bin) in bins.iter().enumerate() {
        let slot = counts[bin];
        counts[bin] += 1;
        let position = if descending { len - 1 - slot } else { slot };
        indices[position] = i;
    }

    apply_permutation(data, indices);
    Ok(())
}

// `indices[slot]` names the input index of the element that belongs at
// `slot`; cycles are walked with swaps so elements are never cloned.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current;
            current = next;
        }
        indices[current] = current;
    }
}
