//! Range minimum query data structures. These data structures calculate the index of the
//! minimum element in a half-open range `[low, high)` of a static array. Ties are always broken
//! toward the smallest index, so all structures return the identical index for the same query.
//!
//! The implementations trade preprocessing against query time:
//!  - [`PrecomputedRmq`][precomputed::PrecomputedRmq]: O(n²) table, O(1) queries.
//!  - [`SparseTableRmq`][sparse::SparseTableRmq]: O(n log n) table, O(1) queries.
//!  - [`HybridRmq`][hybrid::HybridRmq]: O(n) preprocessing, O(log n) queries.
//!  - [`FischerHeunRmq`][fischer_heun::FischerHeunRmq]: O(n) preprocessing, O(1) queries.

use std::ops::{Bound, RangeBounds};

use crate::error::{Result, RmqError};

/// Implements the [`RangeMinimum`] trait, `Deref` to the element slice, and the conversions from
/// vectors and iterators for a structure with inherent `new`, `rmq` and a `data` field.
macro_rules! impl_range_minimum {
    ($name:ident, $($bound:tt)+) => {
        impl<T: $($bound)+> $crate::rmq::RangeMinimum for $name<T> {
            type Item = T;

            fn rmq(&self, low: usize, high: usize) -> $crate::error::Result<usize> {
                $name::rmq(self, low, high)
            }

            fn elements(&self) -> &[T] {
                &self.data
            }
        }

        /// Implements Deref to delegate to the underlying data. This allows the user to use
        /// indexing syntax on the RMQ data structure to access the elements, as well as
        /// iterators, etc.
        impl<T: $($bound)+> std::ops::Deref for $name<T> {
            type Target = [T];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl<T: $($bound)+> From<Vec<T>> for $name<T> {
            fn from(data: Vec<T>) -> Self {
                Self::new(data)
            }
        }

        /// Creates a new range minimum query data structure from the given data.
        /// The iterator is consumed and the data is stored in a vector.
        impl<T: $($bound)+> FromIterator<T> for $name<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }
    };
}

pub(crate) use impl_range_minimum;

pub mod fischer_heun;
pub mod hybrid;
pub mod precomputed;
pub mod sparse;

/// A common trait for range minimum query data structures to allow generic implementations.
pub trait RangeMinimum {
    /// Element type of the underlying array.
    type Item: Ord;

    /// Returns the index of the minimum element in the range `[low, high)`. If several elements
    /// attain the minimum, the smallest index among them is returned.
    ///
    /// # Errors
    /// Returns [`RmqError::InvalidRange`] if `low >= high` or `high` exceeds the number of
    /// elements.
    fn rmq(&self, low: usize, high: usize) -> Result<usize>;

    /// Returns the elements the structure was built over.
    fn elements(&self) -> &[Self::Item];

    /// Returns the number of elements in the structure.
    fn len(&self) -> usize {
        self.elements().len()
    }

    /// Returns true if the structure contains no elements. Every query on an empty structure
    /// fails.
    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Convenience function for [`RangeMinimum::rmq`] for using range operators.
    /// Unlike slicing, bounds are not clamped: a range reaching past the end is an error.
    ///
    /// # Example
    /// ```rust
    /// use rmq_engine::{RangeMinimum, SparseTableRmq};
    ///
    /// let rmq = SparseTableRmq::new(vec![5, 4, 3, 2, 1]);
    /// assert_eq!(rmq.rmq_range(0..3), Ok(2));
    /// assert_eq!(rmq.rmq_range(0..=3), Ok(3));
    /// assert_eq!(rmq.rmq_range(..), Ok(4));
    /// assert!(rmq.rmq_range(2..9).is_err());
    /// ```
    ///
    /// # Errors
    /// Returns [`RmqError::InvalidRange`] if the range is empty or out of bounds.
    fn rmq_range<R: RangeBounds<usize>>(&self, range: R) -> Result<usize> {
        let (low, high) = half_open(&range, self.len());
        self.rmq(low, high)
    }

    /// Returns a reference to the minimum element in `[low, high)`.
    ///
    /// # Errors
    /// Returns [`RmqError::InvalidRange`] if the range is empty or out of bounds.
    fn min_value(&self, low: usize, high: usize) -> Result<&Self::Item> {
        let index = self.rmq(low, high)?;
        Ok(&self.elements()[index])
    }
}

/// Returns whichever of the indices `a` and `b` holds the smaller element, preferring the smaller
/// index if both elements are equal.
#[inline]
pub(crate) fn better_of<T: Ord>(data: &[T], a: usize, b: usize) -> usize {
    match data[a].cmp(&data[b]) {
        std::cmp::Ordering::Less => a,
        std::cmp::Ordering::Greater => b,
        std::cmp::Ordering::Equal => a.min(b),
    }
}

/// Linear scan over `[low, high)`. Only strictly smaller elements replace the current minimum,
/// which keeps the leftmost one on ties. The range must be non-empty.
#[inline]
pub(crate) fn scan_min<T: Ord>(data: &[T], low: usize, high: usize) -> usize {
    debug_assert!(low < high);
    let mut best = low;
    for i in low + 1..high {
        if data[i] < data[best] {
            best = i;
        }
    }
    best
}

/// Validates a query range against the number of elements.
#[inline]
pub(crate) fn check_range(low: usize, high: usize, len: usize) -> Result<()> {
    if low < high && high <= len {
        Ok(())
    } else {
        Err(RmqError::InvalidRange { low, high, len })
    }
}

/// Converts arbitrary range bounds into a half-open `[low, high)` pair without clamping.
fn half_open<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let low = match range.start_bound() {
        Bound::Included(i) => *i,
        Bound::Excluded(i) => i.saturating_add(1),
        Bound::Unbounded => 0,
    };

    let high = match range.end_bound() {
        Bound::Included(i) => i.saturating_add(1),
        Bound::Excluded(i) => *i,
        Bound::Unbounded => len,
    };

    (low, high)
}

/// Block size `max(1, floor(log2 n) / divisor)` used by the block-decomposed structures.
#[inline]
pub(crate) fn block_size_for(len: usize, divisor: u32) -> usize {
    (len.checked_ilog2().unwrap_or(0) / divisor).max(1) as usize
}
