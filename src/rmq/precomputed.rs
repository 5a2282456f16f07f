//! Brute-force RMQ that stores the answer of every possible query.

use std::mem::size_of;

use crate::error::Result;
use crate::rmq::{check_range, impl_range_minimum};

/// This RMQ data structure pre-calculates all queries. Every range `[low, high)` gets one table
/// entry, so queries are a single lookup, but construction time and space are O(n²).
/// Only use it for small inputs; the [`FischerHeunRmq`][crate::FischerHeunRmq] uses it to solve
/// blocks of logarithmic size.
///
/// # Example
/// ```rust
/// use rmq_engine::PrecomputedRmq;
///
/// let rmq = PrecomputedRmq::new(vec![5, 2, 8, 1, 9, 3]);
/// assert_eq!(rmq.rmq(0, 3), Ok(1));
/// assert_eq!(rmq.rmq(2, 4), Ok(3));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecomputedRmq<T> {
    data: Vec<T>,

    // triangular table: row `low` holds the answers for high = low + 1 ..= n, stored as offsets
    // relative to `low`.
    results: Vec<u32>,
}

impl<T: Ord> PrecomputedRmq<T> {
    /// Create a new RMQ data structure for the given data by answering every query in advance.
    ///
    /// # Panics
    /// Panics if the input exceeds 2^32 elements, which would not fit into memory anyway.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        let len = data.len();
        assert!(
            u32::try_from(len.saturating_sub(1)).is_ok(),
            "input too large for precomputed rmq"
        );

        let mut results = Vec::with_capacity(len * (len + 1) / 2);

        // each row extends the answer for [low, high - 1) by the element at high - 1
        for low in 0..len {
            let mut best = low;
            results.push(0);
            for high in low + 2..=len {
                if data[high - 1] < data[best] {
                    best = high - 1;
                }
                // bounded by len, checked above
                #[allow(clippy::cast_possible_truncation)]
                results.push((best - low) as u32);
            }
        }

        Self { data, results }
    }

    /// Alias of [`PrecomputedRmq::new`].
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    /// Returns the index of the minimum element in `[low, high)` in constant time.
    ///
    /// # Errors
    /// Returns [`RmqError::InvalidRange`][crate::RmqError::InvalidRange] if `low >= high` or
    /// `high > len`.
    pub fn rmq(&self, low: usize, high: usize) -> Result<usize> {
        check_range(low, high, self.data.len())?;
        Ok(self.query(low, high))
    }

    /// Query without range validation.
    #[inline]
    pub(crate) fn query(&self, low: usize, high: usize) -> usize {
        low + self.results[self.row_offset(low) + (high - low - 1)] as usize
    }

    // start of row `low` in the triangular table: rows 0..low have len, len - 1, ... entries
    #[inline]
    fn row_offset(&self, low: usize) -> usize {
        let len = self.data.len();
        low * len - low * low.saturating_sub(1) / 2
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the structure contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the amount of memory used by this data structure in bytes. This does not include
    /// space allocated but not in use (e.g. unused capacity of vectors), nor heap memory owned by
    /// the elements themselves.
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.data.len() * size_of::<T>() + self.results.len() * size_of::<u32>()
    }
}

impl_range_minimum!(PrecomputedRmq, Ord);
