//! This module contains the implementation of the sparse table RMQ data structure. It pre-computes
//! the minimum element in intervals of length 2^k for all k and uses this information to answer
//! queries in constant time. This uses O(n log n) space overhead.

use std::mem::size_of;

use crate::error::Result;
use crate::rmq::{better_of, check_range, impl_range_minimum};

/// This RMQ data structure pre-calculates some queries (binary lifting).
/// The minimum element in intervals of length 2^k for all k is precalculated and each query is
/// turned into two overlapping sub-queries. This leads to constant-time queries and
/// O(n log n) space overhead. The pre-calculation is done in O(n log n) time.
///
/// Both block-based structures use it over the sequence of their block minima.
/// It does not support input sizes exceeding 2^32 elements.
///
/// # Example
/// ```rust
/// use rmq_engine::SparseTableRmq;
///
/// let rmq = SparseTableRmq::new(vec![5, 2, 8, 1, 9, 3]);
/// assert_eq!(rmq.rmq(0, 3), Ok(1));
/// assert_eq!(rmq.rmq(3, 6), Ok(3));
/// assert_eq!(rmq.rmq(0, 6), Ok(3));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseTableRmq<T> {
    data: Vec<T>,

    // All levels are stored back to back in one array. Level k holds n - 2^k + 1 entries, the
    // i'th of which is the offset of the minimum of [i, i + 2^k) relative to i. Offsets are below
    // 2^k, so u32 suffices for every input we accept.
    results: Vec<u32>,

    // start of each level in `results`
    level_offsets: Vec<usize>,
}

impl<T: Ord> SparseTableRmq<T> {
    /// Create a new RMQ data structure for the given data. This uses O(n log n) space and
    /// precalculates the minimum element in intervals 2^k for all k for all elements.
    ///
    /// # Panics
    /// Panics if the input exceeds 2^32 elements.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        let len = data.len();
        assert!(
            u32::try_from(len.saturating_sub(1)).is_ok(),
            "input too large for sparse table rmq"
        );

        let levels = len.checked_ilog2().map_or(0, |log| log as usize + 1);
        let mut level_offsets = Vec::with_capacity(levels);
        let mut results = Vec::with_capacity(len * levels);

        // level 0: every element is the minimum of its own singleton window
        if levels > 0 {
            level_offsets.push(0);
            results.resize(len, 0u32);
        }

        // calculate the rest of the levels using dynamic programming: a window of length 2^k is
        // the union of the two halves of length 2^(k-1) stored in the previous level.
        for k in 1..levels {
            let half = 1usize << (k - 1);
            let prev = level_offsets[k - 1];
            let width = len - (1 << k) + 1;
            level_offsets.push(results.len());

            for i in 0..width {
                let left = i + results[prev + i] as usize;
                let right = i + half + results[prev + i + half] as usize;

                // window offsets are below 2^k <= len, checked above
                #[allow(clippy::cast_possible_truncation)]
                results.push((better_of(&data, left, right) - i) as u32);
            }
        }

        Self {
            data,
            results,
            level_offsets,
        }
    }

    /// Alias of [`SparseTableRmq::new`].
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    /// Calculates the index of the minimum element in the range `[low, high)`. This has a
    /// constant query time.
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
        let k = (high - low).ilog2() as usize;
        let level = self.level_offsets[k];
        let right_start = high - (1 << k);

        // the two windows overlap, but together cover exactly [low, high)
        better_of(
            &self.data,
            low + self.results[level + low] as usize,
            right_start + self.results[level + right_start] as usize,
        )
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
    /// space allocated but not in use (e.g. unused capacity of vectors).
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.data.len() * size_of::<T>()
            + self.results.len() * size_of::<u32>()
            + self.level_offsets.len() * size_of::<usize>()
    }
}

impl_range_minimum!(SparseTableRmq, Ord);
