//! A linear-time RMQ that splits the data into blocks of logarithmic size, indexes the block
//! minima with a [`SparseTableRmq`] and scans the partial blocks at the edges of a query.

use std::mem::size_of;

use crate::error::Result;
use crate::rmq::sparse::SparseTableRmq;
use crate::rmq::{better_of, check_range, impl_range_minimum, scan_min};

/// A range minimum query data structure with O(n) preprocessing and O(log n) queries.
///
/// The data is split into blocks of `max(1, floor(log2 n))` elements. The minimum of each block
/// is indexed by a sparse table, which needs O((n / log n) log n) = O(n) space. A query is
/// answered by the sparse table for all blocks fully contained in the range, and by a linear
/// scan over the partial blocks at its edges. Use [`FischerHeunRmq`][crate::FischerHeunRmq] for
/// constant-time queries.
///
/// # Example
/// ```rust
/// use rmq_engine::HybridRmq;
///
/// let rmq = HybridRmq::new(vec![4, 10, 3, 11, 2, 12]);
/// assert_eq!(rmq.rmq(0, 2), Ok(0));
/// assert_eq!(rmq.rmq(0, 3), Ok(2));
/// assert_eq!(rmq.rmq(1, 6), Ok(4));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridRmq<T> {
    data: Vec<T>,
    block_size: usize,
    block_minima: SparseTableRmq<T>,
    // position of each block's minimum relative to the block start. Blocks have at most 64
    // elements, so a byte suffices.
    block_min_indices: Vec<u8>,
}

impl<T: Ord + Clone> HybridRmq<T> {
    /// Creates a new range minimum query data structure from the given data. Creation time and
    /// space overhead are O(n).
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        let block_size = super::block_size_for(data.len(), 1);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("hybrid_rmq", len = data.len(), block_size).entered();

        let mut block_minima = Vec::with_capacity(data.len().div_ceil(block_size));
        let mut block_min_indices = Vec::with_capacity(data.len().div_ceil(block_size));

        data.chunks(block_size).for_each(|block| {
            let min = scan_min(block, 0, block.len());

            // This is safe because the block size is at most floor(log2(usize::MAX))
            #[allow(clippy::cast_possible_truncation)]
            block_min_indices.push(min as u8);
            block_minima.push(block[min].clone());
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(blocks = block_min_indices.len(), "built block summary");

        Self {
            data,
            block_size,
            block_minima: SparseTableRmq::new(block_minima),
            block_min_indices,
        }
    }

    /// Alias of [`HybridRmq::new`].
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    /// Returns the index of the minimum element in the range `[low, high)` in O(log n) time.
    ///
    /// # Errors
    /// Returns [`RmqError::InvalidRange`][crate::RmqError::InvalidRange] if `low >= high` or
    /// `high > len`.
    pub fn rmq(&self, low: usize, high: usize) -> Result<usize> {
        check_range(low, high, self.data.len())?;

        // short ranges are scanned directly
        if high - low < self.block_size {
            return Ok(scan_min(&self.data, low, high));
        }

        let start_block = low.div_ceil(self.block_size);
        let end_block = high / self.block_size;

        // `low` is always a valid candidate, the prefix scan replaces it if there is a prefix
        let mut best = low;
        if low < start_block * self.block_size {
            best = scan_min(&self.data, low, start_block * self.block_size);
        }

        // if there are full blocks in the range, the summary finds the best one
        if start_block < end_block {
            let block = self.block_minima.query(start_block, end_block);
            let index = block * self.block_size + self.block_min_indices[block] as usize;
            best = better_of(&self.data, best, index);
        }

        if end_block * self.block_size < high {
            let suffix = scan_min(&self.data, end_block * self.block_size, high);
            best = better_of(&self.data, best, suffix);
        }

        Ok(best)
    }

    /// Returns the number of elements per block.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the number of blocks, including a trailing partial block.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.block_min_indices.len()
    }

    /// Returns the length of the RMQ data structure (i.e. the number of elements)
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the RMQ data structure is empty (i.e. contains no elements)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the amount of memory used by the RMQ data structure in bytes. Does not include
    /// space allocated but not in use (e.g. unused capacity of vectors).
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.data.len() * size_of::<T>()
            + self.block_minima.heap_size()
            + self.block_min_indices.len()
    }
}

impl_range_minimum!(HybridRmq, Ord + Clone);

#[cfg(test)]
mod tests;
