//! The Fischer-Heun range minimum query data structure, with linear preprocessing and constant
//! query time.
//!
//! Like the [hybrid structure][crate::HybridRmq], the data is split into blocks whose minima are
//! indexed by a sparse table. The partial blocks at the edges of a query are not scanned but
//! answered by a [`PrecomputedRmq`] over the block. Since a block of `b` elements has at most
//! 4^b different [Cartesian numbers](cartesian_number), and blocks with the same number share
//! their solver, choosing `b = log2(n) / 4` keeps the total cost of all solvers at O(sqrt(n) log² n).

use std::mem::size_of;

use crate::error::Result;
use crate::rmq::precomputed::PrecomputedRmq;
use crate::rmq::sparse::SparseTableRmq;
use crate::rmq::{better_of, check_range, impl_range_minimum, scan_min};

use self::cartesian::{number_space, CartesianEncoder};

mod cartesian;

pub use self::cartesian::cartesian_number;

/// Marks a Cartesian number that has no solver yet.
const NO_SOLVER: u32 = u32::MAX;

/// Per-block metadata. The block start is implied by its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Block {
    /// position of the block minimum relative to the block start
    min_offset: u8,
    /// Cartesian number of the block
    shape: u32,
    /// index of the shared solver for `shape`
    solver: u32,
}

/// A range minimum query data structure with O(n) preprocessing and O(1) queries. This is the
/// structure to prefer for large inputs.
///
/// # Example
/// ```rust
/// use rmq_engine::FischerHeunRmq;
///
/// let data = vec![4, 10, 3, 11, 2, 12];
/// let rmq = FischerHeunRmq::new(data);
///
/// assert_eq!(rmq.rmq(0, 1), Ok(0));
/// assert_eq!(rmq.rmq(0, 3), Ok(2));
/// assert_eq!(rmq.rmq(0, 6), Ok(4));
/// assert!(rmq.rmq(3, 3).is_err());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FischerHeunRmq<T> {
    data: Vec<T>,
    block_size: usize,
    block_minima: SparseTableRmq<T>,
    blocks: Vec<Block>,
    solvers: Vec<PrecomputedRmq<T>>,
}

impl<T: Ord + Clone> FischerHeunRmq<T> {
    /// Creates a new range minimum query data structure from the given data. Creation time and
    /// space overhead are O(n). All solvers are built here, queries never modify the structure.
    ///
    /// # Panics
    /// Panics if two blocks of different length end up with the same Cartesian number, which
    /// would be a bug in the encoding.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        let block_size = super::block_size_for(data.len(), 4);

        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("fischer_heun_rmq", len = data.len(), block_size).entered();

        let block_count = data.len().div_ceil(block_size);
        let mut block_minima = Vec::with_capacity(block_count);
        let mut blocks = Vec::with_capacity(block_count);
        let mut solvers: Vec<PrecomputedRmq<T>> = Vec::new();

        // maps Cartesian numbers to solver indices. Only needed during construction.
        let mut solver_slots = vec![NO_SOLVER; number_space(block_size)];
        let mut encoder = CartesianEncoder::with_capacity(block_size);

        data.chunks(block_size).for_each(|block| {
            let min = scan_min(block, 0, block.len());
            let shape = encoder.encode(block);

            let slot = &mut solver_slots[shape as usize];
            if *slot == NO_SOLVER {
                // at most number_space(block_size) <= 2^31 solvers exist
                #[allow(clippy::cast_possible_truncation)]
                let index = solvers.len() as u32;
                *slot = index;
                solvers.push(PrecomputedRmq::new(block.to_vec()));
            } else {
                assert_eq!(
                    solvers[*slot as usize].len(),
                    block.len(),
                    "cartesian number {shape:#b} shared by blocks of different length"
                );
            }

            // block size is at most 16
            #[allow(clippy::cast_possible_truncation)]
            let min_offset = min as u8;
            blocks.push(Block {
                min_offset,
                shape,
                solver: *slot,
            });
            block_minima.push(block[min].clone());
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(
            blocks = blocks.len(),
            distinct_shapes = solvers.len(),
            "built block solvers"
        );

        Self {
            data,
            block_size,
            block_minima: SparseTableRmq::new(block_minima),
            blocks,
            solvers,
        }
    }

    /// Alias of [`FischerHeunRmq::new`].
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    /// Returns the index of the minimum element in the range `[low, high)` in O(1) time.
    /// Ranges shorter than one block are scanned, every other range is answered by at most three
    /// constant-time lookups.
    ///
    /// # Errors
    /// Returns [`RmqError::InvalidRange`][crate::RmqError::InvalidRange] if `low >= high` or
    /// `high > len`.
    pub fn rmq(&self, low: usize, high: usize) -> Result<usize> {
        check_range(low, high, self.data.len())?;

        if high - low < self.block_size {
            return Ok(scan_min(&self.data, low, high));
        }

        let start_block = low.div_ceil(self.block_size);
        let end_block = high / self.block_size;

        let mut best = low;

        // the left remainder is the suffix of the block containing `low`
        if low % self.block_size != 0 {
            let block = low / self.block_size;
            let block_start = block * self.block_size;
            let solver = self.solver(block);
            best = block_start + solver.query(low - block_start, solver.len());
        }

        if start_block < end_block {
            let block = self.block_minima.query(start_block, end_block);
            let index = block * self.block_size + self.blocks[block].min_offset as usize;
            best = better_of(&self.data, best, index);
        }

        // the right remainder is the prefix of the block containing `high - 1`
        if high % self.block_size != 0 {
            let block_start = end_block * self.block_size;
            let solver = self.solver(end_block);
            debug_assert!(high - block_start <= solver.len());
            let index = block_start + solver.query(0, high - block_start);
            best = better_of(&self.data, best, index);
        }

        Ok(best)
    }

    fn solver(&self, block: usize) -> &PrecomputedRmq<T> {
        &self.solvers[self.blocks[block].solver as usize]
    }

    /// Returns the number of elements per block.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the number of blocks, including a trailing partial block.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of distinct block shapes, i.e. the number of block solvers built.
    #[must_use]
    pub fn distinct_shapes(&self) -> usize {
        self.solvers.len()
    }

    /// Returns the Cartesian number of the given block, or `None` if the block does not exist.
    #[must_use]
    pub fn shape_code(&self, block: usize) -> Option<u32> {
        self.blocks.get(block).map(|block| block.shape)
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
            + self.blocks.len() * size_of::<Block>()
            + self.solvers.len() * size_of::<PrecomputedRmq<T>>()
            + self
                .solvers
                .iter()
                .map(PrecomputedRmq::heap_size)
                .sum::<usize>()
    }
}

impl_range_minimum!(FischerHeunRmq, Ord + Clone);
