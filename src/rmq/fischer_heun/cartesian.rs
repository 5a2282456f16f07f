//! Cartesian numbers: a canonical encoding of the relative order of a small block.
//!
//! A block is scanned left to right while keeping the rightmost path of its Cartesian tree on a
//! stack. Each element first pops every strictly larger stack entry (one `0` bit per pop) and
//! is then pushed (one `1` bit). The bits are collected least significant first, so the highest
//! set bit is always the final push and blocks of different length never share a number.
//!
//! Equal elements do not pop each other, which makes the earlier of two equal elements the
//! smaller one. This matches the tie-break rule of every query, so two blocks with the same
//! number have the same answer for every query relative to their start.

/// Reusable encoder. The stack allocation is kept between blocks.
#[derive(Clone, Debug, Default)]
pub(crate) struct CartesianEncoder {
    stack: Vec<usize>,
}

impl CartesianEncoder {
    pub(crate) fn with_capacity(block_size: usize) -> Self {
        Self {
            stack: Vec::with_capacity(block_size),
        }
    }

    /// Returns the Cartesian number of `block`. Blocks of up to 16 elements fit into the 31 bits
    /// the encoding needs at most.
    pub(crate) fn encode<T: Ord>(&mut self, block: &[T]) -> u32 {
        debug_assert!(block.len() <= 16, "block too large for a 32 bit cartesian number");
        self.stack.clear();

        let mut number = 0u32;
        let mut bit = 0u32;
        for (i, elem) in block.iter().enumerate() {
            while let Some(&top) = self.stack.last() {
                if *elem < block[top] {
                    self.stack.pop();
                    bit += 1;
                } else {
                    break;
                }
            }
            self.stack.push(i);
            number |= 1 << bit;
            bit += 1;
        }

        number
    }
}

/// Returns the Cartesian number of `block`, the shape code shared by all blocks with the same
/// relative order. Blocks of more than 16 elements are not supported.
///
/// # Example
/// ```rust
/// use rmq_engine::rmq::fischer_heun::cartesian_number;
///
/// assert_eq!(cartesian_number(&[3, 1, 2]), cartesian_number(&[30, 10, 20]));
/// assert_ne!(cartesian_number(&[3, 1, 2]), cartesian_number(&[1, 3, 2]));
/// ```
#[must_use]
pub fn cartesian_number<T: Ord>(block: &[T]) -> u32 {
    CartesianEncoder::with_capacity(block.len()).encode(block)
}

/// Number of slots needed to index every Cartesian number of blocks with up to `block_size`
/// elements: `block_size` pushes and at most `block_size - 1` pops give `2 * block_size - 1`
/// bits.
pub(crate) fn number_space(block_size: usize) -> usize {
    1 << (2 * block_size - 1)
}
