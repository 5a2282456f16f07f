#![warn(missing_docs)]

//! This crate provides a family of range minimum query (RMQ) data structures over static arrays.
//! Given a fixed array of totally ordered elements, each structure answers "which index holds the
//! minimum value in `[low, high)`?" repeatedly. The data structures are static, meaning that they
//! cannot be modified after they have been created.
//!
//! # Data structures
//!  - [`PrecomputedRmq`]: answers every query in advance. O(n²) preprocessing, O(1) queries.
//!    Only suitable for small inputs.
//!  - [`SparseTableRmq`]: binary lifting over power-of-two windows. O(n log n) preprocessing,
//!    O(1) queries.
//!  - [`HybridRmq`]: block decomposition with a sparse table over block minima. O(n)
//!    preprocessing, O(log n) queries.
//!  - [`FischerHeunRmq`]: block decomposition where blocks with the same relative order share a
//!    precomputed solver. O(n) preprocessing, O(1) queries.
//!
//! All structures return the identical index for the same query: if several elements attain
//! the minimum, the smallest index among them is returned.
//!
//! # Errors
//! A query with `low >= high` or `high > len` returns [`RmqError::InvalidRange`]. Ranges are
//! never clamped.
//!
//! # Example
//! ```rust
//! use rmq_engine::{FischerHeunRmq, RangeMinimum};
//!
//! let rmq = FischerHeunRmq::new(vec![5, 2, 8, 1, 9, 3]);
//! assert_eq!(rmq.rmq(0, 3), Ok(1));
//! assert_eq!(rmq.rmq(3, 6), Ok(3));
//! assert_eq!(rmq.rmq_range(2..=3), Ok(3));
//! assert!(rmq.rmq(5, 5).is_err());
//! ```
//!
//! # Features
//!  - `serde`: implements `Serialize` and `Deserialize` for all structures.
//!  - `tracing`: emits debug spans and events describing the built structures during
//!    construction. Queries never log.

pub use crate::error::{Result, RmqError};
pub use rmq::fischer_heun::FischerHeunRmq;
pub use rmq::hybrid::HybridRmq;
pub use rmq::precomputed::PrecomputedRmq;
pub use rmq::sparse::SparseTableRmq;
pub use rmq::RangeMinimum;

pub mod error;
pub mod rmq;
