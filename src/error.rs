//! Error type shared by all range minimum query structures.

/// Errors returned by range minimum queries.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RmqError {
    /// The queried range is empty, reversed, or reaches past the end of the array.
    #[error("invalid range [{low}, {high}) for {len} elements")]
    InvalidRange {
        /// inclusive lower bound of the query
        low: usize,
        /// exclusive upper bound of the query
        high: usize,
        /// number of elements in the queried structure
        len: usize,
    },
}

/// Result type of all range minimum queries.
pub type Result<T> = std::result::Result<T, RmqError>;
