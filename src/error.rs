//! Error types for the grid engine.

use thiserror::Error;

/// Errors reported by [`Grid`](crate::Grid) operations.
///
/// Every failing operation is rejected before anything is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Construction or resize asked for a side shorter than [`MIN_SIDE`](crate::engine::MIN_SIDE),
    /// or for more cells than fit in memory.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A cell accessor was given a position outside the grid.
    #[error("cell index {index} out of range for grid of {len} cells")]
    OutOfRange {
        /// The offending linear index.
        index: usize,
        /// Number of cells in the grid.
        len: usize,
    },
}
