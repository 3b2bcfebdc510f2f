//! Conway's Game of Life on a torus with incrementally maintained neighbor counts.

pub mod cell;
pub mod engine;
pub mod error;
pub mod fill;
pub mod pos;

pub use cell::Cell;
pub use engine::{Grid, GridWindow};
pub use error::GridError;
pub use fill::{FillError, FillMode};
pub use pos::Pos2;
