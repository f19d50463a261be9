//! # Board geometry
//! Squares, board dimensions, knight jumps and the tour grid produced by a
//! successful search.

#[cfg(feature = "serde")]
mod codec;
pub mod square;
pub mod tour;

pub use square::{BoardSize, Square};
pub use tour::Tour;
