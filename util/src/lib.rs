mod dot;
mod error;
mod grid;

pub use dot::Dot;
pub use error::{Error, Result, Shape};
pub use grid::Grid;
