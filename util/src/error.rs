use thiserror::Error;

/// Extent of a grid as `(rows, cols)`.
pub type Shape = (usize, usize);

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("cannot allocate a {rows}x{cols} grid")]
    Allocation { rows: usize, cols: usize },

    #[error("shape mismatch: {lhs:?} against {rhs:?}")]
    ShapeMismatch { lhs: Shape, rhs: Shape },
}

pub type Result<T> = core::result::Result<T, Error>;
