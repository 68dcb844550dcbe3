use crate::kernel::Kernel;
use core::{iter::Sum, ops::Mul};
use util::{Dot, Error, Grid, Result};

/// Dot of two same-shaped grids: `Σ a[i][j] * b[i][j]`.
pub fn single_conv<T>(a: &Grid<T>, b: &Grid<T>) -> Result<T>
where
    T: Clone + Sum,
    for<'t> &'t T: Mul<T, Output = T>,
{
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(a.iter().dot(b.iter().cloned()))
}

/// Slides `kernel` across `padded` with stride 1, producing a
/// `(rows - k + 1) x (cols - k + 1)` output. The caller pads the input
/// beforehand, by `kernel.margin()` for a size-preserving result.
pub fn convolve<T>(kernel: &Kernel<T>, padded: &Grid<T>) -> Result<Grid<T>>
where
    T: Clone + Sum,
    for<'t> &'t T: Mul<T, Output = T>,
{
    let k = kernel.size();
    let (rows, cols) = padded.shape();
    if rows < k || cols < k {
        return Err(Error::ShapeMismatch {
            lhs: (rows, cols),
            rhs: (k, k),
        });
    }
    Grid::from_fn(rows - k + 1, cols - k + 1, |x, y| {
        padded.window(x, y, (k, k)).dot(kernel.iter().cloned())
    })
}
