use crate::error::{Error, Result, Shape};
use core::{
    fmt::{self, Display, Formatter},
    iter::repeat_with,
    ops::{Index, IndexMut},
    slice,
};
use itertools::Itertools;
use num_traits::Zero;
use rand::{distributions::Distribution, RngCore};

/// Dense row-major 2d grid over a flat `Vec`. Every row has length `cols`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    pub fn zero(rows: usize, cols: usize) -> Result<Self>
    where
        T: Zero,
    {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        Self::checked_len(rows, cols)?;
        let data = (0..rows)
            .cartesian_product(0..cols)
            .map(|(i, j)| f(i, j))
            .collect();
        Ok(Self { cols, data })
    }

    pub fn sample(
        rows: usize,
        cols: usize,
        dist: impl Distribution<T>,
        rng: &mut impl RngCore,
    ) -> Result<Self> {
        let len = Self::checked_len(rows, cols)?;
        let data = repeat_with(|| dist.sample(rng)).take(len).collect();
        Ok(Self { cols, data })
    }

    fn checked_len(rows: usize, cols: usize) -> Result<usize> {
        match rows.checked_mul(cols) {
            Some(len) if len > 0 => Ok(len),
            _ => Err(Error::Allocation { rows, cols }),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        (self.rows(), self.cols)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    /// Row-major walk of the `(h, w)`-shaped sub-grid anchored at `(row, col)`.
    pub fn window(&self, row: usize, col: usize, (h, w): Shape) -> impl Iterator<Item = &T> {
        assert!(row + h <= self.rows() && col + w <= self.cols);
        self.row_iter()
            .skip(row)
            .take(h)
            .flat_map(move |r| r[col..col + w].iter())
    }

    /// Overwrites every cell with `f(row, col)`, in row-major order.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> T) {
        let cols = self.cols;
        self.data
            .iter_mut()
            .enumerate()
            .for_each(|(idx, cell)| *cell = f(idx / cols, idx % cols));
    }

    pub fn fill_random(&mut self, dist: impl Distribution<T>, rng: &mut impl RngCore) {
        self.data.iter_mut().for_each(|cell| *cell = dist.sample(rng));
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Bordered table of 5-wide zero-padded cells, a dash rule above, below, and
/// between rows.
impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(6 * self.cols + 1);
        write!(f, "{rule}")?;
        for row in self.row_iter() {
            writeln!(f)?;
            for cell in row {
                write!(f, "|{cell:05}")?;
            }
            write!(f, "|\n{rule}")?;
        }
        Ok(())
    }
}
