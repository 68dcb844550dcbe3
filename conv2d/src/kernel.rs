use core::fmt::{self, Display, Formatter};
use derive_more::{Deref, Into};
use num_traits::Zero;
use rand::{distributions::Distribution, RngCore};
use util::{Error, Grid, Result};

/// Square convolution kernel. Applied as-is to each window, with no flipping.
#[derive(Clone, Debug, PartialEq, Eq, Deref, Into)]
pub struct Kernel<T>(Grid<T>);

impl<T> Kernel<T> {
    pub fn new(grid: Grid<T>) -> Result<Self> {
        let (rows, cols) = grid.shape();
        if rows != cols {
            return Err(Error::ShapeMismatch {
                lhs: (rows, cols),
                rhs: (rows, rows),
            });
        }
        Ok(Self(grid))
    }

    pub fn zero(size: usize) -> Result<Self>
    where
        T: Zero,
    {
        Grid::zero(size, size).and_then(Self::new)
    }

    pub fn from_fn(size: usize, f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        Grid::from_fn(size, size, f).and_then(Self::new)
    }

    pub fn sample(
        size: usize,
        dist: impl Distribution<T>,
        rng: &mut impl RngCore,
    ) -> Result<Self> {
        Grid::sample(size, size, dist, rng).and_then(Self::new)
    }

    pub fn size(&self) -> usize {
        self.0.rows()
    }

    /// Zero-ring width that makes a padded convolution size-preserving.
    pub fn margin(&self) -> usize {
        self.size() / 2
    }
}

impl<T: Display> Display for Kernel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
