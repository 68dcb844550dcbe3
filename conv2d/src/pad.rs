use num_traits::Zero;
use util::{Grid, Result};

/// New grid `margin` zero rings larger, with `grid` copied to the interior
/// offset by `(margin, margin)`. The input is left unmodified.
pub fn pad<T>(grid: &Grid<T>, margin: usize) -> Result<Grid<T>>
where
    T: Clone + Zero,
{
    let (rows, cols) = grid.shape();
    Grid::from_fn(rows + 2 * margin, cols + 2 * margin, |r, c| {
        let interior =
            (margin..rows + margin).contains(&r) && (margin..cols + margin).contains(&c);
        if interior {
            grid[(r - margin, c - margin)].clone()
        } else {
            T::zero()
        }
    })
}

#[cfg(test)]
mod test {
    use crate::pad::pad;
    use rand::{distributions::Uniform, thread_rng};
    use util::Grid;

    #[test]
    fn adds_a_zero_ring() {
        let mut rng = thread_rng();
        let grid = Grid::<i64>::sample(4, 6, Uniform::new(1, 100), &mut rng).unwrap();
        let padded = pad(&grid, 1).unwrap();
        assert_eq!(padded.shape(), (6, 8));
        for i in 0..4 {
            for j in 0..6 {
                assert_eq!(padded[(i + 1, j + 1)], grid[(i, j)]);
            }
        }
        for (r, row) in padded.row_iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if r == 0 || r == 5 || c == 0 || c == 7 {
                    assert_eq!(*cell, 0);
                }
            }
        }
    }

    #[test]
    fn zero_margin_is_a_plain_copy() {
        let mut rng = thread_rng();
        let grid = Grid::<i64>::sample(3, 3, Uniform::new(-50, 50), &mut rng).unwrap();
        assert_eq!(pad(&grid, 0).unwrap(), grid);
    }
}
