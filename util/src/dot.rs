use core::{iter::Sum, ops::Mul};
use itertools::Itertools;

/// Element-wise product reduction of two equal-length iterators.
pub trait Dot<Rhs> {
    type Output;

    fn dot(self, rhs: Rhs) -> Self::Output;
}

impl<'a, L, R, IL, IR> Dot<IR> for IL
where
    IL: IntoIterator<Item = &'a L>,
    IR: IntoIterator<Item = R>,
    L: 'a + Sum,
    for<'t> &'t L: Mul<R, Output = L>,
{
    type Output = L;

    fn dot(self, rhs: IR) -> Self::Output {
        L::sum(self.into_iter().zip_eq(rhs).map(|(lhs, rhs)| lhs * rhs))
    }
}

#[cfg(test)]
mod test {
    use crate::{dot::Dot, grid::Grid};
    use rand::{distributions::Uniform, thread_rng};

    #[test]
    fn dot_is_commutative() {
        let mut rng = thread_rng();
        for n in 1..8 {
            let a = Grid::<i64>::sample(n, n, Uniform::new(-128, 128), &mut rng).unwrap();
            let b = Grid::<i64>::sample(n, n, Uniform::new(-128, 128), &mut rng).unwrap();
            assert_eq!(
                a.iter().dot(b.iter().cloned()),
                b.iter().dot(a.iter().cloned()),
            );
        }
    }

    #[test]
    fn dot_against_zero_vanishes() {
        let mut rng = thread_rng();
        let a = Grid::<i64>::sample(3, 3, Uniform::new(-128, 128), &mut rng).unwrap();
        let zero = Grid::<i64>::zero(3, 3).unwrap();
        assert_eq!(a.iter().dot(zero.iter().cloned()), 0);
    }
}
