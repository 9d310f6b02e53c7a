use std::{cmp::Ordering, ops::{AddAssign, DivAssign}};

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy + AddAssign,
{
    /// Dot product of two sparse vectors (merge join over the sorted indices)
    ///
    /// # Arguments
    /// * `other` - other vector
    ///
    /// # Returns
    /// * `R` - result of the dot product
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        if self.nnz() == 0 || other.nnz() == 0 {
            return result;
        }

        let mut a_it = self.raw_iter();
        let mut b_it = other.raw_iter();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    result += (*va).into() * (*vb).into();
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => a_next = a_it.next(),
                Ordering::Greater => b_next = b_it.next(),
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for (_, v) in self.raw_iter() {
            let val: R = (*v).into();
            result += val * val;
        }
        result
    }
}

impl<N> ZeroSpVec<N>
where
    N: Float + AddAssign + DivAssign,
{
    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> N {
        let mut sum = N::zero();
        for (_, v) in self.raw_iter() {
            sum += *v * *v;
        }
        sum.sqrt()
    }

    /// Divide every element by the Euclidean norm in place.
    /// A zero vector is left untouched.
    ///
    /// # Returns
    /// * `N` - the norm before normalization
    #[inline]
    pub fn l2_normalize(&mut self) -> N {
        let norm = self.norm();
        if norm > N::zero() {
            for v in self.values_mut() {
                *v /= norm;
            }
        }
        norm
    }
}
