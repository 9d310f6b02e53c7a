pub mod math;

use std::fmt::Debug;

use num::Num;
use serde::{Deserialize, Serialize};

/// ZeroSpVec is a sparse vector that stores only non-zero elements.
/// It holds `indices` and `values`:
/// `indices` keeps the position of each element,
/// `values` keeps the element value.
///
/// Elements are guaranteed to be sorted by ascending index.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
        }
    }

    /// Capacity is reserved for non-zero elements only.
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
        }
    }

    /// Push a value at the next logical position.
    /// Zero values only extend the length.
    #[inline]
    pub fn push(&mut self, elem: N) {
        if elem != N::zero() {
            self.inds.push(self.len);
            self.vals.push(elem);
        }
        self.len += 1;
    }

    /// Push a non-zero element at an explicit index.
    /// `index` must be greater than every index already stored;
    /// the logical length grows to cover it.
    #[inline]
    pub fn raw_push(&mut self, index: usize, value: N) {
        debug_assert!(
            self.inds.last().map_or(true, |&last| last < index),
            "raw_push requires strictly ascending indices"
        );
        if value != N::zero() {
            self.inds.push(index);
            self.vals.push(value);
        }
        if index >= self.len {
            self.len = index + 1;
        }
    }

    /// Grow the logical length without storing anything.
    #[inline]
    pub fn add_dim(&mut self, dim: usize) {
        self.len += dim;
    }

    /// Value at `index`, zero for positions that are not stored.
    /// `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => Some(self.vals[pos]),
            Err(_) => Some(N::zero()),
        }
    }

    /// Iterate over stored (index, value) pairs in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    #[inline]
    pub fn raw_iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter_mut())
    }

    #[inline]
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut N> + '_ {
        self.vals.iter_mut()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn nnz(&self) -> usize {
        self.vals.len()
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn from(dense: Vec<N>) -> Self {
        let mut vec = ZeroSpVec::with_capacity(dense.len());
        for v in dense {
            vec.push(v);
        }
        vec.shrink_to_fit();
        vec
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("nnz", &self.nnz())
                .field("entries", &self.raw_iter().collect::<Vec<_>>())
                .finish()
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_zero_but_extends_len() {
        let mut v: ZeroSpVec<f64> = ZeroSpVec::new();
        v.push(0.0);
        v.push(2.5);
        v.push(0.0);
        assert_eq!(v.len(), 3);
        assert_eq!(v.nnz(), 1);
        assert_eq!(v.get(0), Some(0.0));
        assert_eq!(v.get(1), Some(2.5));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn raw_push_grows_len_to_cover_index() {
        let mut v: ZeroSpVec<f32> = ZeroSpVec::new();
        v.raw_push(2, 1.0);
        v.raw_push(7, 3.0);
        v.add_dim(2);
        assert_eq!(v.len(), 10);
        assert_eq!(v.raw_iter().map(|(i, _)| i).collect::<Vec<_>>(), vec![2, 7]);
        assert_eq!(v.get(7), Some(3.0));
        assert_eq!(v.get(9), Some(0.0));
    }

    #[test]
    fn from_dense_keeps_only_non_zero() {
        let v = ZeroSpVec::from(vec![0u32, 4, 0, 0, 9]);
        assert_eq!(v.len(), 5);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.raw_iter().map(|(i, x)| (i, *x)).collect::<Vec<_>>(), vec![(1, 4), (4, 9)]);
    }
}
