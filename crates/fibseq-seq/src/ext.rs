//! Method-call syntax for the sequence operations.
//!
//! `SeqOps` is an ordinary extension trait: it only applies where the caller
//! imports it, and it forwards to the free functions in [`crate::ops`].

use crate::error::SeqError;
use crate::ops;

/// Index-aware filter, map, and reduce as methods on slices.
///
/// # Example
/// ```
/// use fibseq_seq::SeqOps;
/// let arr = vec![1, 2, 10, -10, 19, -9, 18, 15];
/// assert_eq!(arr.reduce_seq(|a, b| a + b, None), Ok(46));
/// assert_eq!(arr.filter_seq(|n, _, _| *n < 0), [-10, -9]);
/// ```
pub trait SeqOps {
    type Item;

    /// See [`ops::filter_seq`].
    fn filter_seq<P>(&self, pred: P) -> Vec<Self::Item>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item, usize, &[Self::Item]) -> bool;

    /// See [`ops::map_seq`].
    fn map_seq<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&Self::Item, usize, &[Self::Item]) -> U;

    /// See [`ops::reduce_seq`].
    fn reduce_seq<F>(
        &self,
        f: F,
        initial: Option<Self::Item>,
    ) -> Result<Self::Item, SeqError>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, &Self::Item) -> Self::Item;
}

impl<T> SeqOps for [T] {
    type Item = T;

    #[inline]
    fn filter_seq<P>(&self, pred: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        ops::filter_seq(self, pred)
    }

    #[inline]
    fn map_seq<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> U,
    {
        ops::map_seq(self, f)
    }

    #[inline]
    fn reduce_seq<F>(&self, f: F, initial: Option<T>) -> Result<T, SeqError>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        ops::reduce_seq(self, f, initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_on_vec() {
        let arr: Vec<i32> = (1..=10).collect();
        assert_eq!(
            arr.map_seq(|n, _, _| n * 2),
            [2, 4, 6, 8, 10, 12, 14, 16, 18, 20]
        );
        assert_eq!(arr.filter_seq(|n, _, _| *n > 8), [9, 10]);
        assert_eq!(arr.reduce_seq(|a, b| a + b, None), Ok(55));
    }

    #[test]
    fn methods_on_array_and_slice() {
        let arr: [i32; 3] = [3, 1, 2];
        assert_eq!(arr.map_seq(|n, i, _| n * i32::try_from(i).unwrap()), [0, 1, 4]);
        assert_eq!(arr[1..].reduce_seq(|a, b| a.max(*b), None), Ok(2));
    }

    #[test]
    fn matches_free_functions() {
        let arr = [4, -1, 0, 9, -3];
        assert_eq!(
            arr.filter_seq(|n, _, _| *n >= 0),
            ops::filter_seq(&arr, |n, _, _| *n >= 0)
        );
        assert_eq!(
            arr.reduce_seq(|a, b| a - b, Some(0)),
            ops::reduce_seq(&arr, |a, b| a - b, Some(0))
        );
    }

    #[test]
    fn empty_reduce_errors() {
        let empty: Vec<u64> = Vec::new();
        assert_eq!(
            empty.reduce_seq(|a, b| a + b, None),
            Err(SeqError::EmptySequence)
        );
        assert_eq!(empty.reduce_seq(|a, b| a + b, Some(0)), Ok(0));
    }
}
