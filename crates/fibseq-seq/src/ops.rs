//! Free-function filter, map, fold, and reduce.
//!
//! Callbacks receive `(element, index, source)` and are invoked exactly once
//! per element, in index order.

use crate::error::SeqError;

/// Keep the elements for which `pred(element, index, source)` holds.
///
/// # Example
/// ```
/// use fibseq_seq::filter_seq;
/// let below_one = filter_seq(&[3, 1, 2, -10, 14, 10, 50, 35, -19], |n, _, _| *n < 1);
/// assert_eq!(below_one, [-10, -19]);
/// ```
pub fn filter_seq<T, P>(source: &[T], mut pred: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let mut kept = Vec::new();
    for (i, item) in source.iter().enumerate() {
        if pred(item, i, source) {
            kept.push(item.clone());
        }
    }
    kept
}

/// Build `result[i] = f(source[i], i, source)` for every index.
///
/// # Example
/// ```
/// use fibseq_seq::map_seq;
/// let doubled = map_seq(&[1, 2, 3], |n, _, _| n * 2);
/// assert_eq!(doubled, [2, 4, 6]);
/// ```
pub fn map_seq<T, U, F>(source: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mut mapped = Vec::with_capacity(source.len());
    for (i, item) in source.iter().enumerate() {
        mapped.push(f(item, i, source));
    }
    mapped
}

/// Left fold with an accumulator of any type.
pub fn fold_seq<T, A, F>(source: &[T], init: A, mut f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = init;
    for item in source {
        acc = f(acc, item);
    }
    acc
}

/// Left fold whose accumulator has the element type.
///
/// With `Some(initial)` every element is folded into `initial`. With `None`
/// the first element seeds the accumulator and folding starts at index 1.
/// An empty `source` with no `initial` is an error.
///
/// The seed is tracked as an `Option`, so `0`, `""` or `false` are ordinary
/// accumulator values.
///
/// # Example
/// ```
/// use fibseq_seq::{reduce_seq, SeqError};
/// let sum = reduce_seq(&[1, 2, 10, -10, 19, -9, 18, 15], |a, b| a + b, None);
/// assert_eq!(sum, Ok(46));
/// assert_eq!(reduce_seq(&[] as &[i32], |a, b| a + b, None), Err(SeqError::EmptySequence));
/// ```
pub fn reduce_seq<T, F>(source: &[T], f: F, initial: Option<T>) -> Result<T, SeqError>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (seed, rest) = match initial {
        Some(init) => (init, source),
        None => {
            let (first, rest) = source.split_first().ok_or(SeqError::EmptySequence)?;
            (first.clone(), rest)
        }
    };
    Ok(fold_seq(rest, seed, f))
}
