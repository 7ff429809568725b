//! Fallback strategy for any iterator.
//!
//! Anything that can yield a first element and keep going from the second
//! fits here, including infinite and lazily computed sequences. Nothing is
//! collected: the remainder is the same iterator, one step further along.
//!
//! The fallback is never picked implicitly. A type reaches it only when the
//! caller wraps it with [`lazy`], so a specialized strategy is never
//! shadowed.

use crate::extract::sealed::Sealed;
use crate::{Extract, ExtractError, Extraction, Strategy};

/// An iterator viewed as an extractable sequence.
///
/// # Example
///
/// ```
/// use nexus_extract::{extract, lazy};
///
/// let evens = lazy((0u64..).step_by(2));
/// let (a, evens) = extract(evens).unwrap();
/// let (b, _) = extract(evens).unwrap();
/// assert_eq!((a, b), (0, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Lazy<I> {
    iter: I,
}

/// A [`Lazy`] behind a trait object, for heterogeneous sources.
pub type DynLazy<'a, T> = Lazy<Box<dyn Iterator<Item = T> + 'a>>;

/// Wraps anything iterable for extraction.
#[inline]
pub fn lazy<I: IntoIterator>(iter: I) -> Lazy<I::IntoIter> {
    Lazy {
        iter: iter.into_iter(),
    }
}

impl<I: Iterator> Lazy<I> {
    /// Wraps an iterator.
    #[inline]
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the underlying iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<'a, T> Lazy<Box<dyn Iterator<Item = T> + 'a>> {
    /// Boxes `iter` so different iterator types share one [`DynLazy`] type.
    pub fn boxed<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Lazy {
            iter: Box::new(iter.into_iter()),
        }
    }
}

impl<I: Iterator> Sealed for Lazy<I> {}

impl<I: Iterator> Extract for Lazy<I> {
    type Item = I::Item;
    const STRATEGY: Strategy = Strategy::Fallback;

    #[inline]
    fn extract(mut self) -> Extraction<I::Item, Self> {
        let item = self.iter.next().ok_or(ExtractError::Empty)?;
        Ok((item, self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_sequence() {
        let (a, rest) = lazy(["x", "y"]).extract().unwrap();
        assert_eq!(a, "x");
        let (b, rest) = rest.extract().unwrap();
        assert_eq!(b, "y");
        assert!(matches!(rest.extract(), Err(ExtractError::Empty)));
    }

    #[test]
    fn infinite_sequence_is_not_materialized() {
        let mut seq = lazy(1u64..);
        for expected in 1..=1000 {
            let (n, rest) = seq.extract().unwrap();
            assert_eq!(n, expected);
            seq = rest;
        }
        assert_eq!(seq.into_inner().next(), Some(1001));
    }

    #[test]
    fn computed_on_demand() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let seq = lazy((0..).map(|n| {
            calls.set(calls.get() + 1);
            n * n
        }));

        let (first, rest) = seq.extract().unwrap();
        assert_eq!(first, 0);
        assert_eq!(calls.get(), 1);

        let (second, _) = rest.extract().unwrap();
        assert_eq!(second, 1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn boxed_sources_share_a_type() {
        let sources: Vec<DynLazy<'_, u32>> = vec![
            Lazy::boxed(vec![1, 2]),
            Lazy::boxed(std::iter::repeat(7).take(1)),
            Lazy::boxed(std::iter::empty()),
        ];

        let firsts: Vec<_> = sources
            .into_iter()
            .map(|source| source.extract().map(|(item, _)| item))
            .collect();
        assert_eq!(firsts, [Ok(1), Ok(7), Err(ExtractError::Empty)]);
    }

    #[test]
    fn clone_snapshots_position() {
        let seq = lazy(vec![1, 2, 3]);
        let snapshot = seq.clone();
        let (_, rest) = seq.extract().unwrap();
        assert_eq!(rest.into_inner().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(snapshot.into_inner().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
