//! Range strategy: the leading endpoint of an inclusive integer span.
//!
//! A [`Span`] counts from `first` toward `last`, upward or downward. Each
//! extraction hands out `first` and moves it one step toward `last`. Once
//! `first == last` the last element comes out and the remainder is
//! [`Span::Empty`]. There is no zero-length `Inclusive` span, so the empty
//! state can never be confused with a real one.
//!
//! ```text
//! Inclusive { first: 3, last: 1 }  ->  3, Inclusive { first: 2, last: 1 }
//! Inclusive { first: 2, last: 1 }  ->  2, Inclusive { first: 1, last: 1 }
//! Inclusive { first: 1, last: 1 }  ->  1, Empty
//! Empty                            ->  Err(Empty)
//! ```

use core::cmp::Ordering;
use core::ops::RangeInclusive;

use crate::extract::sealed::Sealed;
use crate::{Extract, ExtractError, Extraction, Strategy};

/// Integer-like bound that can move one unit in either direction.
///
/// [`Span`] only steps toward the other bound, so neither method is ever
/// called at the type's limits.
pub trait Step: Copy + Ord {
    /// Returns `self + 1`.
    fn forward(self) -> Self;

    /// Returns `self - 1`.
    fn backward(self) -> Self;
}

macro_rules! impl_step {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Step for $ty {
                #[inline]
                fn forward(self) -> Self {
                    self + 1
                }

                #[inline]
                fn backward(self) -> Self {
                    self - 1
                }
            }
        )*
    };
}

impl_step!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Which way a span counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `first <= last`.
    Ascending,
    /// `first > last`.
    Descending,
}

/// An inclusive integer span, or the empty sentinel.
///
/// # Example
///
/// ```
/// use nexus_extract::{Span, extract};
///
/// let (n, rest) = extract(Span::single(42)).unwrap();
/// assert_eq!(n, 42);
/// assert_eq!(rest, Span::Empty);
/// assert!(extract(rest).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span<T> {
    /// Every value from `first` to `last`, both included.
    Inclusive {
        /// Next value to come out.
        first: T,
        /// Final value to come out.
        last: T,
    },
    /// No values left.
    Empty,
}

impl<T: Step> Span<T> {
    /// Creates a span from `first` to `last`, counting down if
    /// `first > last`.
    #[inline]
    pub const fn new(first: T, last: T) -> Self {
        Span::Inclusive { first, last }
    }

    /// Creates a span holding exactly `value`.
    #[inline]
    pub const fn single(value: T) -> Self {
        Span::Inclusive {
            first: value,
            last: value,
        }
    }

    /// Returns the next value to come out.
    #[inline]
    pub fn first(&self) -> Option<T> {
        match *self {
            Span::Inclusive { first, .. } => Some(first),
            Span::Empty => None,
        }
    }

    /// Returns the final value to come out.
    #[inline]
    pub fn last(&self) -> Option<T> {
        match *self {
            Span::Inclusive { last, .. } => Some(last),
            Span::Empty => None,
        }
    }

    /// Returns `true` for the empty sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Span::Empty)
    }

    /// Returns the counting direction. A single-value span is ascending.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Span::Inclusive { first, last } if first > last => Some(Direction::Descending),
            Span::Inclusive { .. } => Some(Direction::Ascending),
            Span::Empty => None,
        }
    }

    /// Returns `true` if `value` lies between the bounds.
    pub fn contains(&self, value: T) -> bool {
        match *self {
            Span::Inclusive { first, last } => {
                let (lo, hi) = if first <= last { (first, last) } else { (last, first) };
                lo <= value && value <= hi
            }
            Span::Empty => false,
        }
    }
}

/// std ranges only count upward, so an inverted or exhausted range maps to
/// [`Span::Empty`] rather than to a descending span.
impl<T: Step> From<RangeInclusive<T>> for Span<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        if range.is_empty() {
            return Span::Empty;
        }
        let (first, last) = range.into_inner();
        Span::Inclusive { first, last }
    }
}

impl<T: Step> Sealed for Span<T> {}

impl<T: Step> Extract for Span<T> {
    type Item = T;
    const STRATEGY: Strategy = Strategy::Range;

    #[inline]
    fn extract(self) -> Extraction<T, Self> {
        let Span::Inclusive { first, last } = self else {
            return Err(ExtractError::Empty);
        };

        let rest = match first.cmp(&last) {
            Ordering::Equal => Span::Empty,
            Ordering::Less => Span::Inclusive {
                first: first.forward(),
                last,
            },
            Ordering::Greater => Span::Inclusive {
                first: first.backward(),
                last,
            },
        };

        Ok((first, rest))
    }
}
