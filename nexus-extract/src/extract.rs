//! The extraction contract and its single entry point.
//!
//! Every supported collection kind implements [`Extract`]. The impl *is* the
//! registration: picking a strategy for a concrete type happens at compile
//! time through ordinary trait resolution, so the hot built-in paths are
//! statically dispatched. Only [`DynLazy`](crate::DynLazy) goes through a
//! vtable.

use core::fmt;

use tracing::trace;

/// Outcome of a single extraction.
///
/// `Ok((item, remainder))` on success. The remainder has the same type as the
/// input, so it can be fed straight back into [`extract`].
pub type Extraction<T, C> = Result<(T, C), ExtractError>;

/// Reason an extraction produced no element.
///
/// `Empty` is the only reason callers may match on by name. The enum is
/// non-exhaustive so strategies can grow their own reasons later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The collection has no element to give.
    #[error("collection is empty")]
    Empty,
}

/// Which built-in algorithm a collection kind is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Head of an ordered sequence.
    List,
    /// Arbitrary key of a keyed collection.
    Map,
    /// Arbitrary member of a set.
    Set,
    /// Leading endpoint of an integer span.
    Range,
    /// First element of any iterator.
    Fallback,
}

impl Strategy {
    /// Lowercase name, used as a log field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::List => "list",
            Strategy::Map => "map",
            Strategy::Set => "set",
            Strategy::Range => "range",
            Strategy::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A collection that can give up one element at a time.
///
/// Implementations take `self` by value: the input's role ends at the call
/// and the returned remainder replaces it. Nothing reachable through another
/// handle (a cloned [`ConsList`](crate::ConsList), a borrowed slice) is ever
/// mutated.
///
/// Which element comes out is fixed for a given value, but for hashed
/// collections it follows storage order, so two equal maps built in a
/// different order may hand out different keys.
///
/// The trait is sealed. Sequences without a dedicated impl go through
/// [`Lazy`](crate::Lazy).
///
/// # Example
///
/// ```
/// use nexus_extract::{Extract, ExtractError};
///
/// let (head, rest) = vec![1, 2, 3].extract().unwrap();
/// assert_eq!(head, 1);
/// assert_eq!(rest, vec![2, 3]);
///
/// assert_eq!(Vec::<u8>::new().extract(), Err(ExtractError::Empty));
/// ```
pub trait Extract: Sized + sealed::Sealed {
    /// The element handed out. Maps hand out `(key, value)` pairs.
    type Item;

    /// Algorithm this kind is registered with.
    const STRATEGY: Strategy;

    /// Removes one element, returning it with the remainder.
    fn extract(self) -> Extraction<Self::Item, Self>;
}

/// Extracts one element from `collection`.
///
/// This is the uniform entry point over every [`Extract`] kind. It never
/// retries; an empty collection is reported as [`ExtractError::Empty`].
///
/// # Example
///
/// ```
/// use nexus_extract::{Span, extract};
///
/// let (first, rest) = extract(Span::new(3, 1)).unwrap();
/// assert_eq!(first, 3);
/// assert_eq!(rest, Span::new(2, 1));
///
/// let (_, rest) = extract(rest).unwrap();
/// let (last, rest) = extract(rest).unwrap();
/// assert_eq!(last, 1);
/// assert!(extract(rest).is_err());
/// ```
#[inline]
pub fn extract<C: Extract>(collection: C) -> Extraction<C::Item, C> {
    let result = collection.extract();
    trace!(
        strategy = C::STRATEGY.as_str(),
        outcome = if result.is_ok() { "item" } else { "empty" },
        "extract"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(ExtractError::Empty.to_string(), "collection is empty");
    }

    #[test]
    fn error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ExtractError::Empty);
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::List.to_string(), "list");
        assert_eq!(Strategy::Map.to_string(), "map");
        assert_eq!(Strategy::Set.to_string(), "set");
        assert_eq!(Strategy::Range.to_string(), "range");
        assert_eq!(Strategy::Fallback.to_string(), "fallback");
    }

    #[test]
    fn registered_strategies() {
        use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

        assert_eq!(<Vec<u8> as Extract>::STRATEGY, Strategy::List);
        assert_eq!(<VecDeque<u8> as Extract>::STRATEGY, Strategy::List);
        assert_eq!(<&[u8] as Extract>::STRATEGY, Strategy::List);
        assert_eq!(<HashMap<u8, u8> as Extract>::STRATEGY, Strategy::Map);
        assert_eq!(<BTreeMap<u8, u8> as Extract>::STRATEGY, Strategy::Map);
        assert_eq!(<HashSet<u8> as Extract>::STRATEGY, Strategy::Set);
        assert_eq!(<BTreeSet<u8> as Extract>::STRATEGY, Strategy::Set);
        assert_eq!(<crate::Span<u8> as Extract>::STRATEGY, Strategy::Range);
        assert_eq!(
            <crate::Lazy<core::ops::RangeFrom<u8>> as Extract>::STRATEGY,
            Strategy::Fallback
        );
    }

    #[test]
    fn dispatch_logs_under_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("trace")
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(extract(vec![7u8]), Ok((7, vec![])));
            assert_eq!(extract(Vec::<u8>::new()), Err(ExtractError::Empty));
        });
    }
}
