//! Set strategy: whichever member iteration yields first comes out.
//!
//! Same caveat as maps: the member depends on storage order, not on value.
//!
//! The hashed impls need `T: Clone`: the probed member is cloned once per
//! call to take it back out. Members that cannot be cloned go through a
//! `BTreeSet` or through [`lazy`](crate::lazy) over the set's `into_iter()`.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::extract::sealed::Sealed;
use crate::{Extract, ExtractError, Extraction, Strategy};

impl<T, S> Sealed for HashSet<T, S> {}

impl<T, S> Extract for HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = T;
    const STRATEGY: Strategy = Strategy::Set;

    fn extract(mut self) -> Extraction<T, Self> {
        let probe = self.iter().next().cloned().ok_or(ExtractError::Empty)?;
        let item = self.take(&probe).ok_or(ExtractError::Empty)?;
        Ok((item, self))
    }
}

impl<T> Sealed for BTreeSet<T> {}

impl<T: Ord> Extract for BTreeSet<T> {
    type Item = T;
    const STRATEGY: Strategy = Strategy::Set;

    #[inline]
    fn extract(mut self) -> Extraction<T, Self> {
        let item = self.pop_first().ok_or(ExtractError::Empty)?;
        Ok((item, self))
    }
}

#[cfg(feature = "hashbrown")]
impl<T, S> Sealed for hashbrown::HashSet<T, S> {}

#[cfg(feature = "hashbrown")]
impl<T, S> Extract for hashbrown::HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = T;
    const STRATEGY: Strategy = Strategy::Set;

    fn extract(mut self) -> Extraction<T, Self> {
        let probe = self.iter().next().cloned().ok_or(ExtractError::Empty)?;
        let item = self.take(&probe).ok_or(ExtractError::Empty)?;
        Ok((item, self))
    }
}
