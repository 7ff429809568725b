//! Map strategy: some existing key comes out with its value.
//!
//! The key is whichever one the storage yields first. It is not the
//! smallest, nor the oldest, and two equal hash maps built in a different
//! order may give different keys. `BTreeMap` happens to give its smallest
//! key; do not depend on that.
//!
//! Hashed maps probe the first key and remove that entry in place, so no
//! call rebuilds the table. The probe walks buckets until it finds an
//! occupied one, which is cheap on a dense table and degrades on a large,
//! mostly-emptied one. `benches/map_strategies.rs` compares this against
//! collecting the key list and against rebuilding the remainder.
//!
//! The hashed impls need `K: Clone`. The probed key is cloned once per call
//! to look the entry up again, so a `String` key costs an allocation. Keys
//! that cannot be cloned have two routes: a `BTreeMap`, which has no `Clone`
//! bound, or [`lazy`](crate::lazy) over the map's `into_iter()`, which hands
//! out owned entries while the remainder stays an iterator.
//!
//! ```
//! use std::collections::HashMap;
//! use nexus_extract::{extract, lazy};
//!
//! #[derive(PartialEq, Eq, Hash)]
//! struct Ticket(u32);
//!
//! let map: HashMap<Ticket, &str> = [(Ticket(1), "one")].into_iter().collect();
//! let ((ticket, name), rest) = extract(lazy(map)).unwrap();
//! assert_eq!((ticket.0, name), (1, "one"));
//! assert!(extract(rest).is_err());
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::extract::sealed::Sealed;
use crate::{Extract, ExtractError, Extraction, Strategy};

impl<K, V, S> Sealed for HashMap<K, V, S> {}

impl<K, V, S> Extract for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = (K, V);
    const STRATEGY: Strategy = Strategy::Map;

    fn extract(mut self) -> Extraction<(K, V), Self> {
        let key = self.keys().next().cloned().ok_or(ExtractError::Empty)?;
        let entry = self.remove_entry(&key).ok_or(ExtractError::Empty)?;
        Ok((entry, self))
    }
}

impl<K, V> Sealed for BTreeMap<K, V> {}

impl<K: Ord, V> Extract for BTreeMap<K, V> {
    type Item = (K, V);
    const STRATEGY: Strategy = Strategy::Map;

    #[inline]
    fn extract(mut self) -> Extraction<(K, V), Self> {
        let entry = self.pop_first().ok_or(ExtractError::Empty)?;
        Ok((entry, self))
    }
}

// =============================================================================
// hashbrown::HashMap
// =============================================================================

#[cfg(feature = "hashbrown")]
impl<K, V, S> Sealed for hashbrown::HashMap<K, V, S> {}

#[cfg(feature = "hashbrown")]
impl<K, V, S> Extract for hashbrown::HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = (K, V);
    const STRATEGY: Strategy = Strategy::Map;

    fn extract(mut self) -> Extraction<(K, V), Self> {
        let key = self.keys().next().cloned().ok_or(ExtractError::Empty)?;
        let entry = self.remove_entry(&key).ok_or(ExtractError::Empty)?;
        Ok((entry, self))
    }
}

// =============================================================================
// slab::Slab
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Sealed for slab::Slab<T> {}

/// A slab is a map from its `usize` keys to values. The first occupied slot
/// comes out as `(key, value)`; every other key stays valid.
#[cfg(feature = "slab")]
impl<T> Extract for slab::Slab<T> {
    type Item = (usize, T);
    const STRATEGY: Strategy = Strategy::Map;

    fn extract(mut self) -> Extraction<(usize, T), Self> {
        let key = self
            .iter()
            .next()
            .map(|(key, _)| key)
            .ok_or(ExtractError::Empty)?;
        let value = self.try_remove(key).ok_or(ExtractError::Empty)?;
        Ok(((key, value), self))
    }
}
