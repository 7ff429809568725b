//! Sequence strategy: the head comes out, the tail is the remainder.
//!
//! | Kind | Cost | Notes |
//! |------|------|-------|
//! | [`ConsList<T>`] | O(1) | Needs `T: Clone`; clones the head only if another handle shares it |
//! | `VecDeque<T>` | O(1) | `pop_front` |
//! | `&[T]` | O(1) | Offset view, hands out `&T` |
//! | `&str` | O(1) | Hands out the first `char` |
//! | `Vec<T>` | O(n) | Shifts every remaining element |
//!
//! Prefer anything but `Vec` when extracting repeatedly.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::extract::sealed::Sealed;
use crate::{Extract, ExtractError, Extraction, Strategy};

// =============================================================================
// ConsList - persistent singly-linked list
// =============================================================================

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Arc<Node<T>>>;

/// A persistent singly-linked list.
///
/// Cloning is O(1) and shares every node. Extraction is O(1): when the head
/// node is owned by this handle alone, its value is moved out; when another
/// handle still points at it, the value is cloned and the shared tail is
/// reused, leaving the other handle untouched.
///
/// [`Extract`] is only implemented for `ConsList<T>` where `T: Clone`, even
/// for a list no other handle shares, because whether the head is shared is
/// only known at run time. Build a `VecDeque` or wrap an iterator with
/// [`lazy`](crate::lazy) for element types that cannot be cloned.
///
/// ```compile_fail
/// use nexus_extract::{ConsList, extract};
///
/// struct Handle;
///
/// let list = ConsList::new().cons(Handle);
/// let _ = extract(list);
/// ```
///
/// # Example
///
/// ```
/// use nexus_extract::{ConsList, extract};
///
/// let list: ConsList<u32> = [1, 2, 3].into_iter().collect();
/// let snapshot = list.clone();
///
/// let (head, rest) = extract(list).unwrap();
/// assert_eq!(head, 1);
/// assert_eq!(rest.iter().copied().collect::<Vec<_>>(), [2, 3]);
///
/// // The snapshot still sees all three.
/// assert_eq!(snapshot.len(), 3);
/// ```
pub struct ConsList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> ConsList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns a new list with `value` in front of `self`.
    pub fn cons(mut self, value: T) -> Self {
        let next = self.head.take();
        Self {
            head: Some(Arc::new(Node { value, next })),
            len: self.len + 1,
        }
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Default for ConsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ConsList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Drop for ConsList<T> {
    // Unlink iteratively; the default recursive drop overflows the stack on
    // long lists. Stop at the first node someone else still holds.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(node) = link {
            // Of several handles dropping a shared node at once, exactly one
            // gets it back here and keeps unlinking.
            match Arc::into_inner(node) {
                Some(mut node) => link = node.next.take(),
                None => break,
            }
        }
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(ConsList::new(), |list, value| list.cons(value))
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ConsList<T> {}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`ConsList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Clone> Sealed for ConsList<T> {}

impl<T: Clone> Extract for ConsList<T> {
    type Item = T;
    const STRATEGY: Strategy = Strategy::List;

    fn extract(mut self) -> Extraction<T, Self> {
        let node = self.head.take().ok_or(ExtractError::Empty)?;
        let len = self.len - 1;

        let (value, next) = match Arc::try_unwrap(node) {
            Ok(node) => (node.value, node.next),
            // Shared: copy the head, keep pointing at the shared tail.
            Err(shared) => (shared.value.clone(), shared.next.clone()),
        };

        Ok((value, ConsList { head: next, len }))
    }
}

// =============================================================================
// std sequences
// =============================================================================

impl<T> Sealed for VecDeque<T> {}

impl<T> Extract for VecDeque<T> {
    type Item = T;
    const STRATEGY: Strategy = Strategy::List;

    #[inline]
    fn extract(mut self) -> Extraction<T, Self> {
        let item = self.pop_front().ok_or(ExtractError::Empty)?;
        Ok((item, self))
    }
}

impl<T> Sealed for Vec<T> {}

/// O(n): every remaining element shifts down one slot.
impl<T> Extract for Vec<T> {
    type Item = T;
    const STRATEGY: Strategy = Strategy::List;

    #[inline]
    fn extract(mut self) -> Extraction<T, Self> {
        if self.is_empty() {
            return Err(ExtractError::Empty);
        }
        let item = self.remove(0);
        Ok((item, self))
    }
}

impl<T> Sealed for &[T] {}

impl<'a, T> Extract for &'a [T] {
    type Item = &'a T;
    const STRATEGY: Strategy = Strategy::List;

    #[inline]
    fn extract(self) -> Extraction<&'a T, Self> {
        self.split_first().ok_or(ExtractError::Empty)
    }
}

impl Sealed for &str {}

impl Extract for &str {
    type Item = char;
    const STRATEGY: Strategy = Strategy::List;

    #[inline]
    fn extract(self) -> Extraction<char, Self> {
        let c = self.chars().next().ok_or(ExtractError::Empty)?;
        Ok((c, &self[c.len_utf8()..]))
    }
}
