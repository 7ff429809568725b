//! Uniform single-element extraction across collection kinds.
//!
//! One operation, `extract`, takes a collection and gives back one element
//! together with everything that is left:
//!
//! ```text
//! extract(collection) -> Result<(item, remainder), ExtractError>
//! ```
//!
//! The remainder has the same type as the input, so calls chain until the
//! collection reports [`ExtractError::Empty`]. Emptiness is a value, never a
//! panic.
//!
//! # Quick Start
//!
//! ```
//! use nexus_extract::{ExtractError, extract};
//!
//! let (head, rest) = extract(vec!['a', 'b']).unwrap();
//! assert_eq!(head, 'a');
//!
//! let (head, rest) = extract(rest).unwrap();
//! assert_eq!(head, 'b');
//!
//! assert_eq!(extract(rest), Err(ExtractError::Empty));
//! ```
//!
//! # Strategies
//!
//! Each collection kind is bound to one strategy at compile time through its
//! [`Extract`] impl:
//!
//! | Strategy | Kinds | Element handed out |
//! |----------|-------|--------------------|
//! | [`Strategy::List`] | [`ConsList`], `VecDeque`, `Vec`, `&[T]`, `&str` | First element |
//! | [`Strategy::Map`] | `HashMap`, `BTreeMap`, `hashbrown::HashMap`, `slab::Slab` | Some `(key, value)` |
//! | [`Strategy::Set`] | `HashSet`, `BTreeSet`, `hashbrown::HashSet` | Some member |
//! | [`Strategy::Range`] | [`Span`] | `first`, stepping toward `last` |
//! | [`Strategy::Fallback`] | [`Lazy`], [`DynLazy`] | Next item of any iterator |
//!
//! Maps and sets hand out whatever their storage yields first. The choice
//! is stable for one value but not across equal values built differently.
//!
//! # Value Semantics
//!
//! `extract` consumes its argument. Anything still visible through another
//! handle is left alone:
//!
//! ```
//! use nexus_extract::{ConsList, extract};
//!
//! let list: ConsList<u32> = (1..=3).collect();
//! let before = list.clone();
//!
//! let (_, rest) = extract(list).unwrap();
//! assert_eq!(rest.len(), 2);
//! assert_eq!(before.len(), 3);
//! ```
//!
//! # Feature Flags
//!
//! - `hashbrown` - [`Extract`] for `hashbrown::HashMap` and `hashbrown::HashSet`
//! - `slab` - [`Extract`] for `slab::Slab`

#![warn(missing_docs)]

pub mod extract;
pub mod lazy;
pub mod list;
pub mod map;
pub mod range;
pub mod set;

pub use extract::{Extract, ExtractError, Extraction, Strategy, extract};
pub use lazy::{DynLazy, Lazy, lazy};
pub use list::ConsList;
pub use range::{Direction, Span, Step};
