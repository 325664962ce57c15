#![forbid(unsafe_code)]
//! Qualified-name pair records for XML parsers.
//!
//! A [`Pair`] stores a qualified XML name in a packed char buffer (see
//! [`qname`]) along with a few slots the parser can use as it likes, and
//! gives access to the prefix, local name and full name. Pairs are kept in a
//! [`PairArena`] and chained together through [`PairId`] handles, which is
//! how a parser keeps attribute lists and namespace binding stacks.
//!
//! ```rust
//! use xmlpair::{Pair, PairArena};
//!
//! let pair = Pair::parse("foo:bar")?;
//! assert_eq!(pair.pref(), "foo");
//! assert_eq!(pair.local(), "bar");
//! assert_eq!(pair.qname(), "foobar");
//! assert_eq!(pair.full_name(), "foo:bar");
//!
//! let mut arena = PairArena::new();
//! let mut bindings = None;
//! for prefix in ["a", "b"] {
//!     let mut binding = Pair::from_parts(prefix, "")?;
//!     binding.value = Some(format!("http://example.com/{}", prefix));
//!     let id = arena.add(binding);
//!     bindings = Some(arena.push(bindings, id));
//! }
//!
//! let found = arena.find_prefix(bindings, Pair::parse("a:x")?.chars()).unwrap();
//! assert_eq!(arena[found].value.as_deref(), Some("http://example.com/a"));
//! # Ok::<(), xmlpair::Error>(())
//! ```
//!
//! Malformed buffers are rejected when a pair is created, so the accessors
//! never fail.

mod arena;
mod cache;
mod error;
mod owned;
mod pair;
pub mod qname;

#[cfg(feature = "proptest")]
pub mod proptest;

pub use arena::{Chain, PairArena, PairId};
pub use cache::NameCache;
pub use error::Error;
pub use owned::QNameOwned;
pub use pair::Pair;
