//! `treap_bimap` is a bidirectional ordered map: every entry pairs a left
//! value with a right value, both sides are kept unique, and the entries
//! can be searched and walked in sorted order from either side.
//!
//! The two orderings are treaps threaded through one shared arena of
//! records, so a lookup through either side lands on the whole pair and
//! a cursor into one ordering converts to the other in O(1) via
//! [`LeftCursor::flip`]. Child and parent references are arena indices
//! rather than pointers, which keeps the map `Send` and `Unpin` and lets
//! cursors stay valid across unrelated insertions and removals.
//!
//! Rebalancing is randomized. Each map owns its generator; construct one
//! with [`BiMap::with_seed`] to make the internal shape reproducible.
//!
//! # Example
//!
//! ```rust
//! use treap_bimap::BiMap;
//!
//! let mut map = BiMap::new();
//! assert!(map.insert(1, "one").is_some());
//! assert!(map.insert(2, "two").is_some());
//! assert_eq!(map.get_left(&1), Some(&"one"));
//! assert_eq!(map.get_right(&"two"), Some(&2));
//!
//! let cursor = map.find_left(&2);
//! assert_eq!(map.right_key(cursor.flip()), Some(&"two"));
//! ```

mod bimap;
mod cursor;
mod index;
mod iter;
mod node;
mod order;
#[cfg(feature = "serde")]
mod serde_impls;
mod treap;

#[cfg(test)]
mod proptests;

pub use bimap::{BiMap, KeyNotFound};
pub use cursor::{LeftCursor, RightCursor};
pub use index::{DefaultIx, IndexType, NodeIndex};
pub use iter::{IntoIter, Iter};
pub use order::{Comparator, NaturalOrder};
