use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::cursor::{LeftCursor, RightCursor};
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::iter::{IntoIter, Iter};
use crate::node::{LeftSide, Pair, RightSide};
use crate::order::{Comparator, NaturalOrder};
use crate::treap::{self, Treap};

/// Error returned by [`BiMap::at_left`] and [`BiMap::at_right`] when the
/// requested key has no pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key not found")]
pub struct KeyNotFound;

/// A bidirectional map between a set of left values and a set of right
/// values, navigable in sorted order from either side.
///
/// Every entry pairs one left value with one right value, and both values
/// are unique on their own side. Internally the entries live in a single
/// arena; two treaps thread through the same records, one ordered by the
/// left value and one by the right, so an entry found through either side
/// is the whole pair. Cursors are plain indices into the arena and stay
/// valid as long as their entry does.
///
/// # Example
///
/// ```rust
/// use treap_bimap::BiMap;
///
/// let mut map = BiMap::new();
/// assert!(map.insert(1, "one").is_some());
/// assert!(map.insert(2, "two").is_some());
/// assert_eq!(map.get_left(&1), Some(&"one"));
/// assert_eq!(map.get_right(&"two"), Some(&2));
/// ```
pub struct BiMap<L, R, Cl = NaturalOrder, Cr = NaturalOrder, Ix = DefaultIx> {
    /// Arena of records. Slot 0 is the sentinel shared by both trees and
    /// never holds values.
    pub(crate) nodes: Vec<Pair<L, R, Ix>>,
    /// Vacated slots available for reuse by later inserts.
    pub(crate) free: Vec<NodeIndex<Ix>>,
    /// Number of live entries.
    pub(crate) len: usize,
    pub(crate) cmp_left: Cl,
    pub(crate) cmp_right: Cr,
    rng: StdRng,
}

impl<L, R> BiMap<L, R>
where
    L: Ord,
    R: Ord,
{
    /// Creates an empty map ordered by `Ord` on both sides.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treap_bimap::BiMap;
    ///
    /// let map: BiMap<u32, String> = BiMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparators(NaturalOrder, NaturalOrder)
    }
}

impl<L, R, Ix> BiMap<L, R, NaturalOrder, NaturalOrder, Ix>
where
    L: Ord,
    R: Ord,
    Ix: IndexType,
{
    /// Creates an empty map with room for at least `capacity` entries
    /// before the arena reallocates.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut map = Self::with_comparators(NaturalOrder, NaturalOrder);
        map.reserve(capacity);
        map
    }

    /// Creates an empty map whose rebalancing choices are drawn from the
    /// given seed. Two maps built with the same seed and the same sequence
    /// of operations have identical internal shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treap_bimap::BiMap;
    ///
    /// let mut a: BiMap<u64, u64> = BiMap::with_seed(7);
    /// let mut b: BiMap<u64, u64> = BiMap::with_seed(7);
    /// for i in 0..64_u64 {
    ///     assert!(a.insert(i, i).is_some());
    ///     assert!(b.insert(i, i).is_some());
    /// }
    /// assert_eq!(a, b);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_comparators_and_seed(NaturalOrder, NaturalOrder, seed)
    }
}

impl<L, R> Default for BiMap<L, R>
where
    L: Ord,
    R: Ord,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R, Cl, Cr, Ix> BiMap<L, R, Cl, Cr, Ix>
where
    Ix: IndexType,
{
    /// Number of entries in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every entry, keeping the map usable.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Pair::sentinel());
        self.free.clear();
        self.len = 0;
    }

    /// Reserves room for at least `additional` more entries before the
    /// arena reallocates.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// An iterator over `(&L, &R)` entries in ascending left order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// assert!(map.insert(2, 'b').is_some());
    /// assert!(map.insert(1, 'a').is_some());
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, vec![(&1, &'a'), (&2, &'b')]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, L, R, Ix> {
        Iter::new(&self.nodes, self.len)
    }

    /// Cursor to the entry with the smallest left value, or the end
    /// cursor when the map is empty.
    #[inline]
    #[must_use]
    pub fn begin_left(&self) -> LeftCursor<Ix> {
        let node = match treap::root::<LeftSide, L, R, Ix>(&self.nodes) {
            Some(root) => treap::minimum::<LeftSide, L, R, Ix>(&self.nodes, root),
            None => NodeIndex::sentinel(),
        };
        LeftCursor::new(node)
    }

    /// The past-the-end cursor of the left ordering.
    #[inline]
    #[must_use]
    pub fn end_left(&self) -> LeftCursor<Ix> {
        LeftCursor::new(NodeIndex::sentinel())
    }

    /// Cursor to the entry with the smallest right value, or the end
    /// cursor when the map is empty.
    #[inline]
    #[must_use]
    pub fn begin_right(&self) -> RightCursor<Ix> {
        let node = match treap::root::<RightSide, L, R, Ix>(&self.nodes) {
            Some(root) => treap::minimum::<RightSide, L, R, Ix>(&self.nodes, root),
            None => NodeIndex::sentinel(),
        };
        RightCursor::new(node)
    }

    /// The past-the-end cursor of the right ordering.
    #[inline]
    #[must_use]
    pub fn end_right(&self) -> RightCursor<Ix> {
        RightCursor::new(NodeIndex::sentinel())
    }

    /// Cursor to the entry after `cursor` in left order; the successor of
    /// the last entry is the end cursor.
    ///
    /// # Panics
    ///
    /// Panics when `cursor` is the end cursor or its entry is gone.
    #[must_use]
    pub fn next_left(&self, cursor: LeftCursor<Ix>) -> LeftCursor<Ix> {
        assert!(!cursor.is_end(), "cannot advance the end cursor");
        assert!(
            self.is_occupied(cursor.node),
            "cursor does not point into this map"
        );
        Self::left_cursor(treap::successor::<LeftSide, L, R, Ix>(
            &self.nodes,
            cursor.node,
        ))
    }

    /// Cursor to the entry before `cursor` in left order; stepping back
    /// from the end cursor yields the last entry.
    ///
    /// # Panics
    ///
    /// Panics when `cursor` is the begin cursor or its entry is gone.
    #[must_use]
    pub fn prev_left(&self, cursor: LeftCursor<Ix>) -> LeftCursor<Ix> {
        if !cursor.is_end() {
            assert!(
                self.is_occupied(cursor.node),
                "cursor does not point into this map"
            );
        }
        let node = treap::predecessor::<LeftSide, L, R, Ix>(&self.nodes, cursor.node)
            .expect("cannot step back from the begin cursor");
        LeftCursor::new(node)
    }

    /// Cursor to the entry after `cursor` in right order.
    ///
    /// # Panics
    ///
    /// Panics when `cursor` is the end cursor or its entry is gone.
    #[must_use]
    pub fn next_right(&self, cursor: RightCursor<Ix>) -> RightCursor<Ix> {
        assert!(!cursor.is_end(), "cannot advance the end cursor");
        assert!(
            self.is_occupied(cursor.node),
            "cursor does not point into this map"
        );
        Self::right_cursor(treap::successor::<RightSide, L, R, Ix>(
            &self.nodes,
            cursor.node,
        ))
    }

    /// Cursor to the entry before `cursor` in right order; stepping back
    /// from the end cursor yields the last entry.
    ///
    /// # Panics
    ///
    /// Panics when `cursor` is the begin cursor or its entry is gone.
    #[must_use]
    pub fn prev_right(&self, cursor: RightCursor<Ix>) -> RightCursor<Ix> {
        if !cursor.is_end() {
            assert!(
                self.is_occupied(cursor.node),
                "cursor does not point into this map"
            );
        }
        let node = treap::predecessor::<RightSide, L, R, Ix>(&self.nodes, cursor.node)
            .expect("cannot step back from the begin cursor");
        RightCursor::new(node)
    }

    /// Left value of the entry at `cursor`, or `None` for the end cursor
    /// or a cursor whose entry is gone.
    #[inline]
    #[must_use]
    pub fn left_key(&self, cursor: LeftCursor<Ix>) -> Option<&L> {
        self.nodes
            .get(cursor.node.index())
            .and_then(|pair| pair.left.as_ref())
    }

    /// Right value of the entry at `cursor`, or `None` for the end cursor
    /// or a cursor whose entry is gone.
    #[inline]
    #[must_use]
    pub fn right_key(&self, cursor: RightCursor<Ix>) -> Option<&R> {
        self.nodes
            .get(cursor.node.index())
            .and_then(|pair| pair.right.as_ref())
    }

    fn is_occupied(&self, node: NodeIndex<Ix>) -> bool {
        self.nodes
            .get(node.index())
            .map_or(false, |pair| !pair.is_vacant())
    }

    #[inline]
    fn left_cursor(node: Option<NodeIndex<Ix>>) -> LeftCursor<Ix> {
        LeftCursor::new(node.unwrap_or_else(NodeIndex::sentinel))
    }

    #[inline]
    fn right_cursor(node: Option<NodeIndex<Ix>>) -> RightCursor<Ix> {
        RightCursor::new(node.unwrap_or_else(NodeIndex::sentinel))
    }
}

impl<L, R, Cl, Cr, Ix> BiMap<L, R, Cl, Cr, Ix>
where
    Cl: Comparator<L>,
    Cr: Comparator<R>,
    Ix: IndexType,
{
    /// Creates an empty map ordered by the given comparators, one per
    /// side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use treap_bimap::{BiMap, Comparator, NaturalOrder};
    ///
    /// struct Reversed;
    ///
    /// impl Comparator<i32> for Reversed {
    ///     fn cmp(&self, a: &i32, b: &i32) -> Ordering {
    ///         b.cmp(a)
    ///     }
    /// }
    ///
    /// let mut map: BiMap<i32, i32, Reversed> =
    ///     BiMap::with_comparators(Reversed, NaturalOrder);
    /// assert!(map.insert(1, 10).is_some());
    /// assert!(map.insert(2, 20).is_some());
    /// assert_eq!(map.left_key(map.begin_left()), Some(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comparators(cmp_left: Cl, cmp_right: Cr) -> Self {
        BiMap {
            nodes: vec![Pair::sentinel()],
            free: Vec::new(),
            len: 0,
            cmp_left,
            cmp_right,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an empty map ordered by the given comparators, with
    /// rebalancing choices drawn from the given seed.
    ///
    /// Combines [`BiMap::with_comparators`] and [`BiMap::with_seed`] for
    /// maps that need both.
    #[inline]
    #[must_use]
    pub fn with_comparators_and_seed(cmp_left: Cl, cmp_right: Cr, seed: u64) -> Self {
        let mut map = Self::with_comparators(cmp_left, cmp_right);
        map.rng = StdRng::seed_from_u64(seed);
        map
    }

    /// Inserts a pair, provided neither value is already present on its
    /// side.
    ///
    /// Returns a cursor to the new entry, or `None` when either value is
    /// already paired; a rejected insert leaves the map untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// assert!(map.insert(1, "one").is_some());
    /// assert!(map.insert(1, "uno").is_none());
    /// assert!(map.insert(2, "one").is_none());
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when the arena is at the maximum number of nodes for its
    /// index type.
    pub fn insert(&mut self, left: L, right: R) -> Option<LeftCursor<Ix>> {
        if treap::search::<LeftSide, L, R, Cl, Ix>(&self.nodes, &self.cmp_left, &left).is_some() {
            return None;
        }
        if treap::search::<RightSide, L, R, Cr, Ix>(&self.nodes, &self.cmp_right, &right).is_some()
        {
            return None;
        }
        Some(LeftCursor::new(self.link_new(left, right)))
    }

    /// Removes the entry with the given left value and returns the right
    /// value it was paired with.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// assert!(map.insert(3, 'c').is_some());
    /// assert_eq!(map.erase_left(&3), Some('c'));
    /// assert_eq!(map.erase_left(&3), None);
    /// ```
    pub fn erase_left(&mut self, key: &L) -> Option<R> {
        let node = treap::search::<LeftSide, L, R, Cl, Ix>(&self.nodes, &self.cmp_left, key)?;
        let (_, right) = self.release(node);
        Some(right)
    }

    /// Removes the entry with the given right value and returns the left
    /// value it was paired with.
    pub fn erase_right(&mut self, key: &R) -> Option<L> {
        let node = treap::search::<RightSide, L, R, Cr, Ix>(&self.nodes, &self.cmp_right, key)?;
        let (left, _) = self.release(node);
        Some(left)
    }

    /// Removes the entry at `cursor` and returns the cursor to its left
    /// successor.
    ///
    /// # Panics
    ///
    /// Panics when `cursor` is the end cursor or does not address a live
    /// entry.
    pub fn erase_left_at(&mut self, cursor: LeftCursor<Ix>) -> LeftCursor<Ix> {
        assert!(!cursor.is_end(), "cannot erase the end cursor");
        assert!(
            self.is_occupied(cursor.node),
            "cursor does not point to an entry"
        );
        let next = treap::successor::<LeftSide, L, R, Ix>(&self.nodes, cursor.node);
        let _ignore = self.release(cursor.node);
        Self::left_cursor(next)
    }

    /// Removes the entry at `cursor` and returns the cursor to its right
    /// successor.
    ///
    /// # Panics
    ///
    /// Panics when `cursor` is the end cursor or does not address a live
    /// entry.
    pub fn erase_right_at(&mut self, cursor: RightCursor<Ix>) -> RightCursor<Ix> {
        assert!(!cursor.is_end(), "cannot erase the end cursor");
        assert!(
            self.is_occupied(cursor.node),
            "cursor does not point to an entry"
        );
        let next = treap::successor::<RightSide, L, R, Ix>(&self.nodes, cursor.node);
        let _ignore = self.release(cursor.node);
        Self::right_cursor(next)
    }

    /// Removes every entry in left order from `first` up to, not
    /// including, `last`, and returns `last`.
    ///
    /// # Panics
    ///
    /// Panics when `[first, last)` is not a valid left-order range of
    /// this map.
    pub fn erase_left_range(
        &mut self,
        first: LeftCursor<Ix>,
        last: LeftCursor<Ix>,
    ) -> LeftCursor<Ix> {
        let mut curr = first;
        while curr != last {
            curr = self.erase_left_at(curr);
        }
        curr
    }

    /// Removes every entry in right order from `first` up to, not
    /// including, `last`, and returns `last`.
    ///
    /// # Panics
    ///
    /// Panics when `[first, last)` is not a valid right-order range of
    /// this map.
    pub fn erase_right_range(
        &mut self,
        first: RightCursor<Ix>,
        last: RightCursor<Ix>,
    ) -> RightCursor<Ix> {
        let mut curr = first;
        while curr != last {
            curr = self.erase_right_at(curr);
        }
        curr
    }

    /// Cursor to the entry with the given left value, or the end cursor.
    #[inline]
    #[must_use]
    pub fn find_left(&self, key: &L) -> LeftCursor<Ix> {
        Self::left_cursor(treap::search::<LeftSide, L, R, Cl, Ix>(
            &self.nodes,
            &self.cmp_left,
            key,
        ))
    }

    /// Cursor to the entry with the given right value, or the end cursor.
    #[inline]
    #[must_use]
    pub fn find_right(&self, key: &R) -> RightCursor<Ix> {
        Self::right_cursor(treap::search::<RightSide, L, R, Cr, Ix>(
            &self.nodes,
            &self.cmp_right,
            key,
        ))
    }

    /// Right value paired with the given left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// assert!(map.insert(1, "one").is_some());
    /// assert_eq!(map.get_left(&1), Some(&"one"));
    /// assert_eq!(map.get_left(&9), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get_left(&self, key: &L) -> Option<&R> {
        let node = treap::search::<LeftSide, L, R, Cl, Ix>(&self.nodes, &self.cmp_left, key)?;
        Some(self.nodes[node.index()].right_key())
    }

    /// Left value paired with the given right value.
    #[inline]
    #[must_use]
    pub fn get_right(&self, key: &R) -> Option<&L> {
        let node = treap::search::<RightSide, L, R, Cr, Ix>(&self.nodes, &self.cmp_right, key)?;
        Some(self.nodes[node.index()].left_key())
    }

    /// Right value paired with the given left value, or [`KeyNotFound`].
    #[inline]
    pub fn at_left(&self, key: &L) -> Result<&R, KeyNotFound> {
        self.get_left(key).ok_or(KeyNotFound)
    }

    /// Left value paired with the given right value, or [`KeyNotFound`].
    #[inline]
    pub fn at_right(&self, key: &R) -> Result<&L, KeyNotFound> {
        self.get_right(key).ok_or(KeyNotFound)
    }

    /// Right value paired with `key`, claiming the default right value
    /// for it first when the key is absent.
    ///
    /// Claiming means: the entry currently holding `R::default()` (if
    /// any) is removed, then `(key, R::default())` is inserted. A present
    /// key returns its pairing untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treap_bimap::BiMap;
    ///
    /// let mut map: BiMap<&str, u32> = BiMap::new();
    /// assert_eq!(*map.at_left_or_default("a"), 0);
    /// assert!(map.insert("b", 1).is_some());
    /// // claiming the default for "c" evicts ("a", 0)
    /// assert_eq!(*map.at_left_or_default("c"), 0);
    /// assert_eq!(map.len(), 2);
    /// assert!(map.get_left(&"a").is_none());
    /// ```
    pub fn at_left_or_default(&mut self, key: L) -> &R
    where
        R: Default,
    {
        if let Some(node) =
            treap::search::<LeftSide, L, R, Cl, Ix>(&self.nodes, &self.cmp_left, &key)
        {
            return self.nodes[node.index()].right_key();
        }
        let default = R::default();
        if let Some(holder) =
            treap::search::<RightSide, L, R, Cr, Ix>(&self.nodes, &self.cmp_right, &default)
        {
            let _ignore = self.release(holder);
        }
        let node = self.link_new(key, default);
        self.nodes[node.index()].right_key()
    }

    /// Left value paired with `key`, claiming the default left value for
    /// it first when the key is absent. Mirror of
    /// [`BiMap::at_left_or_default`].
    pub fn at_right_or_default(&mut self, key: R) -> &L
    where
        L: Default,
    {
        if let Some(node) =
            treap::search::<RightSide, L, R, Cr, Ix>(&self.nodes, &self.cmp_right, &key)
        {
            return self.nodes[node.index()].left_key();
        }
        let default = L::default();
        if let Some(holder) =
            treap::search::<LeftSide, L, R, Cl, Ix>(&self.nodes, &self.cmp_left, &default)
        {
            let _ignore = self.release(holder);
        }
        let node = self.link_new(default, key);
        self.nodes[node.index()].left_key()
    }

    /// Cursor to the first entry whose left value is not less than `key`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treap_bimap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// assert!(map.insert(10, 'a').is_some());
    /// assert!(map.insert(20, 'b').is_some());
    /// assert_eq!(map.left_key(map.lower_bound_left(&15)), Some(&20));
    /// assert_eq!(map.left_key(map.lower_bound_left(&20)), Some(&20));
    /// assert!(map.lower_bound_left(&21).is_end());
    /// ```
    #[inline]
    #[must_use]
    pub fn lower_bound_left(&self, key: &L) -> LeftCursor<Ix> {
        Self::left_cursor(treap::lower_bound::<LeftSide, L, R, Cl, Ix>(
            &self.nodes,
            &self.cmp_left,
            key,
        ))
    }

    /// Cursor to the first entry whose left value is strictly greater
    /// than `key`.
    #[inline]
    #[must_use]
    pub fn upper_bound_left(&self, key: &L) -> LeftCursor<Ix> {
        Self::left_cursor(treap::upper_bound::<LeftSide, L, R, Cl, Ix>(
            &self.nodes,
            &self.cmp_left,
            key,
        ))
    }

    /// Cursor to the first entry whose right value is not less than
    /// `key`.
    #[inline]
    #[must_use]
    pub fn lower_bound_right(&self, key: &R) -> RightCursor<Ix> {
        Self::right_cursor(treap::lower_bound::<RightSide, L, R, Cr, Ix>(
            &self.nodes,
            &self.cmp_right,
            key,
        ))
    }

    /// Cursor to the first entry whose right value is strictly greater
    /// than `key`.
    #[inline]
    #[must_use]
    pub fn upper_bound_right(&self, key: &R) -> RightCursor<Ix> {
        Self::right_cursor(treap::upper_bound::<RightSide, L, R, Cr, Ix>(
            &self.nodes,
            &self.cmp_right,
            key,
        ))
    }

    /// Allocates a record for the pair and links it into both trees.
    /// Uniqueness on both sides is the caller's responsibility.
    fn link_new(&mut self, left: L, right: R) -> NodeIndex<Ix> {
        let node = self.allocate(left, right);
        self.left_tree().insert(node);
        self.right_tree().insert(node);
        self.len = self.len.wrapping_add(1);
        node
    }

    /// Unlinks the record from both trees, moves its values out and
    /// recycles the slot.
    fn release(&mut self, node: NodeIndex<Ix>) -> (L, R) {
        self.left_tree().unlink(node);
        self.right_tree().unlink(node);
        self.free.push(node);
        self.len = self.len.wrapping_sub(1);
        let pair = &mut self.nodes[node.index()];
        (pair.take_left(), pair.take_right())
    }

    fn allocate(&mut self, left: L, right: R) -> NodeIndex<Ix> {
        let left_priority = self.rng.gen();
        let right_priority = self.rng.gen();
        let pair = Pair::new(left, right, left_priority, right_priority);
        if let Some(node) = self.free.pop() {
            self.nodes[node.index()] = pair;
            return node;
        }
        let index = self.nodes.len();
        // check for max capacity, except if we use usize
        assert!(
            <Ix as IndexType>::max().index() == !0 || index <= <Ix as IndexType>::max().index(),
            "Reached maximum number of nodes"
        );
        self.nodes.push(pair);
        NodeIndex::new(index)
    }

    fn left_tree(&mut self) -> Treap<'_, LeftSide, L, R, Cl, Ix> {
        Treap::new(&mut self.nodes, &self.cmp_left)
    }

    fn right_tree(&mut self) -> Treap<'_, RightSide, L, R, Cr, Ix> {
        Treap::new(&mut self.nodes, &self.cmp_right)
    }
}

impl<L, R, Cl, Cr, Ix> fmt::Debug for BiMap<L, R, Cl, Cr, Ix>
where
    L: fmt::Debug,
    R: fmt::Debug,
    Ix: IndexType,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<L, R, Cl, Cr, Ix> PartialEq for BiMap<L, R, Cl, Cr, Ix>
where
    L: PartialEq,
    R: PartialEq,
    Ix: IndexType,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<L, R, Cl, Cr, Ix> Eq for BiMap<L, R, Cl, Cr, Ix>
where
    L: Eq,
    R: Eq,
    Ix: IndexType,
{
}

impl<L, R, Cl, Cr, Ix> Clone for BiMap<L, R, Cl, Cr, Ix>
where
    L: Clone,
    R: Clone,
    Cl: Comparator<L> + Clone,
    Cr: Comparator<R> + Clone,
    Ix: IndexType,
{
    /// Rebuilds the map pair by pair. The clone owns fresh records with
    /// fresh priorities; cursors from the source do not transfer.
    fn clone(&self) -> Self {
        let mut clone = BiMap {
            nodes: Vec::with_capacity(self.nodes.len()),
            free: Vec::new(),
            len: 0,
            cmp_left: self.cmp_left.clone(),
            cmp_right: self.cmp_right.clone(),
            rng: self.rng.clone(),
        };
        clone.nodes.push(Pair::sentinel());
        for (left, right) in self.iter() {
            let _ignore = clone.link_new(left.clone(), right.clone());
        }
        clone
    }
}

impl<L, R, Cl, Cr, Ix> Extend<(L, R)> for BiMap<L, R, Cl, Cr, Ix>
where
    Cl: Comparator<L>,
    Cr: Comparator<R>,
    Ix: IndexType,
{
    /// Inserts each pair in order; pairs rejected by [`BiMap::insert`]
    /// are skipped.
    fn extend<T: IntoIterator<Item = (L, R)>>(&mut self, iter: T) {
        for (left, right) in iter {
            let _ignore = self.insert(left, right);
        }
    }
}

impl<L, R> FromIterator<(L, R)> for BiMap<L, R>
where
    L: Ord,
    R: Ord,
{
    fn from_iter<T: IntoIterator<Item = (L, R)>>(iter: T) -> Self {
        let mut map = BiMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, L, R, Cl, Cr, Ix> IntoIterator for &'a BiMap<L, R, Cl, Cr, Ix>
where
    Ix: IndexType,
{
    type Item = (&'a L, &'a R);
    type IntoIter = Iter<'a, L, R, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L, R, Cl, Cr, Ix> IntoIterator for BiMap<L, R, Cl, Cr, Ix>
where
    Ix: IndexType,
{
    type Item = (L, R);
    type IntoIter = IntoIter<L, R, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.nodes, self.len)
    }
}
