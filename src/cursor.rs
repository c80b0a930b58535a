use crate::index::{DefaultIx, IndexType, NodeIndex};

/// Position in the left-to-right ordering of a [`BiMap`](crate::BiMap).
///
/// A cursor is a plain copyable index and stays valid across insertions
/// and across removals of other entries. Removing the entry a cursor
/// points to leaves it dangling; dereferencing a dangling cursor yields
/// `None` or, where that is impossible, a panic, never memory unsafety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeftCursor<Ix = DefaultIx> {
    pub(crate) node: NodeIndex<Ix>,
}

/// Position in the right-to-left ordering of a [`BiMap`](crate::BiMap).
///
/// Same validity rules as [`LeftCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RightCursor<Ix = DefaultIx> {
    pub(crate) node: NodeIndex<Ix>,
}

impl<Ix: IndexType> LeftCursor<Ix> {
    #[inline]
    pub(crate) fn new(node: NodeIndex<Ix>) -> Self {
        LeftCursor { node }
    }

    /// Whether this is the past-the-end position.
    #[inline]
    #[must_use]
    pub fn is_end(self) -> bool {
        self.node.is_sentinel()
    }

    /// Reinterprets this position in the right ordering.
    ///
    /// Both cursors address the same entry, so flipping is free and
    /// flipping twice returns the original cursor. The end position
    /// flips to the end position of the other side.
    #[inline]
    #[must_use]
    pub fn flip(self) -> RightCursor<Ix> {
        RightCursor { node: self.node }
    }
}

impl<Ix: IndexType> RightCursor<Ix> {
    #[inline]
    pub(crate) fn new(node: NodeIndex<Ix>) -> Self {
        RightCursor { node }
    }

    /// Whether this is the past-the-end position.
    #[inline]
    #[must_use]
    pub fn is_end(self) -> bool {
        self.node.is_sentinel()
    }

    /// Reinterprets this position in the left ordering.
    ///
    /// See [`LeftCursor::flip`].
    #[inline]
    #[must_use]
    pub fn flip(self) -> LeftCursor<Ix> {
        LeftCursor { node: self.node }
    }
}
