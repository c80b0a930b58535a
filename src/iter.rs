use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::node::{LeftSide, Pair};
use crate::treap;

/// Borrowing iterator over the entries of a [`BiMap`](crate::BiMap) in
/// ascending left order.
///
/// Traversal climbs parent links, so stepping needs no stack and no
/// allocation. The iterator is double ended; the two ends meet in the
/// middle.
#[derive(Debug)]
pub struct Iter<'a, L, R, Ix = DefaultIx> {
    nodes: &'a [Pair<L, R, Ix>],
    front: Option<NodeIndex<Ix>>,
    back: Option<NodeIndex<Ix>>,
    remaining: usize,
}

impl<'a, L, R, Ix> Iter<'a, L, R, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(nodes: &'a [Pair<L, R, Ix>], len: usize) -> Self {
        let root = treap::root::<LeftSide, L, R, Ix>(nodes);
        Iter {
            nodes,
            front: root.map(|root| treap::minimum::<LeftSide, L, R, Ix>(nodes, root)),
            back: root.map(|root| treap::maximum::<LeftSide, L, R, Ix>(nodes, root)),
            remaining: len,
        }
    }
}

impl<'a, L, R, Ix> Iterator for Iter<'a, L, R, Ix>
where
    Ix: IndexType,
{
    type Item = (&'a L, &'a R);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        self.front = treap::successor::<LeftSide, L, R, Ix>(self.nodes, node);
        let pair = &self.nodes[node.index()];
        Some((pair.left_key(), pair.right_key()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L, R, Ix> DoubleEndedIterator for Iter<'_, L, R, Ix>
where
    Ix: IndexType,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.remaining -= 1;
        self.back = treap::predecessor::<LeftSide, L, R, Ix>(self.nodes, node);
        let pair = &self.nodes[node.index()];
        Some((pair.left_key(), pair.right_key()))
    }
}

impl<L, R, Ix> ExactSizeIterator for Iter<'_, L, R, Ix> where Ix: IndexType {}

/// Owning iterator over the entries of a [`BiMap`](crate::BiMap) in
/// ascending left order.
#[derive(Debug)]
pub struct IntoIter<L, R, Ix = DefaultIx> {
    nodes: Vec<Pair<L, R, Ix>>,
    front: Option<NodeIndex<Ix>>,
    back: Option<NodeIndex<Ix>>,
    remaining: usize,
}

impl<L, R, Ix> IntoIter<L, R, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(nodes: Vec<Pair<L, R, Ix>>, len: usize) -> Self {
        let root = treap::root::<LeftSide, L, R, Ix>(&nodes);
        let front = root.map(|root| treap::minimum::<LeftSide, L, R, Ix>(&nodes, root));
        let back = root.map(|root| treap::maximum::<LeftSide, L, R, Ix>(&nodes, root));
        IntoIter {
            nodes,
            front,
            back,
            remaining: len,
        }
    }
}

impl<L, R, Ix> Iterator for IntoIter<L, R, Ix>
where
    Ix: IndexType,
{
    type Item = (L, R);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.remaining -= 1;
        self.front = treap::successor::<LeftSide, L, R, Ix>(&self.nodes, node);
        let pair = &mut self.nodes[node.index()];
        Some((pair.take_left(), pair.take_right()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L, R, Ix> DoubleEndedIterator for IntoIter<L, R, Ix>
where
    Ix: IndexType,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.remaining -= 1;
        self.back = treap::predecessor::<LeftSide, L, R, Ix>(&self.nodes, node);
        let pair = &mut self.nodes[node.index()];
        Some((pair.take_left(), pair.take_right()))
    }
}

impl<L, R, Ix> ExactSizeIterator for IntoIter<L, R, Ix> where Ix: IndexType {}
