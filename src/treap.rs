use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::index::{IndexType, NodeIndex};
use crate::node::{Pair, Side};
use crate::order::Comparator;

/// Root of side `S`, held by the sentinel's left child slot.
pub fn root<S, L, R, Ix>(nodes: &[Pair<L, R, Ix>]) -> Option<NodeIndex<Ix>>
where
    S: Side<L, R>,
    Ix: IndexType,
{
    S::links(&nodes[0]).left
}

/// Node whose key compares equal to `key`, or `None`.
pub fn search<S, L, R, C, Ix>(
    nodes: &[Pair<L, R, Ix>],
    cmp: &C,
    key: &S::Key,
) -> Option<NodeIndex<Ix>>
where
    S: Side<L, R>,
    C: Comparator<S::Key>,
    Ix: IndexType,
{
    let mut curr = root::<S, L, R, Ix>(nodes);
    while let Some(node) = curr {
        let pair = &nodes[node.index()];
        curr = match cmp.cmp(S::key(pair), key) {
            Ordering::Less => S::links(pair).right,
            Ordering::Greater => S::links(pair).left,
            Ordering::Equal => return Some(node),
        };
    }
    None
}

/// First node whose key is not less than `key`, or `None` when every key
/// orders before it.
pub fn lower_bound<S, L, R, C, Ix>(
    nodes: &[Pair<L, R, Ix>],
    cmp: &C,
    key: &S::Key,
) -> Option<NodeIndex<Ix>>
where
    S: Side<L, R>,
    C: Comparator<S::Key>,
    Ix: IndexType,
{
    let mut curr = root::<S, L, R, Ix>(nodes);
    let mut bound = None;
    while let Some(node) = curr {
        let pair = &nodes[node.index()];
        curr = if cmp.cmp(S::key(pair), key) == Ordering::Less {
            S::links(pair).right
        } else {
            bound = Some(node);
            S::links(pair).left
        };
    }
    bound
}

/// First node whose key is strictly greater than `key`, or `None`.
pub fn upper_bound<S, L, R, C, Ix>(
    nodes: &[Pair<L, R, Ix>],
    cmp: &C,
    key: &S::Key,
) -> Option<NodeIndex<Ix>>
where
    S: Side<L, R>,
    C: Comparator<S::Key>,
    Ix: IndexType,
{
    let mut curr = root::<S, L, R, Ix>(nodes);
    let mut bound = None;
    while let Some(node) = curr {
        let pair = &nodes[node.index()];
        curr = if cmp.cmp(S::key(pair), key) == Ordering::Greater {
            bound = Some(node);
            S::links(pair).left
        } else {
            S::links(pair).right
        };
    }
    bound
}

/// Leftmost node of the subtree rooted at `node`.
pub fn minimum<S, L, R, Ix>(nodes: &[Pair<L, R, Ix>], mut node: NodeIndex<Ix>) -> NodeIndex<Ix>
where
    S: Side<L, R>,
    Ix: IndexType,
{
    while let Some(left) = S::links(&nodes[node.index()]).left {
        node = left;
    }
    node
}

/// Rightmost node of the subtree rooted at `node`.
pub fn maximum<S, L, R, Ix>(nodes: &[Pair<L, R, Ix>], mut node: NodeIndex<Ix>) -> NodeIndex<Ix>
where
    S: Side<L, R>,
    Ix: IndexType,
{
    while let Some(right) = S::links(&nodes[node.index()]).right {
        node = right;
    }
    node
}

/// In-order successor of `node`, climbing parent links instead of using a
/// stack. `None` means past the end.
pub fn successor<S, L, R, Ix>(
    nodes: &[Pair<L, R, Ix>],
    mut node: NodeIndex<Ix>,
) -> Option<NodeIndex<Ix>>
where
    S: Side<L, R>,
    Ix: IndexType,
{
    if let Some(right) = S::links(&nodes[node.index()]).right {
        return Some(minimum::<S, L, R, Ix>(nodes, right));
    }
    loop {
        let parent = S::links(&nodes[node.index()]).parent?;
        if parent.is_sentinel() {
            return None;
        }
        if S::links(&nodes[parent.index()]).right == Some(node) {
            node = parent;
        } else {
            return Some(parent);
        }
    }
}

/// In-order predecessor of `node`. Applied to the sentinel this yields
/// the last node, since the sentinel's left child slot holds the root;
/// that is exactly what stepping back from the end position needs.
pub fn predecessor<S, L, R, Ix>(
    nodes: &[Pair<L, R, Ix>],
    mut node: NodeIndex<Ix>,
) -> Option<NodeIndex<Ix>>
where
    S: Side<L, R>,
    Ix: IndexType,
{
    if let Some(left) = S::links(&nodes[node.index()]).left {
        return Some(maximum::<S, L, R, Ix>(nodes, left));
    }
    loop {
        let parent = S::links(&nodes[node.index()]).parent?;
        if parent.is_sentinel() {
            return None;
        }
        if S::links(&nodes[parent.index()]).left == Some(node) {
            node = parent;
        } else {
            return Some(parent);
        }
    }
}

/// Write half of the engine: a view over the arena and one side's
/// comparator. Rebalancing is randomized; the node with the smallest
/// priority sits at the root, and split/merge restore that ordering on
/// every structural change while restitching parent links immediately.
pub struct Treap<'a, S, L, R, C, Ix> {
    nodes: &'a mut Vec<Pair<L, R, Ix>>,
    cmp: &'a C,
    side: PhantomData<S>,
}

impl<'a, S, L, R, C, Ix> Treap<'a, S, L, R, C, Ix>
where
    S: Side<L, R>,
    C: Comparator<S::Key>,
    Ix: IndexType,
{
    pub fn new(nodes: &'a mut Vec<Pair<L, R, Ix>>, cmp: &'a C) -> Self {
        Treap {
            nodes,
            cmp,
            side: PhantomData,
        }
    }

    /// Links a detached node into the tree.
    ///
    /// Descends by key while the node's priority keeps the heap property,
    /// then splits the remaining subtree around the node's key and adopts
    /// the two halves as its children. The key must not be present yet.
    pub fn insert(&mut self, node: NodeIndex<Ix>) {
        let mut parent = NodeIndex::sentinel();
        let mut on_left = true;
        let mut curr = root::<S, L, R, Ix>(self.nodes);
        while let Some(at) = curr {
            if self.priority(node) < self.priority(at) {
                break;
            }
            parent = at;
            on_left = self.less(node, at);
            curr = if on_left { self.left(at) } else { self.right(at) };
        }
        let (low, high) = self.split(curr, node);
        if on_left {
            self.set_left(parent, Some(node));
        } else {
            self.set_right(parent, Some(node));
        }
        self.set_left(node, low);
        self.set_right(node, high);
    }

    /// Unlinks `node`, splicing the merge of its subtrees into its place
    /// and clearing its links on this side.
    pub fn unlink(&mut self, node: NodeIndex<Ix>) {
        let links = S::links(&self.nodes[node.index()]);
        let left = links.left;
        let right = links.right;
        let parent = links.parent.unwrap();
        let merged = self.merge(left, right);
        if self.left(parent) == Some(node) {
            self.set_left(parent, merged);
        } else {
            self.set_right(parent, merged);
        }
        let links = S::links_mut(&mut self.nodes[node.index()]);
        links.left = None;
        links.right = None;
        links.parent = None;
    }

    /// Splits `tree` into the nodes ordering before `pivot` and the nodes
    /// ordering after it, returning the two detached roots.
    fn split(
        &mut self,
        tree: Option<NodeIndex<Ix>>,
        pivot: NodeIndex<Ix>,
    ) -> (Option<NodeIndex<Ix>>, Option<NodeIndex<Ix>>) {
        let at = match tree {
            Some(at) => at,
            None => return (None, None),
        };
        if self.less(at, pivot) {
            let (low, high) = self.split(self.right(at), pivot);
            self.set_right(at, low);
            self.set_parent(high, None);
            (Some(at), high)
        } else {
            let (low, high) = self.split(self.left(at), pivot);
            self.set_left(at, high);
            self.set_parent(low, None);
            (low, Some(at))
        }
    }

    /// Joins two detached subtrees where every key of `low` orders before
    /// every key of `high`, keeping the smaller priority on top.
    fn merge(
        &mut self,
        low: Option<NodeIndex<Ix>>,
        high: Option<NodeIndex<Ix>>,
    ) -> Option<NodeIndex<Ix>> {
        let (a, b) = match (low, high) {
            (None, other) | (other, None) => return other,
            (Some(a), Some(b)) => (a, b),
        };
        if self.priority(a) < self.priority(b) {
            let merged = self.merge(self.right(a), Some(b));
            self.set_right(a, merged);
            Some(a)
        } else {
            let merged = self.merge(Some(a), self.left(b));
            self.set_left(b, merged);
            Some(b)
        }
    }

    fn less(&self, a: NodeIndex<Ix>, b: NodeIndex<Ix>) -> bool {
        let key_a = S::key(&self.nodes[a.index()]);
        let key_b = S::key(&self.nodes[b.index()]);
        self.cmp.cmp(key_a, key_b) == Ordering::Less
    }

    fn priority(&self, node: NodeIndex<Ix>) -> u64 {
        S::links(&self.nodes[node.index()]).priority
    }

    fn left(&self, node: NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        S::links(&self.nodes[node.index()]).left
    }

    fn right(&self, node: NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        S::links(&self.nodes[node.index()]).right
    }

    /// Sets the left child and restitches the child's parent link.
    fn set_left(&mut self, node: NodeIndex<Ix>, child: Option<NodeIndex<Ix>>) {
        S::links_mut(&mut self.nodes[node.index()]).left = child;
        if let Some(at) = child {
            S::links_mut(&mut self.nodes[at.index()]).parent = Some(node);
        }
    }

    /// Sets the right child and restitches the child's parent link.
    fn set_right(&mut self, node: NodeIndex<Ix>, child: Option<NodeIndex<Ix>>) {
        S::links_mut(&mut self.nodes[node.index()]).right = child;
        if let Some(at) = child {
            S::links_mut(&mut self.nodes[at.index()]).parent = Some(node);
        }
    }

    fn set_parent(&mut self, node: Option<NodeIndex<Ix>>, parent: Option<NodeIndex<Ix>>) {
        if let Some(at) = node {
            S::links_mut(&mut self.nodes[at.index()]).parent = parent;
        }
    }
}
