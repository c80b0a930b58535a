use crate::index::NodeIndex;

/// Navigation links of one record inside one of the two trees.
#[derive(Debug)]
pub struct Links<Ix> {
    /// Left child
    pub left: Option<NodeIndex<Ix>>,
    /// Right child
    pub right: Option<NodeIndex<Ix>>,
    /// Parent; the root points at the sentinel, the sentinel at nothing
    pub parent: Option<NodeIndex<Ix>>,
    /// Heap priority, drawn once when the record is created
    pub priority: u64,
}

impl<Ix> Links<Ix> {
    pub fn detached(priority: u64) -> Self {
        Links {
            left: None,
            right: None,
            parent: None,
            priority,
        }
    }
}

/// One bimap record: a left value, a right value, and one set of links
/// per tree. Both trees address the record by the same arena slot, which
/// is what makes crossing sides a constant-time index reuse.
#[derive(Debug)]
pub struct Pair<L, R, Ix> {
    /// Left value
    pub left: Option<L>,
    /// Right value
    pub right: Option<R>,
    /// Links of the left-ordered tree
    pub left_links: Links<Ix>,
    /// Links of the right-ordered tree
    pub right_links: Links<Ix>,
}

impl<L, R, Ix> Pair<L, R, Ix> {
    /// Creates the slot 0 record. It stores no values; its `left` child
    /// slots hold the roots of the two trees, and its index doubles as
    /// the past-the-end position of both.
    pub fn sentinel() -> Self {
        Pair {
            left: None,
            right: None,
            left_links: Links::detached(0),
            right_links: Links::detached(0),
        }
    }

    pub fn new(left: L, right: R, left_priority: u64, right_priority: u64) -> Self {
        Pair {
            left: Some(left),
            right: Some(right),
            left_links: Links::detached(left_priority),
            right_links: Links::detached(right_priority),
        }
    }

    pub fn left_key(&self) -> &L {
        self.left.as_ref().unwrap()
    }

    pub fn right_key(&self) -> &R {
        self.right.as_ref().unwrap()
    }

    pub fn take_left(&mut self) -> L {
        self.left.take().unwrap()
    }

    pub fn take_right(&mut self) -> R {
        self.right.take().unwrap()
    }

    /// Whether the slot holds no record, which is true of the sentinel
    /// and of erased slots waiting on the free list.
    pub fn is_vacant(&self) -> bool {
        self.left.is_none()
    }
}

/// Selects which embedded key and link substructure a tree instance
/// operates on. The implementors are never instantiated; they only tag
/// the two projections of a [`Pair`].
pub trait Side<L, R> {
    type Key;

    fn key<Ix>(pair: &Pair<L, R, Ix>) -> &Self::Key;
    fn links<Ix>(pair: &Pair<L, R, Ix>) -> &Links<Ix>;
    fn links_mut<Ix>(pair: &mut Pair<L, R, Ix>) -> &mut Links<Ix>;
}

/// Projection used by the left-ordered tree.
pub enum LeftSide {}

/// Projection used by the right-ordered tree.
pub enum RightSide {}

impl<L, R> Side<L, R> for LeftSide {
    type Key = L;

    fn key<Ix>(pair: &Pair<L, R, Ix>) -> &L {
        pair.left_key()
    }

    fn links<Ix>(pair: &Pair<L, R, Ix>) -> &Links<Ix> {
        &pair.left_links
    }

    fn links_mut<Ix>(pair: &mut Pair<L, R, Ix>) -> &mut Links<Ix> {
        &mut pair.left_links
    }
}

impl<L, R> Side<L, R> for RightSide {
    type Key = R;

    fn key<Ix>(pair: &Pair<L, R, Ix>) -> &R {
        pair.right_key()
    }

    fn links<Ix>(pair: &Pair<L, R, Ix>) -> &Links<Ix> {
        &pair.right_links
    }

    fn links_mut<Ix>(pair: &mut Pair<L, R, Ix>) -> &mut Links<Ix> {
        &mut pair.right_links
    }
}
