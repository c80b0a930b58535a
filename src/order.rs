use std::cmp::Ordering;

/// Ordering strategy for one key side of a map.
///
/// Both sides of a bimap carry their own comparator, so the left and right
/// orders can be customized independently.
pub trait Comparator<K: ?Sized> {
    fn cmp(&self, a: &K, b: &K) -> Ordering;
}

/// Compares keys through their `Ord` implementation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        Ord::cmp(a, b)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
