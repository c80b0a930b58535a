use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::BiMap;

/// One user-visible mutation. The `i8` domain keeps collisions frequent
/// so the rejection and eviction paths actually run.
#[derive(Debug, Clone)]
enum Op {
    Insert(i8, i8),
    EraseLeft(i8),
    EraseRight(i8),
    AtLeftOrDefault(i8),
    AtRightOrDefault(i8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<i8>(), any::<i8>()).prop_map(|(l, r)| Op::Insert(l, r)),
        2 => any::<i8>().prop_map(Op::EraseLeft),
        2 => any::<i8>().prop_map(Op::EraseRight),
        1 => any::<i8>().prop_map(Op::AtLeftOrDefault),
        1 => any::<i8>().prop_map(Op::AtRightOrDefault),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

    /// The map must agree, operation by operation, with a pair of
    /// `BTreeMap`s kept bijective by hand.
    #[test]
    fn behaves_like_a_bijective_pair_of_maps(
        ops in proptest::collection::vec(op_strategy(), 1..200),
    ) {
        let mut map = BiMap::new();
        let mut left_model: BTreeMap<i8, i8> = BTreeMap::new();
        let mut right_model: BTreeMap<i8, i8> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(l, r) => {
                    let fresh =
                        !left_model.contains_key(&l) && !right_model.contains_key(&r);
                    prop_assert_eq!(map.insert(l, r).is_some(), fresh);
                    if fresh {
                        left_model.insert(l, r);
                        right_model.insert(r, l);
                    }
                }
                Op::EraseLeft(l) => {
                    let expected = left_model.remove(&l);
                    if let Some(r) = expected {
                        let _ignore = right_model.remove(&r);
                    }
                    prop_assert_eq!(map.erase_left(&l), expected);
                }
                Op::EraseRight(r) => {
                    let expected = right_model.remove(&r);
                    if let Some(l) = expected {
                        let _ignore = left_model.remove(&l);
                    }
                    prop_assert_eq!(map.erase_right(&r), expected);
                }
                Op::AtLeftOrDefault(l) => {
                    let expected = match left_model.get(&l) {
                        Some(&r) => r,
                        None => {
                            if let Some(holder) = right_model.remove(&0) {
                                let _ignore = left_model.remove(&holder);
                            }
                            left_model.insert(l, 0);
                            right_model.insert(0, l);
                            0
                        }
                    };
                    prop_assert_eq!(*map.at_left_or_default(l), expected);
                }
                Op::AtRightOrDefault(r) => {
                    let expected = match right_model.get(&r) {
                        Some(&l) => l,
                        None => {
                            if let Some(holder) = left_model.remove(&0) {
                                let _ignore = right_model.remove(&holder);
                            }
                            left_model.insert(0, r);
                            right_model.insert(r, 0);
                            0
                        }
                    };
                    prop_assert_eq!(*map.at_right_or_default(r), expected);
                }
            }
            prop_assert_eq!(map.len(), left_model.len());
        }

        map.check_invariants();
        let entries: Vec<_> = map.iter().map(|(l, r)| (*l, *r)).collect();
        let expected: Vec<_> = left_model.iter().map(|(l, r)| (*l, *r)).collect();
        prop_assert_eq!(entries, expected);

        let mut rights = Vec::new();
        let mut cursor = map.begin_right();
        while !cursor.is_end() {
            rights.push(*map.right_key(cursor).unwrap());
            cursor = map.next_right(cursor);
        }
        let expected_rights: Vec<_> = right_model.keys().copied().collect();
        prop_assert_eq!(rights, expected_rights);
    }

    #[test]
    fn flip_is_an_involution(
        entries in proptest::collection::btree_map(any::<i8>(), any::<i8>(), 0..50),
    ) {
        let mut map = BiMap::new();
        for (&l, &r) in &entries {
            let _ignore = map.insert(l, r);
        }
        let mut cursor = map.begin_left();
        while !cursor.is_end() {
            prop_assert_eq!(cursor.flip().flip(), cursor);
            let left = map.left_key(cursor).copied();
            let right = map.right_key(cursor.flip()).copied();
            prop_assert!(left.zip(right).is_some());
            cursor = map.next_left(cursor);
        }
        prop_assert_eq!(map.end_left().flip(), map.end_right());
    }
}
