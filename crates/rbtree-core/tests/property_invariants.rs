use std::collections::BTreeMap;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rbtree_core::{decrement, increment, Position, RbTree};

const MAP_SIZE: usize = 500;
const PROPTEST_CASES: u32 = 256;

const LARGE_MAP_SIZE: usize = 10_000;
const LARGE_PROPTEST_CASES: u32 = 8;
const LARGE_VERIFY_EVERY: usize = 500;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    InsertEqual(i32),
    Remove(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..200i32).prop_map(Op::Insert),
        (0..200i32).prop_map(Op::InsertEqual),
        (0..200i32).prop_map(Op::Remove),
    ]
}

/// Red-black height bound: `2 * log2(n + 1)`.
fn height_bound(n: usize) -> usize {
    (2.0 * ((n + 1) as f64).log2()).floor() as usize
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn random_ops_keep_invariants(ops in proptest::collection::vec(op(), 0..MAP_SIZE)) {
        let mut tree = RbTree::<i32, usize>::new();
        let mut shadow: BTreeMap<i32, usize> = BTreeMap::new();

        // Key -> number of nodes carrying it.
        for op in ops {
            match op {
                Op::Insert(k) => {
                    tree.insert_unique(k, 0);
                    shadow.entry(k).or_insert(1);
                }
                Op::InsertEqual(k) => {
                    tree.insert_equal(k, 0);
                    *shadow.entry(k).or_insert(0) += 1;
                }
                Op::Remove(k) => {
                    let removed = tree.remove(&k).is_some();
                    prop_assert_eq!(removed, shadow.contains_key(&k));
                    match shadow.get(&k).copied() {
                        Some(1) => {
                            shadow.remove(&k);
                        }
                        Some(n) => {
                            shadow.insert(k, n - 1);
                        }
                        None => {}
                    }
                }
            }
            prop_assert!(tree.verify().is_ok(), "{:?}", tree.verify());
            prop_assert_eq!(tree.len(), shadow.values().sum::<usize>());
        }

        let expected: Vec<i32> = shadow
            .iter()
            .flat_map(|(k, n)| std::iter::repeat(*k).take(*n))
            .collect();
        let actual: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn iteration_is_sorted_and_height_bounded(
        inserts in proptest::collection::hash_set(0..10000i32, 0..MAP_SIZE),
    ) {
        let tree: RbTree<i32, ()> = inserts.iter().map(|k| (*k, ())).collect();
        let mut sorted: Vec<i32> = inserts.into_iter().collect();
        sorted.sort();

        let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
        prop_assert_eq!(&keys, &sorted);
        prop_assert!(tree.height() <= height_bound(tree.len()));
        prop_assert_eq!(tree.first().map(|(k, _)| *k), sorted.first().copied());
        prop_assert_eq!(tree.last().map(|(k, _)| *k), sorted.last().copied());
    }

    #[test]
    fn increment_and_decrement_are_inverse(
        inserts in proptest::collection::hash_set(0..10000i32, 1..MAP_SIZE),
    ) {
        let tree: RbTree<i32, ()> = inserts.into_iter().map(|k| (k, ())).collect();
        let mut pos = tree.begin();
        while pos != Position::End {
            let after = increment(tree.arena(), pos);
            prop_assert_eq!(decrement(tree.arena(), tree.header(), after), pos);
            pos = after;
        }
    }

    #[test]
    fn shuffled_erase_keeps_invariants(
        inserts in proptest::collection::hash_set(0..10000i32, 0..MAP_SIZE),
        seed in any::<u64>(),
    ) {
        let mut tree: RbTree<i32, i32> = inserts.iter().map(|k| (*k, -*k)).collect();
        let mut order: Vec<i32> = inserts.into_iter().collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));

        for (i, k) in order.iter().enumerate() {
            prop_assert_eq!(tree.remove(k), Some((*k, -*k)));
            prop_assert_eq!(tree.len(), order.len() - i - 1);
            prop_assert!(tree.verify().is_ok());
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.arena().live(), 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(LARGE_PROPTEST_CASES))]

    #[test]
    fn ten_thousand_random_ops_stay_balanced(
        ops in proptest::collection::vec(
            (any::<bool>(), 0..100_000u32),
            LARGE_MAP_SIZE..=LARGE_MAP_SIZE,
        ),
    ) {
        let mut tree = RbTree::<u32, ()>::with_capacity(LARGE_MAP_SIZE);
        let mut shadow = BTreeMap::new();

        // About one op in eight is a removal, so the tree grows toward the
        // full op count.
        for (i, (remove, key)) in ops.into_iter().enumerate() {
            if remove && key % 4 == 0 {
                prop_assert_eq!(tree.remove(&key).is_some(), shadow.remove(&key).is_some());
            } else {
                tree.insert_unique(key, ());
                shadow.insert(key, ());
            }
            if i % LARGE_VERIFY_EVERY == 0 {
                prop_assert!(tree.verify().is_ok(), "{:?}", tree.verify());
                prop_assert!(tree.height() <= height_bound(tree.len()));
            }
        }

        prop_assert!(tree.verify().is_ok(), "{:?}", tree.verify());
        prop_assert!(tree.height() <= height_bound(tree.len()));
        prop_assert_eq!(tree.len(), shadow.len());
        let keys: Vec<u32> = tree.iter().map(|(k, _)| *k).collect();
        let expected: Vec<u32> = shadow.into_keys().collect();
        prop_assert_eq!(keys, expected);
    }
}

#[test]
fn ten_thousand_shuffled_keys_stay_within_height_bound() {
    let mut keys: Vec<u32> = (0..10_000).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(0x5EED));

    let mut tree = RbTree::<u32, ()>::with_capacity(keys.len());
    for k in &keys {
        tree.insert_unique(*k, ());
    }
    tree.verify().unwrap();
    assert!(tree.height() <= height_bound(tree.len()));

    for k in keys.iter().take(5_000) {
        tree.remove(k);
    }
    tree.verify().unwrap();
    assert_eq!(tree.len(), 5_000);
    assert!(tree.height() <= height_bound(tree.len()));
}
