mod common;

use rand::seq::SliceRandom;
use rbtree::RBTree;

use crate::common::{assert_shape, b, bl, insert_all, nil, r, rl};

#[test_log::test]
fn smoke() {
    let tree = insert_all([1, 2, 3]);

    assert_shape(&tree, &b(2, rl(1), rl(3)));
    assert!(tree.contains(&1));
    assert!(tree.contains(&2));
    assert!(tree.contains(&3));
    assert!(!tree.contains(&4));
    assert_eq!(tree.len(), 3);
}

#[test_log::test]
fn recolor_then_rotate() {
    assert_shape(&insert_all([1, 2, 4, 3]), &b(2, bl(1), b(4, rl(3), nil())));
    assert_shape(
        &insert_all([1, 2, 5, 3, 4]),
        &b(2, bl(1), b(4, rl(3), rl(5))),
    );
    assert_shape(
        &insert_all([1, 0, 3, 5, 4]),
        &b(1, bl(0), b(4, rl(3), rl(5))),
    );
    assert_shape(
        &insert_all([5, 4, 3, 2, 1]),
        &b(4, b(2, rl(1), rl(3)), bl(5)),
    );
}

#[test_log::test]
fn red_uncle_propagates_to_root() {
    // inserting 6 recolors below the black root without any rotation
    let tree = insert_all(1..=6);

    assert_shape(&tree, &b(2, bl(1), r(4, bl(3), b(5, nil(), rl(6)))));
}

#[test]
fn duplicate_insert_is_a_no_op() {
    let mut tree = insert_all([10, 5, 15, 3, 7]);
    let before = tree.to_shape();

    for key in [10, 5, 15, 3, 7] {
        assert!(!tree.insert(key));
    }

    assert_eq!(tree.len(), 5);
    assert_shape(&tree, &before);
}

#[test]
fn insert_after_remove_reuses_slots() {
    let mut tree = insert_all(0..32);
    for i in (0..32).step_by(2) {
        assert_eq!(tree.remove(&i), Ok(i));
    }
    for i in (0..32).step_by(2) {
        assert!(tree.insert(i));
        tree.assert_valid();
    }

    assert!(tree.iter().copied().eq(0..32));
}

#[test]
fn shuffled_inserts_iterate_in_order() {
    let mut keys: Vec<u32> = (0..1_000).collect();
    keys.shuffle(&mut rand::rng());

    let tree = insert_all(keys.iter().copied());

    assert_eq!(tree.len(), 1_000);
    assert!(tree.iter().copied().eq(0..1_000));
    assert!(tree.iter().rev().copied().eq((0..1_000).rev()));
    assert_eq!(tree.first(), Some(&0));
    assert_eq!(tree.last(), Some(&999));
}

#[test]
fn string_keys() {
    let mut tree: RBTree<String> = RBTree::new();
    for word in ["kiwi", "apple", "mango", "banana", "cherry"] {
        assert!(tree.insert(word.to_string()));
    }
    tree.assert_valid();

    assert!(tree.contains("mango"));
    assert_eq!(tree.get("kiwi").map(String::as_str), Some("kiwi"));
    assert_eq!(
        tree.iter().map(String::as_str).collect::<Vec<_>>(),
        ["apple", "banana", "cherry", "kiwi", "mango"]
    );
}
