#![allow(unused, reason = "not used by all tests")]

use std::fmt;

use rbtree::{Color, RBTree, Shape, same_shape};

/// Black node.
pub fn b<K>(key: K, left: Shape<K>, right: Shape<K>) -> Shape<K> {
    Shape::black(key, left, right)
}

/// Red node.
pub fn r<K>(key: K, left: Shape<K>, right: Shape<K>) -> Shape<K> {
    Shape::red(key, left, right)
}

/// Black node without children.
pub fn bl<K>(key: K) -> Shape<K> {
    Shape::single(key, Color::Black)
}

/// Red node without children.
pub fn rl<K>(key: K) -> Shape<K> {
    Shape::single(key, Color::Red)
}

/// Sentinel leaf.
pub fn nil<K>() -> Shape<K> {
    Shape::leaf()
}

#[track_caller]
pub fn assert_shape<K>(tree: &RBTree<K>, expected: &Shape<K>)
where
    K: Clone + PartialEq + fmt::Debug,
{
    let actual = tree.to_shape();
    assert!(
        same_shape(&actual, expected),
        "tree shape differs\n  actual: {actual:?}\nexpected: {expected:?}"
    );
}

pub fn insert_all<K: Ord>(keys: impl IntoIterator<Item = K>) -> RBTree<K> {
    let mut tree = RBTree::new();
    for key in keys {
        assert!(tree.insert(key));
        tree.assert_valid();
    }
    tree
}

/// The 10-node tree rooted at 4 used by several removal scenarios.
pub fn ten_nodes() -> Shape<u32> {
    b(
        4,
        b(2, bl(1), bl(3)),
        b(6, bl(5), r(8, bl(7), b(9, nil(), rl(10)))),
    )
}
