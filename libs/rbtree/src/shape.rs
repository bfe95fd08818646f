//! Owned descriptions of tree structure.
//!
//! A [`Shape`] spells out every node of a tree together with its color. It is used to build a
//! tree with an exact structure ([`RBTree::from_shape`]) and to export a tree's structure
//! ([`RBTree::to_shape`]) so that two trees can be compared node by node with [`same_shape`].

use alloc::boxed::Box;

use crate::node::{Color, Link, Node, NodePool};
use crate::utils::Side;
use crate::RBTree;

/// The structure of a (sub)tree: either the sentinel leaf, or a node with a key, a color and
/// two subtrees.
#[derive(Debug, Clone)]
pub enum Shape<K> {
    /// The black sentinel leaf.
    Leaf,
    /// A real node.
    Node {
        key: K,
        color: Color,
        left: Box<Shape<K>>,
        right: Box<Shape<K>>,
    },
}

impl<K> Shape<K> {
    /// The sentinel leaf.
    #[must_use]
    pub const fn leaf() -> Self {
        Shape::Leaf
    }

    /// A red node with the given subtrees.
    #[must_use]
    pub fn red(key: K, left: Shape<K>, right: Shape<K>) -> Self {
        Self::node(key, Color::Red, left, right)
    }

    /// A black node with the given subtrees.
    #[must_use]
    pub fn black(key: K, left: Shape<K>, right: Shape<K>) -> Self {
        Self::node(key, Color::Black, left, right)
    }

    /// A node with both children being sentinels.
    #[must_use]
    pub fn single(key: K, color: Color) -> Self {
        Self::node(key, color, Shape::Leaf, Shape::Leaf)
    }

    /// A node of the given color with the given subtrees.
    #[must_use]
    pub fn node(key: K, color: Color, left: Shape<K>, right: Shape<K>) -> Self {
        Shape::Node {
            key,
            color,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns `true` for the sentinel leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Shape::Leaf)
    }

    /// Key of the root of this shape, if it is a real node.
    pub fn key(&self) -> Option<&K> {
        match self {
            Shape::Leaf => None,
            Shape::Node { key, .. } => Some(key),
        }
    }

    /// Color of the root of this shape; the sentinel leaf is black.
    pub fn color(&self) -> Color {
        match self {
            Shape::Leaf => Color::Black,
            Shape::Node { color, .. } => *color,
        }
    }

    /// The left subtree; the sentinel leaf's subtrees are sentinels themselves.
    pub fn left(&self) -> &Shape<K> {
        match self {
            Shape::Leaf => self,
            Shape::Node { left, .. } => left,
        }
    }

    /// The right subtree; the sentinel leaf's subtrees are sentinels themselves.
    pub fn right(&self) -> &Shape<K> {
        match self {
            Shape::Leaf => self,
            Shape::Node { right, .. } => right,
        }
    }
}

/// Deep structural comparison: same keys, same colors, same child positions.
pub fn same_shape<K: PartialEq>(a: &Shape<K>, b: &Shape<K>) -> bool {
    match (a, b) {
        (Shape::Leaf, Shape::Leaf) => true,
        (
            Shape::Node {
                key: a_key,
                color: a_color,
                left: a_left,
                right: a_right,
            },
            Shape::Node {
                key: b_key,
                color: b_color,
                left: b_left,
                right: b_right,
            },
        ) => {
            a_color == b_color
                && a_key == b_key
                && same_shape(a_left, b_left)
                && same_shape(a_right, b_right)
        }
        _ => false,
    }
}

impl<K> RBTree<K> {
    /// Creates a tree with exactly the given structure.
    ///
    /// No rebalancing and no validation is performed, the result may well violate the
    /// red-black invariants (see [`RBTree::validate`]). This exists to set up fixed shapes in
    /// tests; regular code should build trees through [`RBTree::insert`].
    #[must_use]
    pub fn from_shape(shape: Shape<K>) -> Self {
        let mut tree = Self::new();
        tree.root = Self::build(&mut tree.pool, shape);
        tree
    }

    fn build(pool: &mut NodePool<K>, shape: Shape<K>) -> Link {
        match shape {
            Shape::Leaf => None,
            Shape::Node {
                key,
                color,
                left,
                right,
            } => {
                let node = pool.alloc(Node::new(key, color));

                let left = Self::build(pool, *left);
                pool.attach(node, Side::Left, left);

                let right = Self::build(pool, *right);
                pool.attach(node, Side::Right, right);

                Some(node)
            }
        }
    }

    /// Exports the structure of this tree.
    pub fn to_shape(&self) -> Shape<K>
    where
        K: Clone,
    {
        self.shape_of(self.root)
    }

    pub(crate) fn shape_of(&self, link: Link) -> Shape<K>
    where
        K: Clone,
    {
        match link {
            None => Shape::Leaf,
            Some(node) => {
                let inner = self.pool.get(node);
                Shape::node(
                    inner.key.clone(),
                    inner.color,
                    self.shape_of(inner.left),
                    self.shape_of(inner.right),
                )
            }
        }
    }
}
