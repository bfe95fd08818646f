use core::fmt;

use crate::RBTree;
use crate::node::{Color, Link, NodeRef};

/// A broken red-black tree invariant, as reported by [`RBTree::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The root node is red.
    RedRoot(NodeRef),
    /// The key of `node` is not strictly on the correct side of its ancestor `bound`.
    OrderViolation { node: NodeRef, bound: NodeRef },
    /// The red `node` has a red `parent`.
    RedRedViolation { node: NodeRef, parent: NodeRef },
    /// The paths through the left and right subtree of `node` have different black heights.
    BlackHeightMismatch {
        node: NodeRef,
        left: usize,
        right: usize,
    },
    /// The parent link of `node` does not point at the node it hangs from.
    BrokenParentLink {
        node: NodeRef,
        expected: Option<NodeRef>,
        found: Option<NodeRef>,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RedRoot(root) => write!(f, "root {root:?} is red"),
            Violation::OrderViolation { node, bound } => {
                write!(f, "ordering violation: {node:?} is misplaced relative to {bound:?}")
            }
            Violation::RedRedViolation { node, parent } => {
                write!(f, "red node {node:?} has red parent {parent:?}")
            }
            Violation::BlackHeightMismatch { node, left, right } => write!(
                f,
                "black height mismatch below {node:?}: left is {left}, right is {right}"
            ),
            Violation::BrokenParentLink {
                node,
                expected,
                found,
            } => write!(
                f,
                "{node:?} has parent link {found:?} but hangs from {expected:?}"
            ),
        }
    }
}

impl core::error::Error for Violation {}

impl<K: Ord> RBTree<K> {
    /// Checks all red-black tree invariants, returning the first violation found.
    ///
    /// Walks the entire tree, so this takes linear time.
    ///
    /// # Errors
    ///
    /// Returns the [`Violation`] describing the first broken invariant.
    pub fn validate(&self) -> Result<(), Violation> {
        let Some(root) = self.root else {
            return Ok(());
        };

        if self.pool.is_red(Some(root)) {
            return Err(Violation::RedRoot(root));
        }

        self.validate_inner(root, None, None, None).map(|_| ())
    }

    /// Returns `true` if the tree upholds all red-black tree invariants.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Asserts as many invariants about this particular tree as possible.
    ///
    /// # Panics
    ///
    /// Panics with a description of the violation if any red-black tree invariant is broken.
    #[track_caller]
    pub fn assert_valid(&self) {
        if let Err(violation) = self.validate() {
            panic!("invalid red-black tree: {violation}");
        }
    }

    /// Returns the black height of the subtree at `node`, counting the sentinel leaves.
    fn validate_inner(
        &self,
        node: NodeRef,
        parent: Link,
        lower: Link,
        upper: Link,
    ) -> Result<usize, Violation> {
        let inner = self.pool.get(node);

        if inner.parent != parent {
            return Err(Violation::BrokenParentLink {
                node,
                expected: parent,
                found: inner.parent,
            });
        }

        // Keys must be strictly between the closest ancestors we descended left and right from.
        if let Some(bound) = lower.filter(|lower| self.pool.get(*lower).key >= inner.key) {
            return Err(Violation::OrderViolation { node, bound });
        }
        if let Some(bound) = upper.filter(|upper| self.pool.get(*upper).key <= inner.key) {
            return Err(Violation::OrderViolation { node, bound });
        }

        if let Some(parent) =
            parent.filter(|parent| inner.color == Color::Red && self.pool.is_red(Some(*parent)))
        {
            return Err(Violation::RedRedViolation { node, parent });
        }

        let left = match inner.left {
            Some(left) => self.validate_inner(left, Some(node), lower, Some(node))?,
            None => 1,
        };
        let right = match inner.right {
            Some(right) => self.validate_inner(right, Some(node), Some(node), upper)?,
            None => 1,
        };

        if left != right {
            return Err(Violation::BlackHeightMismatch { node, left, right });
        }

        Ok(left + usize::from(inner.color == Color::Black))
    }
}

impl<K> RBTree<K> {
    /// Returns the number of black nodes on a path from the root down to a sentinel leaf,
    /// including the root and the sentinel.
    ///
    /// This is the same for every path in a valid tree, an empty tree has black height 1.
    pub fn black_height(&self) -> usize {
        let mut height = 1;
        let mut curr = self.root;
        while let Some(node) = curr {
            if !self.pool.is_red(Some(node)) {
                height += 1;
            }
            curr = self.pool.get(node).left;
        }
        height
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use super::*;
    use crate::Shape;

    #[test]
    fn empty_tree_is_valid() {
        let tree = RBTree::<u8>::new();
        assert_eq!(tree.validate(), Ok(()));
        assert_eq!(tree.black_height(), 1);
    }

    #[test]
    fn valid_tree() {
        let tree = RBTree::from_shape(Shape::black(
            2,
            Shape::single(1, Color::Black),
            Shape::black(4, Shape::single(3, Color::Red), Shape::leaf()),
        ));
        assert!(tree.is_valid());
        assert_eq!(tree.black_height(), 3);
    }

    #[test]
    fn red_root() {
        let tree = RBTree::from_shape(Shape::single(1, Color::Red));
        assert_eq!(tree.validate(), Err(Violation::RedRoot(tree.root.unwrap())));
    }

    #[test]
    fn red_red() {
        let tree = RBTree::from_shape(Shape::black(
            3,
            Shape::red(2, Shape::single(1, Color::Red), Shape::leaf()),
            Shape::single(4, Color::Red),
        ));
        assert!(matches!(
            tree.validate(),
            Err(Violation::RedRedViolation { .. })
        ));
    }

    #[test]
    fn black_height_mismatch() {
        let tree = RBTree::from_shape(Shape::black(
            2,
            Shape::single(1, Color::Black),
            Shape::leaf(),
        ));
        assert_eq!(
            tree.validate(),
            Err(Violation::BlackHeightMismatch {
                node: tree.root.unwrap(),
                left: 2,
                right: 1,
            })
        );
    }

    #[test]
    fn ordering_is_checked_against_all_ancestors() {
        // 7 is greater than its parent 3 but sits in the left subtree of 5
        let tree = RBTree::from_shape(Shape::black(
            5,
            Shape::black(3, Shape::leaf(), Shape::single(7, Color::Red)),
            Shape::single(8, Color::Black),
        ));
        let root = tree.root.unwrap();

        let Err(Violation::OrderViolation { bound, .. }) = tree.validate() else {
            panic!("expected an ordering violation");
        };
        assert_eq!(bound, root);
    }

    #[test]
    fn equal_keys_violate_strict_ordering() {
        let tree = RBTree::from_shape(Shape::black(
            1,
            Shape::single(1, Color::Red),
            Shape::leaf(),
        ));
        assert!(matches!(
            tree.validate(),
            Err(Violation::OrderViolation { .. })
        ));
    }

    #[test]
    fn broken_parent_link() {
        let mut tree = RBTree::from_shape(Shape::black(
            2,
            Shape::single(1, Color::Red),
            Shape::single(3, Color::Red),
        ));
        let root = tree.root.unwrap();
        let left = tree.pool.get(root).left.unwrap();
        let right = tree.pool.get(root).right.unwrap();
        tree.pool.set_parent(right, Some(left));

        assert_eq!(
            tree.validate(),
            Err(Violation::BrokenParentLink {
                node: right,
                expected: Some(root),
                found: Some(left),
            })
        );
    }

    #[test]
    #[should_panic(expected = "invalid red-black tree: root #0 is red")]
    fn assert_valid_panics_with_violation() {
        RBTree::from_shape(Shape::single(1, Color::Red)).assert_valid();
    }

    #[test]
    fn violation_display() {
        let tree = RBTree::from_shape(Shape::black(
            2,
            Shape::single(1, Color::Black),
            Shape::leaf(),
        ));
        let violation = tree.validate().unwrap_err();
        assert_eq!(
            violation.to_string(),
            "black height mismatch below #0: left is 2, right is 1"
        );
    }
}
