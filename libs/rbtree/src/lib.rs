//! # A red-black tree.
//!
//! [`RBTree`] is an ordered set of keys kept in a *self-balancing binary search tree*. Every node
//! is colored red or black and the tree maintains the classic red-black invariants:
//!
//! 1. keys are in binary-search-tree order,
//! 2. no red node has a red child,
//! 3. every path from a node down to a leaf passes the same number of black nodes,
//! 4. the root is black,
//! 5. leaves (the sentinels below the last real nodes) are black.
//!
//! Together these bound the height of the tree by `2 log2(n + 1)`, so lookups, insertions and
//! removals all complete in logarithmic time.
//!
//! Nodes live in a pool owned by the tree and refer to each other by index, parent links are
//! only used to walk back up the tree during rebalancing and iteration. The crate is `no_std`
//! (it requires `alloc`) and contains no `unsafe` code.
//!
//! ```rust
//! use rbtree::RBTree;
//!
//! let mut tree = RBTree::new();
//! tree.insert(3);
//! tree.insert(1);
//! tree.insert(2);
//!
//! assert!(tree.contains(&2));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! assert_eq!(tree.remove(&2), Ok(2));
//! assert!(tree.remove(&2).is_err());
//! assert!(tree.is_valid());
//! ```
//!
//! ## features
//!
//! The following features are available:
//!
//! | Feature | Default | Explanation                                                                           |
//! |:--------|:--------|:--------------------------------------------------------------------------------------|
//! | `dot`   | `false` | Enables the `RBTree::dot` method, which allows display of the tree in [graphviz format] |
//!
//! [graphviz format]: https://graphviz.org/doc/info/lang.html

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[cfg(feature = "dot")]
mod dot;
mod insert;
mod iter;
mod node;
mod remove;
mod rotate;
mod shape;
mod utils;
mod validate;

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "dot")]
pub use dot::Dot;
pub use iter::Iter;
pub use node::{Color, NodeRef};
pub use shape::{Shape, same_shape};
pub use validate::Violation;

use crate::node::{Link, NodePool};

/// Error type returned by [`RBTree::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    /// No entry with the given key is part of the tree.
    NotFound,
}

impl fmt::Display for RemoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveError::NotFound => write!(f, "key not found"),
        }
    }
}

impl core::error::Error for RemoveError {}

/// An ordered set backed by a red-black tree.
///
/// Keys must form a total order. Each key is stored at most once, inserting a key that is
/// already present leaves the tree untouched.
#[derive(Clone)]
pub struct RBTree<K> {
    pub(crate) root: Link,
    pub(crate) pool: NodePool<K>,
}

impl<K> Default for RBTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RBTree<K> {
    /// Creates a new, empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            pool: NodePool::new(),
        }
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Returns `true` if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.root.is_none(), self.len() == 0);
        self.len() == 0
    }

    /// Removes all keys from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.pool.clear();
    }

    /// Returns `true` if the tree contains the given key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form *must* match the ordering on the key type.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_internal(key).is_some()
    }

    /// Returns a reference to the stored key equal to the given one.
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_internal(key).map(|node| &self.pool.get(node).key)
    }

    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.root
            .map(|root| &self.pool.get(self.pool.find_minimum(root)).key)
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.root
            .map(|root| &self.pool.get(self.pool.find_maximum(root)).key)
    }

    /// Gets an iterator over the keys in the tree, in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            head: self.root.map(|root| self.pool.find_minimum(root)),
            tail: self.root.map(|root| self.pool.find_maximum(root)),
            len: self.len(),
            tree: self,
        }
    }

    /// Renders the tree in graphviz format.
    #[cfg(feature = "dot")]
    pub fn dot(&self) -> Dot<'_, K> {
        Dot { tree: self }
    }

    pub(crate) fn find_internal<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut tree = self.root;
        while let Some(curr) = tree {
            let curr_node = self.pool.get(curr);

            match key.cmp(curr_node.key.borrow()) {
                Ordering::Equal => return Some(curr),
                Ordering::Less => tree = curr_node.left,
                Ordering::Greater => tree = curr_node.right,
            }
        }

        None
    }

    /// Replaces `old` with `new` in `old`'s parent (or as the root).
    pub(crate) fn replace_in_parent(&mut self, old: NodeRef, new: Link) {
        let parent = self.pool.parent(old);
        match parent {
            Some(parent) => {
                let side = self.pool.side_of(Some(old), parent);
                self.pool.attach(parent, side, new);
            }
            None => {
                self.root = new;
                if let Some(new) = new {
                    self.pool.set_parent(new, None);
                }
            }
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for RBTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for RBTree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = RBTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RBTree<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a RBTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
