use core::cmp::Ordering;

use crate::RBTree;
use crate::node::{Color, Node, NodeRef};
use crate::utils::Side;

impl<K: Ord> RBTree<K> {
    /// Inserts a key into the tree.
    ///
    /// Returns `true` if the key was inserted and `false` if an equal key was already present,
    /// in which case the tree is left untouched and `key` is dropped.
    pub fn insert(&mut self, key: K) -> bool {
        let Some(mut curr) = self.root else {
            self.root = Some(self.pool.alloc(Node::new(key, Color::Black)));
            return true;
        };

        // Descend to the leaf slot the key belongs into.
        let side = loop {
            let curr_node = self.pool.get(curr);
            let side = match key.cmp(&curr_node.key) {
                Ordering::Equal => return false,
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };

            match curr_node.child(side) {
                Some(child) => curr = child,
                None => break side,
            }
        };

        let node = self.pool.alloc(Node::new(key, Color::Red));
        self.pool.attach(curr, side, Some(node));

        if self.pool.is_red(Some(curr)) {
            log::trace!("inserted {node:?} below red {curr:?}, rebalancing");
            self.balance_after_insert(node);
        }

        true
    }
}

impl<K> RBTree<K> {
    /// Restores the red-black invariants after `x` was attached as a red node.
    ///
    /// The only invariant that can be broken is "no red node has a red child", between `x` and
    /// its parent. Each iteration either repairs it locally or pushes it two levels up.
    pub(crate) fn balance_after_insert(&mut self, mut x: NodeRef) {
        loop {
            let Some(parent) = self.pool.parent(x) else {
                // x is the root, the recoloring below takes care of it
                break;
            };

            if !self.pool.is_red(Some(x)) || !self.pool.is_red(Some(parent)) {
                break;
            }

            // A red parent can't be the root in a valid tree, but if it is, painting it
            // black is all that's needed.
            let Some(grandparent) = self.pool.parent(parent) else {
                break;
            };

            let parent_side = self.pool.side_of(Some(parent), grandparent);
            let uncle = self.pool.child(grandparent, parent_side.opposite());

            if let Some(uncle) = uncle.filter(|uncle| self.pool.is_red(Some(*uncle))) {
                self.insert_case_red_uncle(x, uncle);
                x = grandparent;
            } else if self.pool.side_of(Some(x), parent) != parent_side {
                // zig-zag; straightening it moves the old parent into x's former position
                // where the next iteration resolves it as a straight line
                self.insert_case_zig_zag(x);
                x = parent;
            } else {
                self.insert_case_straight(x);
                break;
            }
        }

        // Finally we correct the root node to be black.
        if let Some(root) = self.root {
            self.pool.set_color(root, Color::Black);
        }
    }

    /// Parent and uncle are red: push the grandparent's blackness down one level.
    pub(crate) fn insert_case_red_uncle(&mut self, x: NodeRef, uncle: NodeRef) {
        let parent = self.pool.parent(x).expect("red-uncle case requires a parent");
        let grandparent = self
            .pool
            .parent(parent)
            .expect("red-uncle case requires a grandparent");
        debug_assert!(self.pool.is_red(Some(parent)) && self.pool.is_red(Some(uncle)));
        debug_assert_eq!(self.pool.parent(uncle), Some(grandparent));

        log::trace!("insert: red uncle {uncle:?}, recoloring {grandparent:?}");

        self.pool.set_color(parent, Color::Black);
        self.pool.set_color(uncle, Color::Black);
        self.pool.set_color(grandparent, Color::Red);
    }

    /// `x` is an inner grandchild (left-right or right-left): rotate the parent so `x` and its
    /// former parent form a straight line. The colors are left alone.
    pub(crate) fn insert_case_zig_zag(&mut self, x: NodeRef) {
        let parent = self.pool.parent(x).expect("zig-zag case requires a parent");
        let side = self.pool.side_of(Some(x), parent);

        log::trace!("insert: {side}-zig-zag at {x:?}, rotating {parent:?}");

        self.rotate(parent, side.opposite());
    }

    /// `x` is an outer grandchild (left-left or right-right) with a black uncle: rotate the
    /// grandparent away from `x` and swap the colors of parent and grandparent.
    pub(crate) fn insert_case_straight(&mut self, x: NodeRef) {
        let parent = self.pool.parent(x).expect("straight case requires a parent");
        let grandparent = self
            .pool
            .parent(parent)
            .expect("straight case requires a grandparent");
        let side = self.pool.side_of(Some(parent), grandparent);
        debug_assert_eq!(self.pool.side_of(Some(x), parent), side);
        debug_assert!(!self.pool.is_red(self.pool.child(grandparent, side.opposite())));

        log::trace!("insert: {side}-{side} at {x:?}, rotating {grandparent:?}");

        self.rotate(grandparent, side.opposite());
        self.pool.set_color(parent, Color::Black);
        self.pool.set_color(grandparent, Color::Red);
    }
}
