use core::borrow::Borrow;

use crate::node::{Color, Link, NodeRef};
use crate::utils::Side;
use crate::{RBTree, RemoveError};

impl<K> RBTree<K> {
    /// Removes the key from the tree, returning the stored key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form *must* match the ordering on the key type.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::NotFound`] if no equal key is part of the tree. The tree is left
    /// unchanged in that case.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<K, RemoveError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.find_internal(key).ok_or(RemoveError::NotFound)?;
        Ok(self.remove_internal(node))
    }

    pub(crate) fn remove_internal(&mut self, mut node: NodeRef) -> K {
        // A node with two children is replaced by its in-order predecessor. Exchanging the keys
        // keeps the ordering intact and leaves us with a node that has at most one child to
        // actually unlink.
        if let (Some(left), Some(_)) = (self.pool.get(node).left, self.pool.get(node).right) {
            let predecessor = self.pool.find_maximum(left);
            self.pool.swap_keys(node, predecessor);
            node = predecessor;
        }

        let inner = self.pool.get(node);
        debug_assert!(inner.left.is_none() || inner.right.is_none());
        let child = inner.left.or(inner.right);
        let parent = inner.parent;
        let color = inner.color;

        self.replace_in_parent(node, child);
        let removed = self.pool.free(node);

        // Removing a red node never changes a black height.
        if color == Color::Black {
            if let Some(child) = child.filter(|child| self.pool.is_red(Some(*child))) {
                // the red child takes over the removed black unit
                self.pool.set_color(child, Color::Black);
            } else if let Some(parent) = parent {
                log::trace!("removed black {node:?}, rebalancing below {parent:?}");
                self.balance_after_remove(child, parent);
            }
        }

        if let Some(root) = self.root {
            self.pool.set_color(root, Color::Black);
        }

        removed.key
    }

    /// Restores the red-black invariants after a black node was removed.
    ///
    /// `x` (possibly the sentinel) is "doubly black": every path through it is one black node
    /// short. `parent` is passed explicitly because a sentinel has no parent link of its own.
    pub(crate) fn balance_after_remove(&mut self, mut x: Link, mut parent: NodeRef) {
        loop {
            let side = self.pool.side_of(x, parent);
            let sibling = self
                .pool
                .child(parent, side.opposite())
                .expect("doubly black node must have a sibling");
            let near = self.pool.child(sibling, side);
            let far = self.pool.child(sibling, side.opposite());

            if !self.pool.is_red(Some(sibling)) && self.pool.is_red(far) {
                self.remove_case_red_far_nephew(parent, side);
                break;
            } else if self.pool.is_red(Some(sibling)) {
                self.remove_case_red_sibling(parent, side);
            } else if self.pool.is_red(near) {
                self.remove_case_red_near_nephew(parent, side);
            } else {
                let Some(next) = self.remove_case_black_nephews(parent, side) else {
                    break;
                };
                let Some(grandparent) = self.pool.parent(next) else {
                    // the missing black unit reached the root where it is shared by all paths
                    break;
                };
                x = Some(next);
                parent = grandparent;
            }
        }
    }

    /// Cases 1 and 2: the sibling is red, so the parent is black.
    ///
    /// Rotating the parent towards `x` makes the sibling's black `x`-side child the new
    /// sibling. Nothing is resolved yet, but one of the other cases applies afterwards.
    pub(crate) fn remove_case_red_sibling(&mut self, parent: NodeRef, side: Side) {
        let sibling = self
            .pool
            .child(parent, side.opposite())
            .expect("red-sibling case requires a sibling");
        debug_assert!(self.pool.is_red(Some(sibling)));
        debug_assert!(!self.pool.is_red(Some(parent)));

        log::trace!("remove: {side} case, red sibling {sibling:?}, rotating {parent:?}");

        self.rotate(parent, side);
        self.pool.set_color(parent, Color::Red);
        self.pool.set_color(sibling, Color::Black);
    }

    /// Cases 3 and 4: the sibling is black, its near child red and its far child black.
    ///
    /// Rotating the sibling away from `x` turns the red near nephew into a black sibling with a
    /// red far child, the shape resolved by [`RBTree::remove_case_red_far_nephew`].
    pub(crate) fn remove_case_red_near_nephew(&mut self, parent: NodeRef, side: Side) {
        let sibling = self
            .pool
            .child(parent, side.opposite())
            .expect("red-near-nephew case requires a sibling");
        let near = self
            .pool
            .child(sibling, side)
            .expect("red-near-nephew case requires a near nephew");
        debug_assert!(!self.pool.is_red(Some(sibling)));
        debug_assert!(self.pool.is_red(Some(near)));
        debug_assert!(!self.pool.is_red(self.pool.child(sibling, side.opposite())));

        log::trace!("remove: {side} case, red near nephew {near:?}, rotating {sibling:?}");

        self.rotate(sibling, side.opposite());
        self.pool.set_color(near, Color::Black);
        self.pool.set_color(sibling, Color::Red);
    }

    /// Cases 5 and 6: the sibling and both its children are black.
    ///
    /// Painting the sibling red takes one black unit out of the sibling's subtree. A red parent
    /// absorbs the deficit by turning black. Otherwise the parent becomes the doubly black node
    /// and is returned to continue one level up.
    pub(crate) fn remove_case_black_nephews(
        &mut self,
        parent: NodeRef,
        side: Side,
    ) -> Option<NodeRef> {
        let sibling = self
            .pool
            .child(parent, side.opposite())
            .expect("black-nephews case requires a sibling");
        debug_assert!(!self.pool.is_red(Some(sibling)));
        debug_assert!(!self.pool.is_red(self.pool.child(sibling, Side::Left)));
        debug_assert!(!self.pool.is_red(self.pool.child(sibling, Side::Right)));

        log::trace!("remove: {side} case, black nephews below {sibling:?}");

        self.pool.set_color(sibling, Color::Red);

        if self.pool.is_red(Some(parent)) {
            self.pool.set_color(parent, Color::Black);
            None
        } else {
            Some(parent)
        }
    }

    /// Cases 7 and 8: the sibling is black and its far child red.
    ///
    /// Rotating the parent towards `x` puts the sibling in the parent's place with the parent's
    /// color. The parent and the far nephew turn black, which adds the missing black unit on
    /// `x`'s side and keeps the far side's count. This always resolves the deficit.
    pub(crate) fn remove_case_red_far_nephew(&mut self, parent: NodeRef, side: Side) {
        let sibling = self
            .pool
            .child(parent, side.opposite())
            .expect("red-far-nephew case requires a sibling");
        let far = self
            .pool
            .child(sibling, side.opposite())
            .expect("red-far-nephew case requires a far nephew");
        debug_assert!(!self.pool.is_red(Some(sibling)));
        debug_assert!(self.pool.is_red(Some(far)));

        log::trace!("remove: {side} case, red far nephew {far:?}, rotating {parent:?}");

        let parent_color = self.pool.get(parent).color;
        self.rotate(parent, side);
        self.pool.set_color(sibling, parent_color);
        self.pool.set_color(parent, Color::Black);
        self.pool.set_color(far, Color::Black);
    }
}
