use crate::RBTree;
use crate::node::NodeRef;
use crate::utils::Side;

impl<K> RBTree<K> {
    /// Rotates `b` towards `side`, lifting its child on the opposite side into its place.
    ///
    /// ```text
    ///       b                  d
    ///      / \     left       / \
    ///     a   d    ---->     b   e
    ///        / \            / \
    ///       c   e          a   c
    /// ```
    ///
    /// `d` takes `b`'s position under `b`'s former parent, `b` becomes `d`'s `side` child and
    /// `d`'s former `side` child `c` moves over to `b`. Returns `d`.
    ///
    /// # Panics
    ///
    /// Panics if `b` has no child opposite of `side` to rotate into its place.
    pub(crate) fn rotate(&mut self, b: NodeRef, side: Side) -> NodeRef {
        let Some(d) = self.pool.child(b, side.opposite()) else {
            panic!("cannot rotate {b:?} {side}: {} child is a sentinel", side.opposite());
        };
        let c = self.pool.child(d, side);

        // Rotate d into place
        self.replace_in_parent(b, Some(d));

        // make c the `opposite side`-child of b
        self.pool.attach(b, side.opposite(), c);

        // make b the `side`-child of d
        self.pool.attach(d, side, Some(b));

        d
    }

    /// Rotates `b` left, lifting its right child into its place.
    pub(crate) fn rotate_left(&mut self, b: NodeRef) -> NodeRef {
        self.rotate(b, Side::Left)
    }

    /// Rotates `b` right, lifting its left child into its place.
    pub(crate) fn rotate_right(&mut self, b: NodeRef) -> NodeRef {
        self.rotate(b, Side::Right)
    }
}
