use alloc::vec::Vec;
use core::{fmt, mem};

use crate::utils::Side;

/// A reference to a node inside a `NodePool`.
///
/// This is encoded as a `u32` index into the pool to save space.
///
/// This doesn't have a lifetime, but is logically bound to the `NodePool` that
/// it was allocated from and is only valid until the node is freed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(u32);

impl NodeRef {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A child or parent slot. `None` is the black sentinel leaf.
pub(crate) type Link = Option<NodeRef>;

/// The color of a node in a [`RBTree`](crate::RBTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, color: Color) -> Self {
        Self {
            key,
            color,
            parent: None,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn replace_child(&mut self, side: Side, child: Link) -> Link {
        match side {
            Side::Left => mem::replace(&mut self.left, child),
            Side::Right => mem::replace(&mut self.right, child),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Clone)]
enum Slot<K> {
    Occupied(Node<K>),
    /// Freed slot, chained into the pool's free list.
    Vacant(Option<NodeRef>),
}

/// Backing storage for all nodes of a tree.
///
/// Freed slots form a linked list threaded through the vacant entries and
/// are handed out again before the pool grows.
#[derive(Clone)]
pub(crate) struct NodePool<K> {
    slots: Vec<Slot<K>>,
    free_list: Option<NodeRef>,
    len: usize,
}

impl<K> NodePool<K> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Frees all `NodeRef`s allocated from this pool.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list = None;
        self.len = 0;
    }

    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeRef {
        self.len += 1;

        // First try re-using a node from the free list.
        if let Some(free) = self.free_list {
            let slot = &mut self.slots[free.index()];
            let Slot::Vacant(next) = *slot else {
                panic!("free list entry {free:?} is occupied");
            };
            *slot = Slot::Occupied(node);
            self.free_list = next;
            return free;
        }

        let index = u32::try_from(self.slots.len())
            .ok()
            .filter(|index| *index != u32::MAX)
            .expect("exceeded RBTree maximum node count");
        self.slots.push(Slot::Occupied(node));
        NodeRef(index)
    }

    /// Frees the node, returning its contents. This invalidates `node`.
    pub(crate) fn free(&mut self, node: NodeRef) -> Node<K> {
        let slot = mem::replace(&mut self.slots[node.index()], Slot::Vacant(self.free_list));
        let Slot::Occupied(inner) = slot else {
            panic!("double free of {node:?}");
        };
        self.free_list = Some(node);
        self.len -= 1;
        inner
    }

    #[inline]
    #[track_caller]
    pub(crate) fn get(&self, node: NodeRef) -> &Node<K> {
        match &self.slots[node.index()] {
            Slot::Occupied(inner) => inner,
            Slot::Vacant(_) => panic!("use of freed {node:?}"),
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn get_mut(&mut self, node: NodeRef) -> &mut Node<K> {
        match &mut self.slots[node.index()] {
            Slot::Occupied(inner) => inner,
            Slot::Vacant(_) => panic!("use of freed {node:?}"),
        }
    }

    /// Exchanges the keys of two distinct nodes, leaving links and colors in place.
    pub(crate) fn swap_keys(&mut self, a: NodeRef, b: NodeRef) {
        assert_ne!(a, b, "cannot swap a node's key with itself");

        let (lo, hi) = if a.index() < b.index() {
            (a, b)
        } else {
            (b, a)
        };
        let (head, tail) = self.slots.split_at_mut(hi.index());
        match (&mut head[lo.index()], &mut tail[0]) {
            (Slot::Occupied(lo), Slot::Occupied(hi)) => mem::swap(&mut lo.key, &mut hi.key),
            _ => panic!("use of freed node while swapping {a:?} and {b:?}"),
        }
    }

    /// Returns the color of a link, treating the sentinel as black.
    #[inline]
    pub(crate) fn color(&self, link: Link) -> Color {
        link.map_or(Color::Black, |node| self.get(node).color)
    }

    #[inline]
    pub(crate) fn is_red(&self, link: Link) -> bool {
        self.color(link) == Color::Red
    }

    #[inline]
    pub(crate) fn set_color(&mut self, node: NodeRef, color: Color) {
        self.get_mut(node).color = color;
    }

    #[inline]
    pub(crate) fn parent(&self, node: NodeRef) -> Link {
        self.get(node).parent
    }

    #[inline]
    pub(crate) fn child(&self, node: NodeRef, side: Side) -> Link {
        self.get(node).child(side)
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, node: NodeRef, parent: Link) {
        self.get_mut(node).parent = parent;
    }

    /// Puts `child` into the `side` slot of `parent`, pointing the child back at `parent`.
    pub(crate) fn attach(&mut self, parent: NodeRef, side: Side, child: Link) {
        self.get_mut(parent).replace_child(side, child);
        if let Some(child) = child {
            self.set_parent(child, Some(parent));
        }
    }

    /// Returns which side of `parent` the (possibly sentinel) `child` hangs on.
    ///
    /// A sentinel is identified by the slot it occupies, so `None` resolves to the
    /// side whose slot is empty. Both slots being empty is a broken invariant.
    pub(crate) fn side_of(&self, child: Link, parent: NodeRef) -> Side {
        let parent_node = self.get(parent);
        if let Some(child) = child {
            debug_assert_eq!(
                self.parent(child),
                Some(parent),
                "{parent:?} is not the parent of {child:?}"
            );
        } else {
            debug_assert!(
                !parent_node.is_leaf(),
                "sentinel position under leaf {parent:?} is ambiguous"
            );
        }

        if parent_node.left == child {
            Side::Left
        } else {
            debug_assert_eq!(parent_node.right, child);
            Side::Right
        }
    }

    pub(crate) fn find_minimum(&self, mut curr: NodeRef) -> NodeRef {
        while let Some(left) = self.get(curr).left {
            curr = left;
        }
        curr
    }

    pub(crate) fn find_maximum(&self, mut curr: NodeRef) -> NodeRef {
        while let Some(right) = self.get(curr).right {
            curr = right;
        }
        curr
    }

    /// In-order successor of `node`.
    pub(crate) fn next(&self, node: NodeRef) -> Link {
        self.step(node, Side::Right)
    }

    /// In-order predecessor of `node`.
    pub(crate) fn prev(&self, node: NodeRef) -> Link {
        self.step(node, Side::Left)
    }

    fn step(&self, node: NodeRef, side: Side) -> Link {
        // If we have a child on `side`, its extreme descendant towards us is the answer
        if let Some(child) = self.child(node, side) {
            return Some(match side {
                Side::Left => self.find_maximum(child),
                Side::Right => self.find_minimum(child),
            });
        }

        let mut curr = node;
        while let Some(parent) = self.parent(curr) {
            // the first ancestor we reach from its other side is the answer
            if self.child(parent, side) != Some(curr) {
                return Some(parent);
            }
            curr = parent;
        }

        // we reached the tree root without finding one
        None
    }
}
